//! Punctuation consistency between a source string and its translation.

use std::collections::HashMap;

/// Characters that must appear equally often in source and translation.
const SPECIAL_CHARACTERS: &[char] = &[
    '.', ',', ':', ';', '\\', '/', '(', ')', '[', ']', '{', '}', '?', '!', '&', '%', '"', '\'',
    '*', '+', '~', '<', '>', '|', '=', '-', '\r', '\n', '\t',
];

/// Check that punctuation, brackets and whitespace escapes match as multisets.
///
/// Order is ignored, counts are not. A missing translation always passes.
///
/// ```
/// use trsync::core::special_characters_match;
///
/// assert!(special_characters_match("Hello, world!", Some("Bonjour, monde!")));
/// assert!(!special_characters_match("Item (1)", Some("Élément 1")));
/// assert!(special_characters_match("Item (1)", None));
/// ```
pub fn special_characters_match(source: &str, translation: Option<&str>) -> bool {
    match translation {
        Some(translation) => special_characters(source) == special_characters(translation),
        None => true,
    }
}

fn special_characters(text: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in text.chars().filter(|c| SPECIAL_CHARACTERS.contains(c)) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}
