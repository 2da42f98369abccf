//! Per-key diagnostics for a merged catalog.

use super::{
    catalog::{Catalog, KeyRef},
    consistency::special_characters_match,
};

/// Diagnostic state of one catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStatus<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub translation: Option<&'a str>,
    pub is_used: bool,
    pub special_characters_ok: bool,
}

impl<'a> KeyStatus<'a> {
    pub fn new(key: KeyRef<'a>) -> Self {
        let translation = key.entry.translation.as_deref();
        Self {
            context: key.context,
            source: key.source,
            translation,
            is_used: key.entry.is_used,
            special_characters_ok: special_characters_match(key.source, translation),
        }
    }

    pub fn is_translated(&self) -> bool {
        self.translation.is_some()
    }
}

/// Status of every key, in catalog order.
pub fn key_statuses(catalog: &Catalog) -> Vec<KeyStatus<'_>> {
    catalog.iter().map(KeyStatus::new).collect()
}

/// Aggregate counts over a set of key statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub translated: usize,
    pub untranslated: usize,
    pub unused: usize,
    pub mismatched: usize,
}

impl StatusCounts {
    pub fn from_statuses(statuses: &[KeyStatus<'_>]) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.total += 1;
            if status.is_translated() {
                counts.translated += 1;
            } else {
                counts.untranslated += 1;
            }
            if !status.is_used {
                counts.unused += 1;
            }
            if !status.special_characters_ok {
                counts.mismatched += 1;
            }
        }
        counts
    }

    pub fn has_problems(&self) -> bool {
        self.untranslated + self.unused + self.mismatched > 0
    }
}
