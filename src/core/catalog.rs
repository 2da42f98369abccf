//! In-memory translation catalog and the merge that drives `update`.
//!
//! A catalog maps context -> source text -> entry. Both levels keep insertion
//! order, which is also the order entries are written back to disk and
//! reported in.

use indexmap::IndexMap;

/// Translation state of one `(context, source)` key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationEntry {
    pub translation: Option<String>,
    /// True when the most recent source scan referenced this key.
    pub is_used: bool,
}

/// A borrowed view of one catalog key, yielded by [`Catalog::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRef<'a> {
    pub context: &'a str,
    pub source: &'a str,
    pub entry: &'a TranslationEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    keys: IndexMap<String, IndexMap<String, TranslationEntry>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key. An existing key keeps its position.
    pub fn set(&mut self, context: &str, source: &str, translation: Option<String>, is_used: bool) {
        let sources = self.keys.entry(context.to_string()).or_default();
        let entry = sources.entry(source.to_string()).or_default();
        entry.translation = translation;
        entry.is_used = is_used;
    }

    pub fn get(&self, context: &str, source: &str) -> Option<&TranslationEntry> {
        self.keys.get(context)?.get(source)
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.get(context, source).is_some()
    }

    pub fn translation(&self, context: &str, source: &str) -> Option<&str> {
        self.get(context, source)?.translation.as_deref()
    }

    pub fn is_used(&self, context: &str, source: &str) -> bool {
        self.get(context, source).is_some_and(|e| e.is_used)
    }

    /// Every key, contexts first then sources, both in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = KeyRef<'_>> {
        self.keys.iter().flat_map(|(context, sources)| {
            sources.iter().map(move |(source, entry)| KeyRef {
                context,
                source,
                entry,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.keys.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge `addition` into this catalog.
    ///
    /// A key already present takes the addition's translation and is marked
    /// used. A new key is copied as-is, unless `only_existing` is set, in
    /// which case it is dropped.
    pub fn merge(&mut self, addition: &Catalog, only_existing: bool) {
        for key in addition.iter() {
            if self.contains(key.context, key.source) {
                self.set(key.context, key.source, key.entry.translation.clone(), true);
            } else if !only_existing {
                self.set(
                    key.context,
                    key.source,
                    key.entry.translation.clone(),
                    key.entry.is_used,
                );
            }
        }
    }
}

/// Combine a fresh source scan with the previously saved catalog.
///
/// Scanned keys always survive and are used; they pick up the saved
/// translation when one exists. Saved keys the scan no longer references are
/// kept as unused, or dropped when `remove_unused` is set.
pub fn merge_catalogs(scanned: &Catalog, loaded: &Catalog, remove_unused: bool) -> Catalog {
    let mut result = Catalog::new();
    result.merge(scanned, false);
    result.merge(loaded, remove_unused);
    result
}
