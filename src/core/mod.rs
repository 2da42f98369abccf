//! Core sync engine: scan sources, load the saved catalog, merge, save.
//!
//! - `scanner`: `TR`/`TR_CTX` extraction from source text
//! - `catalog`: the ordered key map and merge rules
//! - `catalog_file`: JSON persistence and metadata
//! - `consistency`: punctuation heuristic
//! - `status`: per-key diagnostics used by reporting

pub mod catalog;
pub mod catalog_file;
pub mod consistency;
pub mod scanner;
pub mod status;

pub use catalog::{Catalog, KeyRef, TranslationEntry, merge_catalogs};
pub use catalog_file::{
    LoadedCatalog, Metadata, catalog_path, load_catalog, render_catalog, save_catalog,
};
pub use consistency::special_characters_match;
pub use scanner::{scan_source, scan_text};
pub use status::{KeyStatus, StatusCounts, key_statuses};
