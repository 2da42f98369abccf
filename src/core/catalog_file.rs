//! Reading and writing `lng_<language>.json` catalog files.
//!
//! File layout:
//!
//! ```json
//! {
//!     "metadata": { "base": "en", "language": "fr", "created": "2024-5-1", "author": "" },
//!     "strings": [
//!         { "context": "", "source": "Hello", "translation": "Bonjour" }
//!     ]
//! }
//! ```
//!
//! Metadata is opaque: whatever value the file holds is written back as-is,
//! object field order intact. A `null` metadata counts as absent.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, ser::PrettyFormatter};

use super::catalog::Catalog;
use crate::error::CatalogError;

const INDENT: &[u8] = b"    ";

/// Free-form catalog metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Value);

impl Metadata {
    /// Metadata for a catalog that is being created for the first time.
    pub fn synthesize(base: &str, language: &str, author: &str, created: NaiveDate) -> Self {
        let mut map = Map::new();
        map.insert("base".to_string(), Value::from(base));
        map.insert("language".to_string(), Value::from(language));
        map.insert("created".to_string(), Value::from(format_created(created)));
        map.insert("author".to_string(), Value::from(author));
        Self(Value::Object(map))
    }
}

/// `Y-M-D` without zero padding, e.g. `2024-5-1`.
pub fn format_created(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

#[derive(Debug, Serialize, Deserialize)]
struct StringRecord {
    context: String,
    source: String,
    // `Option::deserialize` makes the key required while still accepting null.
    #[serde(deserialize_with = "Option::deserialize")]
    translation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(deserialize_with = "Option::deserialize")]
    metadata: Option<Metadata>,
    strings: Vec<StringRecord>,
}

/// A catalog as read from disk. Every entry is marked unused.
#[derive(Debug, Default)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub metadata: Option<Metadata>,
}

/// Path of the catalog file for `language` inside `catalog_dir`.
pub fn catalog_path(catalog_dir: &Path, language: &str) -> PathBuf {
    catalog_dir.join(format!("lng_{}.json", language))
}

/// Load a catalog file.
///
/// Usage is decided by the source scan only, so nothing loaded here is marked
/// used. The whole file is parsed before any entry is accepted.
pub fn load_catalog(path: &Path) -> Result<LoadedCatalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            CatalogError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let document: CatalogDocument =
        serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut catalog = Catalog::new();
    for record in document.strings {
        catalog.set(&record.context, &record.source, record.translation, false);
    }

    Ok(LoadedCatalog {
        catalog,
        metadata: document.metadata,
    })
}

/// Render a catalog document with four-space indentation and a trailing newline.
pub fn render_catalog(catalog: &Catalog, metadata: &Metadata) -> serde_json::Result<String> {
    let document = CatalogDocument {
        metadata: Some(metadata.clone()),
        strings: catalog
            .iter()
            .map(|key| StringRecord {
                context: key.context.to_string(),
                source: key.source.to_string(),
                translation: key.entry.translation.clone(),
            })
            .collect(),
    };

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write a catalog file, creating the catalog directory when needed.
///
/// Serialization happens before the file is opened, so a failure there leaves
/// any existing file untouched.
pub fn save_catalog(
    path: &Path,
    catalog: &Catalog,
    metadata: &Metadata,
) -> Result<(), CatalogError> {
    let content = render_catalog(catalog, metadata).map_err(|source| CatalogError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}
