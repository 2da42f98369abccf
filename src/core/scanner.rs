//! Source scanner for `TR("...")` and `TR_CTX("...", "...")` markers.
//!
//! Scanning is plain text, line by line. Quoted strings run up to the next
//! `"`, so escaped quotes inside a marker are not supported.

use std::{fs, io, path::Path, sync::LazyLock};

use regex::Regex;

use super::catalog::Catalog;
use crate::error::SyncError;

static PLAIN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"TR\(\s*"(.*?)"\s*\)"#).expect("valid plain marker regex"));

static CONTEXT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"TR_CTX\(\s*"(.*?)"\s*,\s*"(.*?)"\s*\)"#).expect("valid context marker regex")
});

/// Scan a source file. Every key found is marked used and untranslated.
pub fn scan_source(path: &Path) -> Result<Catalog, SyncError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            SyncError::SourceFileMissing {
                path: path.to_path_buf(),
                source,
            }
        } else {
            SyncError::SourceRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(scan_text(&content))
}

/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub fn scan_text(content: &str) -> Catalog {
    let mut used = Catalog::new();
    for line in content.split(['\n', '\r']) {
        scan_line(line, &mut used);
    }
    used
}

/// Plain markers on a line are collected before contextual ones.
fn scan_line(line: &str, used: &mut Catalog) {
    for caps in PLAIN_MARKER.captures_iter(line) {
        used.set("", &caps[1], None, true);
    }
    for caps in CONTEXT_MARKER.captures_iter(line) {
        used.set(&caps[2], &caps[1], None, true);
    }
}
