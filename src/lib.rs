//! trsync - translation catalog sync for `TR()`/`TR_CTX()` sources
//!
//! trsync scans a source file for `TR("text")` and `TR_CTX("text", "context")`
//! markers, merges the keys it finds into a per-language `lng_<code>.json`
//! catalog, and reports untranslated, unused and inconsistent entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, terminal report)
//! - `config`: `.trsyncrc.json` loading
//! - `core`: Scan, load, merge and save pipeline
//! - `error`: Error types
//! - `language`: Supported language codes

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod language;
