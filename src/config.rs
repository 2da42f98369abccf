use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".trsyncrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File scanned for `TR`/`TR_CTX` markers.
    #[serde(default = "default_source_file")]
    pub source_file: String,
    /// Directory holding the `lng_<language>.json` catalogs.
    #[serde(default = "default_catalog_dir")]
    pub catalog_dir: String,
    /// Written as `base` when a new catalog's metadata is synthesized.
    #[serde(default = "default_base_language")]
    pub base_language: String,
    #[serde(default)]
    pub author: String,
}

fn default_source_file() -> String {
    "source/Main.cpp".to_string()
}

fn default_catalog_dir() -> String {
    "lang".to_string()
}

fn default_base_language() -> String {
    "en".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_file: default_source_file(),
            catalog_dir: default_catalog_dir(),
            base_language: default_base_language(),
            author: String::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.source_file.trim().is_empty() {
            bail!("'sourceFile' must not be empty");
        }
        if self.catalog_dir.trim().is_empty() {
            bail!("'catalogDir' must not be empty");
        }
        if self.base_language.trim().is_empty() {
            bail!("'baseLanguage' must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory that relative config paths are resolved against: the one
    /// holding the config file, or the start directory when none was found.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn source_path(&self) -> PathBuf {
        self.root.join(&self.config.source_file)
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.root.join(&self.config.catalog_dir)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
