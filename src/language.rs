//! Supported target languages.
//!
//! Codes follow the console's system language codes. The table is static data:
//! a code is valid exactly when it appears in [`SUPPORTED_LANGUAGES`].

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Allowed language codes and their display names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ja", "Japanese"),
    ("en-US", "AmericanEnglish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("es", "Spanish"),
    ("zh-CN", "Chinese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("zh-TW", "Taiwanese"),
    ("en-GB", "BritishEnglish"),
    ("fr-CA", "CanadianFrench"),
    ("es-419", "LatinAmericanSpanish"),
    ("zh-Hans", "[4.0.0+] SimplifiedChinese"),
    ("zh-Hant", "[4.0.0+] TraditionalChinese"),
    ("pt-BR", "[10.1.0+] BrazilianPortuguese"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("Language code '{code}' is wrong. Allowed: {}", allowed_list())]
    Unsupported { code: String },
}

/// A validated language code from [`SUPPORTED_LANGUAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(code, _)| *code == s)
            .map(|&(code, name)| Language { code, name })
            .ok_or_else(|| LanguageError::Unsupported {
                code: s.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

fn allowed_list() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("{} ({})", code, name))
        .collect::<Vec<_>>()
        .join(", ")
}
