//! Core data model: a single translation pair, one language's file, and the
//! cross-language group of files sharing a logical path.

use std::{fmt::Display, path::PathBuf};

use serde::{Deserialize, Serialize};

/// A single key/value translation pair.
///
/// Ordering is by key (then value), which is what keeps serialized files
/// deterministic and diff-friendly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct LocalizationString {
    /// The key for this localization entry, unique within one file.
    pub key: String,
    /// The value for this localization entry. May contain quote characters.
    pub value: String,
}

impl LocalizationString {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        LocalizationString {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for LocalizationString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// Complete localization for a single language. Represents a single strings
/// file for a single language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Localization {
    /// Language code derived from the enclosing bundle directory (e.g. "en").
    pub language: String,

    /// Key-sorted translation pairs loaded from `path`.
    pub translations: Vec<LocalizationString>,

    /// The on-disk identity of this language's file. Never changes after
    /// construction; updates are written back to this path.
    pub path: PathBuf,
}

impl Localization {
    pub fn new(
        language: impl Into<String>,
        translations: Vec<LocalizationString>,
        path: PathBuf,
    ) -> Self {
        Localization {
            language: language.into(),
            translations,
            path,
        }
    }

    /// Finds the translation for a key, if present.
    pub fn translation(&self, key: &str) -> Option<&LocalizationString> {
        self.translations.iter().find(|string| string.key == key)
    }
}

impl Display for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.language.to_uppercase())
    }
}

/// The cross-language cluster of [`Localization`] instances that represent
/// the same logical file (same relative path once language bundle
/// directories are elided).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocalizationGroup {
    /// File name of the logical path (e.g. "Localizable.strings").
    pub name: String,

    /// The logical path shared by all localizations in this group.
    pub path: String,

    /// Per-language localizations, sorted by language.
    pub localizations: Vec<Localization>,
}

impl Display for LocalizationGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
