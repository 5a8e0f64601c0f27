//! Message resolution.
//!
//! Lookups return a typed [`Translation`]. [`resolve_message`] flattens it
//! into the legacy string form, where misses are reported as sentinel
//! strings in the success channel rather than as errors.

use crate::i18n::{load_catalog, Catalog, CatalogError};
use std::path::Path;
use tracing::debug;

/// Sentinel text: the message type exists but has no text for the language.
pub const NOT_SUPPORT: &str = "language:notSupport";

/// Sentinel text: the message type is not in the catalog.
pub const NOT_EXISTED: &str = "messageType:notExisted";

/// Text reported by the Redis client for a missing key.
pub const REDIS_EMPTY: &str = "redis: nil";

/// Outcome of looking up a message type and language in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation<'a> {
    /// The translated text
    Found(&'a str),
    /// No entry has the requested message type
    TypeNotFound,
    /// The entry exists but has no text for the requested language
    LanguageNotSupported,
    /// The catalog has no entries at all
    Empty,
}

impl Translation<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Translation::Found(_))
    }

    /// Convert to the legacy string form.
    ///
    /// Misses map to [`NOT_EXISTED`] and [`NOT_SUPPORT`]; an empty catalog
    /// maps to an empty string.
    pub fn into_legacy_text(self) -> String {
        match self {
            Translation::Found(text) => text.to_string(),
            Translation::TypeNotFound => NOT_EXISTED.to_string(),
            Translation::LanguageNotSupported => NOT_SUPPORT.to_string(),
            Translation::Empty => String::new(),
        }
    }
}

impl Catalog {
    /// Look up the text for a message type in a language.
    ///
    /// Entries are scanned in file order and only the first entry with a
    /// matching type is considered; within it, the first matching language wins.
    pub fn lookup(&self, message_type: &str, language: &str) -> Translation<'_> {
        if self.is_empty() {
            return Translation::Empty;
        }

        let Some(entry) = self
            .entries()
            .iter()
            .find(|entry| entry.message_type() == message_type)
        else {
            return Translation::TypeNotFound;
        };

        entry
            .translations()
            .iter()
            .find(|message| message.language() == language)
            .map_or(Translation::LanguageNotSupported, |message| {
                Translation::Found(message.text())
            })
    }
}

/// Resolve a message type to its text in a language, reading the catalog at `path`.
///
/// The catalog is loaded fresh on every call.
///
/// # Returns
/// * `Ok(text)` when found
/// * `Ok(NOT_EXISTED)` when the message type is unknown
/// * `Ok(NOT_SUPPORT)` when the language is missing for that type
/// * `Ok("")` when the catalog is empty
/// * `Err` when the catalog cannot be read or decoded
pub fn resolve_message(
    path: impl AsRef<Path>,
    message_type: &str,
    language: &str,
) -> Result<String, CatalogError> {
    let catalog = load_catalog(path)?;
    let translation = catalog.lookup(message_type, language);

    if !translation.is_found() {
        debug!(
            "No translation for message type '{}' in '{}': {:?}",
            message_type, language, translation
        );
    }

    Ok(translation.into_legacy_text())
}
