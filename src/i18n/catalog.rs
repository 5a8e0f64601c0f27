//! Translation catalog types and loading.

use crate::de::null_as_default;
use crate::i18n::CatalogError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// In-memory view of a catalog file.
///
/// Read-only once loaded. Entry order is preserved from the file and is
/// significant for lookups: the first entry with a matching type wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "null_as_default")]
    error_list: Vec<ErrorMessage>,
}

/// A message type with its translations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorMessage {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    message_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    translated_message: Vec<TranslatedMessage>,
}

impl ErrorMessage {
    /// Caller-defined key, independent of language
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Translations in file order
    pub fn translations(&self) -> &[TranslatedMessage] {
        &self.translated_message
    }
}

/// Message text for a single language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TranslatedMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    language: String,
}

impl TranslatedMessage {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Language code (e.g., "en", "fr")
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Catalog {
    /// Decode a catalog from YAML (or JSON) text.
    ///
    /// An empty or null document is an empty catalog. Decoding is
    /// all-or-nothing: any structural mismatch is an error.
    pub fn from_yaml_str(contents: &str) -> Result<Catalog, CatalogError> {
        Self::from_yaml_slice(contents.as_bytes()).map_err(|source| CatalogError::Decode {
            path: PathBuf::from("<string>"),
            source,
        })
    }

    fn from_yaml_slice(contents: &[u8]) -> Result<Catalog, serde_yaml::Error> {
        if contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(Catalog::default());
        }

        let catalog: Option<Catalog> = serde_yaml::from_slice(contents)?;
        Ok(catalog.unwrap_or_default())
    }

    /// Entries in file order
    pub fn entries(&self) -> &[ErrorMessage] {
        &self.error_list
    }

    /// Number of message types in the catalog.
    pub fn len(&self) -> usize {
        self.error_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.error_list.is_empty()
    }

    /// Message types in file order (duplicates included).
    pub fn message_types(&self) -> Vec<&str> {
        self.error_list
            .iter()
            .map(|entry| entry.message_type.as_str())
            .collect()
    }
}

/// Load a catalog from a file.
///
/// The file is read fully and closed before decoding; nothing is cached, so
/// every call reflects the file's current contents.
///
/// # Errors
/// * `CatalogError::Io` if the file cannot be opened or read
/// * `CatalogError::Decode` if the contents are not a valid catalog
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();

    let contents = fs::read(path).map_err(|source| {
        warn!("Failed to read error catalog {}: {}", path.display(), source);
        CatalogError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let catalog = Catalog::from_yaml_slice(&contents).map_err(|source| {
        warn!("Failed to decode error catalog {}: {}", path.display(), source);
        CatalogError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!(
        "Loaded {} error message types from {}",
        catalog.len(),
        path.display()
    );

    Ok(catalog)
}
