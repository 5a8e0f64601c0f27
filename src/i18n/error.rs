//! Hard failures when loading a translation catalog.
//!
//! Lookup misses are not errors; they are reported through `Translation`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load a translation catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read
    #[error("error reading error catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog contents are not a valid catalog document
    ///
    /// `path` is `<string>` when the catalog was decoded from in-memory text.
    #[error("unable to decode error catalog {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl CatalogError {
    pub fn is_io(&self) -> bool {
        matches!(self, CatalogError::Io { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CatalogError::Decode { .. })
    }
}
