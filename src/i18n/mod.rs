//! Localized error messages.
//!
//! Error details shown to clients can be translated through a catalog file
//! that maps a message type and a language code to a text.
//!
//! # Architecture
//!
//! - `catalog`: Catalog types and loading from YAML/JSON files
//! - `lookup`: Message resolution, including the legacy sentinel strings
//! - `error`: Hard failures (unreadable or malformed catalog files)
//!
//! # Catalog format
//!
//! ```yaml
//! error_list:
//!   - type: user_not_found
//!     translated_message:
//!       - text: User not found
//!         language: en
//!       - text: Utilisateur introuvable
//!         language: fr
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use rpc_errors::i18n::resolve_message;
//!
//! let text = resolve_message("errors.yaml", "user_not_found", "fr")?;
//! ```

mod catalog;
mod error;
mod lookup;

pub use catalog::{load_catalog, Catalog, ErrorMessage, TranslatedMessage};
pub use error::CatalogError;
pub use lookup::{resolve_message, Translation, NOT_EXISTED, NOT_SUPPORT, REDIS_EMPTY};
