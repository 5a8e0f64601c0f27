//! Structured RPC errors with localized detail messages.
//!
//! - [`RpcError`]: JSON-encoded error payload with typed constructors
//! - [`i18n`]: catalog-backed translation of error messages
//! - [`format`]: printf-style detail formatting

pub mod config;
mod de;
pub mod error;
pub mod format;
pub mod i18n;
pub mod status;

pub use error::{Category, RpcError};
pub use status::status_text;
