//! Shared serde helpers.

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` (e.g. `error_list:` with no value) like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
