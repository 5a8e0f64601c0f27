use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Translation catalog
    pub catalog_path: String,
    pub default_language: String,

    // Identity reported in the `id` field of errors
    pub service_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            catalog_path: std::env::var("ERROR_CATALOG_PATH")
                .context("ERROR_CATALOG_PATH not set")?,
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            service_id: std::env::var("ERROR_SERVICE_ID")
                .unwrap_or_else(|_| "rpc-errors".to_string()),
        })
    }
}
