use anyhow::{bail, Context, Result};
use rpc_errors::config::Config;
use rpc_errors::i18n::resolve_message;
use rpc_errors::RpcError;
use tracing::info;

const USAGE: &str = "usage: translate-error <message_type> [language] [code]";

fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so stdout only carries the encoded error)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rpc_errors=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let mut args = std::env::args().skip(1);
    let Some(message_type) = args.next() else {
        bail!(USAGE);
    };
    let language = args
        .next()
        .unwrap_or_else(|| config.default_language.clone());
    let code: i32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid status code '{}'", raw))?,
        None => 400,
    };

    info!(
        "Resolving '{}' in '{}' from {}",
        message_type, language, config.catalog_path
    );

    let detail = resolve_message(&config.catalog_path, &message_type, &language)
        .with_context(|| format!("Failed to resolve message from {}", config.catalog_path))?;

    let error = RpcError::new(config.service_id, detail, code);
    println!("{}", error);

    Ok(())
}
