use tracing_subscriber::{EnvFilter, prelude::*};

use crate::core::error::{DateServerError, DateServerResult};

/// Initialize logging when `RUST_LOG` is set
///
/// Logs go to stderr; stdout carries the MCP protocol.
pub fn init_logging() -> DateServerResult<()> {
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| DateServerError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
