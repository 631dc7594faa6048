mod cli;
mod config;
mod core;
mod logging;
mod server;

use cli::Cli;

/// Date MCP Server
///
/// Answers date and time questions over stdio:
/// - Tools: Weekday, date, local/UTC time and time at named locations
/// - Prompts: A date summary request
/// - Resources: Server status, help and the configured locations
///
/// Usage: npx @modelcontextprotocol/inspector cargo run --bin mcp-server-date
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse_config();

    logging::init_logging()?;
    tracing::info!("Starting Date MCP server");

    if let Err(e) = server::run(config).await {
        tracing::error!("Error running Date MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
