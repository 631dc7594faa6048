use clap::Parser;

use crate::config::Config;

/// Date MCP Server
///
/// A Model Context Protocol server answering date and time questions, including
/// the current time at named locations.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-date
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "date": {
///       "command": "mcp-server-date",
///       "env": {
///         "DATE_MCP_LOCATIONS": "Vienna=Europe/Vienna,Reykjavik=Atlantic/Reykjavik",
///         "RUST_LOG": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `DATE_MCP_LOCATIONS`: Extra `Name=Area/City` locations, comma separated
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-date")]
#[command(about = "A date and time MCP server with location-aware time lookups")]
#[command(version)]
#[command(
    long_about = "A Model Context Protocol (MCP) server that reports the current weekday, date and time, \nand the current time at named locations backed by a configurable location table."
)]
pub struct Cli {
    /// Extra locations as comma-separated `Name=Area/City` pairs.
    ///
    /// Entries overwrite built-in locations with the same exact name.
    /// Malformed entries are ignored.
    #[arg(long, value_name = "PAIRS", env = "DATE_MCP_LOCATIONS")]
    pub locations: Option<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        Self::parse().into_config()
    }

    fn into_config(self) -> Config {
        Config {
            locations: self.locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locations_flag() {
        let cli = Cli::parse_from([
            "mcp-server-date",
            "--locations",
            "Vienna=Europe/Vienna",
        ]);
        let config = cli.into_config();
        assert_eq!(config.locations.as_deref(), Some("Vienna=Europe/Vienna"));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
