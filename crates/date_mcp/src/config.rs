/// Configuration derived from CLI arguments and environment
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Comma-separated `Name=Area/City` location overrides
    pub locations: Option<String>,
}
