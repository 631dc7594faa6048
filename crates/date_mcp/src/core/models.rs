use rmcp::schemars;
use serde::{Deserialize, Deserializer};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// A human-readable location mapped to an IANA timezone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationEntry {
    /// Location name as configured, e.g. 'New York'
    pub name: String,
    /// IANA timezone identifier, e.g. 'America/New_York'
    pub timezone: String,
}

impl LocationEntry {
    pub fn new(name: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timezone: timezone.into(),
        }
    }
}

/// Request to get the current time at a named location
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CurrentTimeLocationRequest {
    /// Location name (e.g., 'Tokyo', 'New York')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[schemars(with = "String")]
    pub location: String,
}
