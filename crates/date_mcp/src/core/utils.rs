use chrono_tz::Tz;

// Constants for format strings and configuration
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const UTC_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DAY_FORMAT: &str = "%A";

/// Environment variable holding extra `Name=Area/City` location pairs
pub const LOCATIONS_ENV_VAR: &str = "DATE_MCP_LOCATIONS";

/// Number of known locations quoted back when a lookup fails
pub const LOCATION_SAMPLE_SIZE: usize = 5;

/// Available resource URIs for the Date MCP Server
pub const AVAILABLE_RESOURCES: &[&str] = &["date://status", "date://help", "date://locations"];

/// Detect the host's IANA timezone, falling back to UTC
pub fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(_) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC");
            chrono_tz::UTC
        }
    }
}
