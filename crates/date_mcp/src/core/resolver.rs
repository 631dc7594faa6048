use std::sync::Arc;

use crate::core::{
    error::{DateServerError, DateServerResult},
    locations::LocationTable,
    utils::{LOCATION_SAMPLE_SIZE, LOCATIONS_ENV_VAR},
};

/// Details of a failed location lookup, including how to fix it
#[derive(Debug, Clone)]
pub struct ResolutionFailure {
    /// The location as queried
    pub location: String,
    /// A few known location names, in table order
    pub sample: Vec<String>,
    /// Instructions for adding the missing location
    pub remediation: String,
}

impl ResolutionFailure {
    pub fn new(location: &str, sample: Vec<String>) -> Self {
        let known = if sample.is_empty() {
            "none".to_string()
        } else {
            sample.join(", ")
        };

        let remediation = format!(
            r#"Location '{location}' not found. Known locations include: {known}.

To add it, set the {var} environment variable (or pass --locations) before starting the server:
  {var}="{location}=Area/City"

Several locations can be configured at once, separated by commas:
  {var}="{location}=Area/City,Another City=Area/Another_City"

Timezones must be IANA names such as 'Europe/Vienna'. Call list_available_locations to see every configured location."#,
            var = LOCATIONS_ENV_VAR,
        );

        Self {
            location: location.to_string(),
            sample,
            remediation,
        }
    }
}

/// Resolves location names to IANA timezone identifiers
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    table: Arc<LocationTable>,
}

impl TimezoneResolver {
    pub fn new(table: Arc<LocationTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LocationTable {
        &self.table
    }

    /// Resolve a location: exact match first, then the first case-insensitive
    /// match in table order.
    pub fn resolve(&self, location: &str) -> DateServerResult<&str> {
        if let Some(timezone) = self.table.get(location) {
            return Ok(timezone);
        }

        let wanted = location.to_lowercase();
        if let Some(entry) = self
            .table
            .entries()
            .find(|e| e.name.to_lowercase() == wanted)
        {
            tracing::debug!(
                "Resolved '{}' case-insensitively to '{}'",
                location,
                entry.name
            );
            return Ok(&entry.timezone);
        }

        tracing::warn!("Location '{}' not found", location);
        Err(DateServerError::LocationNotFound(ResolutionFailure::new(
            location,
            self.table.sample(LOCATION_SAMPLE_SIZE),
        )))
    }
}
