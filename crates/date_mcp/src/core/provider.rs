use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{DateServerError, DateServerResult},
    resolver::TimezoneResolver,
    utils::{self, DATE_FORMAT, DATETIME_FORMAT, DAY_FORMAT, UTC_DATETIME_FORMAT},
};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host clock on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Date and time operations backing the tools
#[derive(Clone)]
pub struct DateServer {
    pub(crate) local_timezone: Tz,
    resolver: TimezoneResolver,
    clock: Arc<dyn Clock>,
}

impl DateServer {
    /// Create a server on the host clock and detected local timezone
    pub fn new(resolver: TimezoneResolver) -> Self {
        Self::with_clock(resolver, utils::detect_local_timezone(), Arc::new(SystemClock))
    }

    pub fn with_clock(
        resolver: TimezoneResolver,
        local_timezone: Tz,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            local_timezone,
            resolver,
            clock,
        }
    }

    pub fn resolver(&self) -> &TimezoneResolver {
        &self.resolver
    }

    fn local_now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.local_timezone)
    }

    /// English weekday name of the local date
    pub fn day_name(&self) -> String {
        self.local_now().format(DAY_FORMAT).to_string()
    }

    /// Local date as YYYY-MM-DD
    pub fn iso_date(&self) -> String {
        self.local_now().format(DATE_FORMAT).to_string()
    }

    /// Local time as ISO 8601 with offset
    pub fn current_time(&self) -> String {
        self.local_now().format(DATETIME_FORMAT).to_string()
    }

    /// UTC time as ISO 8601 with a trailing `Z`
    pub fn current_time_utc(&self) -> String {
        self.clock.now().format(UTC_DATETIME_FORMAT).to_string()
    }

    /// Time at a named location as ISO 8601 with offset
    pub fn current_time_at(&self, location: &str) -> DateServerResult<String> {
        let timezone_id = self.resolver.resolve(location)?;
        let timezone = Tz::from_str(timezone_id).map_err(|_| DateServerError::InvalidTimezone {
            location: location.to_string(),
            timezone: timezone_id.to_string(),
        })?;

        Ok(self
            .clock
            .now()
            .with_timezone(&timezone)
            .format(DATETIME_FORMAT)
            .to_string())
    }

    /// All configured location names, sorted, one per line
    pub fn available_locations(&self) -> String {
        self.resolver.table().sorted_names().join("\n")
    }
}
