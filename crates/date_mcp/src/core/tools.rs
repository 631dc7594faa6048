use std::str::FromStr;
use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{JsonObject, Tool};
use rmcp::serde_json::{self, Value, json};

use crate::core::{
    error::{DateServerError, DateServerResult},
    models::CurrentTimeLocationRequest,
};

/// Every tool the server exposes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTool {
    DayName,
    IsoDate,
    CurrentTime,
    CurrentTimeUtc,
    CurrentTimeLocation,
    ListAvailableLocations,
}

impl DateTool {
    pub const ALL: [DateTool; 6] = [
        DateTool::DayName,
        DateTool::IsoDate,
        DateTool::CurrentTime,
        DateTool::CurrentTimeUtc,
        DateTool::CurrentTimeLocation,
        DateTool::ListAvailableLocations,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DateTool::DayName => "get_day_name",
            DateTool::IsoDate => "get_iso_date",
            DateTool::CurrentTime => "current_time",
            DateTool::CurrentTimeUtc => "current_time_utc",
            DateTool::CurrentTimeLocation => "current_time_location",
            DateTool::ListAvailableLocations => "list_available_locations",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DateTool::DayName => "Get the name of the current day of the week",
            DateTool::IsoDate => "Get the current date in ISO 8601 format (YYYY-MM-DD)",
            DateTool::CurrentTime => {
                "Get the current local time in ISO 8601 format, including the UTC offset"
            }
            DateTool::CurrentTimeUtc => "Get the current UTC time in ISO 8601 format (ending in Z)",
            DateTool::CurrentTimeLocation => {
                "Get the current time at a named location (e.g. 'Tokyo') in ISO 8601 format, including the UTC offset"
            }
            DateTool::ListAvailableLocations => {
                "List every location name accepted by current_time_location"
            }
        }
    }

    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            DateTool::CurrentTimeLocation => {
                cached_schema_for_type::<CurrentTimeLocationRequest>()
            }
            _ => Arc::new(empty_object_schema()),
        }
    }

    pub fn descriptor(self) -> Tool {
        Tool::new(self.name(), self.description(), self.input_schema())
    }
}

impl FromStr for DateTool {
    type Err = DateServerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        DateTool::ALL
            .into_iter()
            .find(|tool| tool.name() == name)
            .ok_or_else(|| DateServerError::UnknownTool {
                name: name.to_string(),
            })
    }
}

/// Schema for tools that take no parameters
fn empty_object_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), json!("object"));
    schema.insert("properties".to_string(), json!({}));
    schema.insert("required".to_string(), json!([]));
    schema
}

/// A tool invocation with its arguments decoded
#[derive(Debug)]
pub enum ToolCall {
    DayName,
    IsoDate,
    CurrentTime,
    CurrentTimeUtc,
    CurrentTimeLocation(CurrentTimeLocationRequest),
    ListAvailableLocations,
}

impl ToolCall {
    /// Decode a named call. Parameterless tools ignore any arguments.
    pub fn parse(name: &str, arguments: Option<JsonObject>) -> DateServerResult<Self> {
        let call = match name.parse::<DateTool>()? {
            DateTool::DayName => ToolCall::DayName,
            DateTool::IsoDate => ToolCall::IsoDate,
            DateTool::CurrentTime => ToolCall::CurrentTime,
            DateTool::CurrentTimeUtc => ToolCall::CurrentTimeUtc,
            DateTool::CurrentTimeLocation => {
                let request: CurrentTimeLocationRequest =
                    serde_json::from_value(Value::Object(arguments.unwrap_or_default())).map_err(
                        |e| DateServerError::InvalidArgument {
                            argument: "location".to_string(),
                            reason: e.to_string(),
                        },
                    )?;
                if request.location.is_empty() {
                    return Err(DateServerError::missing_argument("location"));
                }
                ToolCall::CurrentTimeLocation(request)
            }
            DateTool::ListAvailableLocations => ToolCall::ListAvailableLocations,
        };
        Ok(call)
    }
}

/// The fixed tool catalog
pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list() -> Vec<Tool> {
        DateTool::ALL.into_iter().map(DateTool::descriptor).collect()
    }
}
