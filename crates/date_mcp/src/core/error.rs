use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::resolver::ResolutionFailure;
use crate::core::utils::AVAILABLE_RESOURCES;

// Error codes
const ERROR_UNKNOWN_TOOL: &str = "unknown_tool";
const ERROR_INVALID_ARGUMENT: &str = "invalid_argument";
const ERROR_LOCATION_NOT_FOUND: &str = "location_not_found";
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_UNKNOWN_PROMPT: &str = "unknown_prompt";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";

/// Errors raised while serving date and time requests
#[derive(Debug, thiserror::Error)]
pub enum DateServerError {
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },
    #[error("{}", .0.remediation)]
    LocationNotFound(ResolutionFailure),
    #[error("Location '{location}' is mapped to '{timezone}', which is not a valid IANA timezone")]
    InvalidTimezone { location: String, timezone: String },
    #[error("Unknown prompt: {name}")]
    UnknownPrompt { name: String },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl DateServerError {
    pub fn missing_argument(argument: &str) -> Self {
        DateServerError::InvalidArgument {
            argument: argument.to_string(),
            reason: "a non-empty string is required".to_string(),
        }
    }
}

impl From<DateServerError> for McpError {
    fn from(err: DateServerError) -> Self {
        let message = err.to_string();
        match err {
            DateServerError::UnknownTool { name } => McpError::invalid_params(
                message,
                Some(json!({"code": ERROR_UNKNOWN_TOOL, "tool": name})),
            ),
            DateServerError::InvalidArgument { argument, .. } => McpError::invalid_params(
                message,
                Some(json!({"code": ERROR_INVALID_ARGUMENT, "argument": argument})),
            ),
            DateServerError::LocationNotFound(failure) => McpError::invalid_params(
                message,
                Some(json!({
                    "code": ERROR_LOCATION_NOT_FOUND,
                    "location": failure.location,
                    "known_locations": failure.sample,
                })),
            ),
            DateServerError::InvalidTimezone { location, timezone } => McpError::invalid_params(
                message,
                Some(json!({
                    "code": ERROR_INVALID_TIMEZONE,
                    "location": location,
                    "timezone": timezone,
                })),
            ),
            DateServerError::UnknownPrompt { name } => McpError::invalid_params(
                message,
                Some(json!({"code": ERROR_UNKNOWN_PROMPT, "prompt": name})),
            ),
            DateServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                message,
                Some(json!({
                    "code": ERROR_RESOURCE_NOT_FOUND,
                    "uri": uri,
                    "available_resources": AVAILABLE_RESOURCES,
                })),
            ),
            DateServerError::LoggingInitialization(_) => McpError::internal_error(message, None),
        }
    }
}

pub type DateServerResult<T> = Result<T, DateServerError>;
pub type McpResult<T> = Result<T, McpError>;
