use rmcp::model::{CallToolResult, Content, JsonObject};

use crate::core::{
    error::DateServerResult,
    provider::DateServer,
    tools::ToolCall,
};

/// Routes tool calls to the date server
#[derive(Clone)]
pub struct ToolDispatcher {
    date_server: DateServer,
}

impl ToolDispatcher {
    pub fn new(date_server: DateServer) -> Self {
        Self { date_server }
    }

    pub fn date_server(&self) -> &DateServer {
        &self.date_server
    }

    /// Run the named tool, producing a single text block on success
    pub fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> DateServerResult<CallToolResult> {
        tracing::debug!("Dispatching tool '{}'", name);
        let text = self.execute(ToolCall::parse(name, arguments)?)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn execute(&self, call: ToolCall) -> DateServerResult<String> {
        let server = &self.date_server;
        Ok(match call {
            ToolCall::DayName => server.day_name(),
            ToolCall::IsoDate => server.iso_date(),
            ToolCall::CurrentTime => server.current_time(),
            ToolCall::CurrentTimeUtc => server.current_time_utc(),
            ToolCall::CurrentTimeLocation(req) => server.current_time_at(&req.location)?,
            ToolCall::ListAvailableLocations => server.available_locations(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::{CallToolResult, JsonObject};
    use rmcp::serde_json::{Value, json};

    use super::ToolDispatcher;
    use crate::core::error::DateServerError;
    use crate::core::provider::tests::test_server;

    fn dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(test_server(chrono_tz::UTC, "Vienna=Europe/Vienna"))
    }

    fn args(value: Value) -> Option<JsonObject> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    fn single_text(result: CallToolResult) -> String {
        assert_eq!(result.content.len(), 1);
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .expect("text content")
    }

    #[test]
    fn test_day_name() {
        let result = dispatcher().dispatch("get_day_name", None).unwrap();
        assert_eq!(single_text(result), "Friday");
    }

    #[test]
    fn test_iso_date() {
        let result = dispatcher().dispatch("get_iso_date", None).unwrap();
        assert_eq!(single_text(result), "2024-03-15");
    }

    #[test]
    fn test_current_time() {
        let result = dispatcher().dispatch("current_time", None).unwrap();
        assert_eq!(single_text(result), "2024-03-15T23:30:00+00:00");
    }

    #[test]
    fn test_current_time_utc() {
        let result = dispatcher().dispatch("current_time_utc", None).unwrap();
        let text = single_text(result);
        assert!(text.ends_with('Z'));
        assert!(!text.ends_with("+00:00"));
    }

    #[test]
    fn test_current_time_location() {
        let result = dispatcher()
            .dispatch("current_time_location", args(json!({"location": "Vienna"})))
            .unwrap();
        assert_eq!(single_text(result), "2024-03-16T00:30:00+01:00");
    }

    #[test]
    fn test_current_time_location_missing_argument() {
        let dispatcher = dispatcher();

        let err = dispatcher
            .dispatch("current_time_location", args(json!({})))
            .unwrap_err();
        assert!(matches!(err, DateServerError::InvalidArgument { .. }));

        let err = dispatcher
            .dispatch("current_time_location", args(json!({"location": ""})))
            .unwrap_err();
        assert!(matches!(err, DateServerError::InvalidArgument { .. }));
    }

    #[test]
    fn test_current_time_location_not_found() {
        let err = dispatcher()
            .dispatch(
                "current_time_location",
                args(json!({"location": "Nonexistent City"})),
            )
            .unwrap_err();

        assert!(matches!(err, DateServerError::LocationNotFound(_)));
        assert!(err.to_string().contains("Nonexistent City"));
    }

    #[test]
    fn test_list_available_locations() {
        let result = dispatcher()
            .dispatch("list_available_locations", None)
            .unwrap();
        let text = single_text(result);
        let names: Vec<&str> = text.lines().collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"Vienna"));
    }

    #[test]
    fn test_unknown_tool() {
        let err = dispatcher().dispatch("not_a_tool", args(json!({}))).unwrap_err();
        assert!(matches!(err, DateServerError::UnknownTool { .. }));
    }

    #[test]
    fn test_results_are_not_errors() {
        let result = dispatcher().dispatch("get_iso_date", None).unwrap();
        assert_ne!(result.is_error, Some(true));
    }
}
