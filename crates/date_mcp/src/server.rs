use std::sync::Arc;

use rmcp::{RoleServer, ServerHandler, model::*, service::RequestContext};

use crate::config::Config;
use crate::core::{
    dispatcher::ToolDispatcher,
    error::{DateServerError, McpResult},
    locations::LocationTable,
    prompts::PromptCatalog,
    provider::DateServer,
    resolver::TimezoneResolver,
    tools::ToolRegistry,
    utils::{AVAILABLE_RESOURCES, LOCATIONS_ENV_VAR},
};

/// Date MCP Server with date, time and location lookups
#[derive(Clone)]
pub struct DateService {
    dispatcher: ToolDispatcher,
    prompts: PromptCatalog,
    local_timezone_name: String,
}

impl DateService {
    pub fn new(config: &Config) -> Self {
        let table = Arc::new(LocationTable::from_config(config));
        Self::from_date_server(DateServer::new(TimezoneResolver::new(table)))
    }

    pub fn from_date_server(date_server: DateServer) -> Self {
        let local_timezone_name = date_server.local_timezone.name().to_string();
        tracing::info!("Local timezone: {}", local_timezone_name);

        Self {
            dispatcher: ToolDispatcher::new(date_server),
            prompts: PromptCatalog::new(local_timezone_name.clone()),
            local_timezone_name,
        }
    }

    fn create_resource_text(&self, uri: &str, name: &str) -> Resource {
        RawResource::new(uri, name.to_string()).no_annotation()
    }

    pub(crate) fn get_local_timezone_name(&self) -> &str {
        &self.local_timezone_name
    }

    fn date_server(&self) -> &DateServer {
        self.dispatcher.date_server()
    }

    fn generate_status_content(&self) -> String {
        let server = self.date_server();

        format!(
            r#"Date MCP Server Status

Server: Running
Local Timezone: {}
Current Local Time: {}
Day of Week: {}
Configured Locations: {}
Tools Available: {}
Prompts Available: {}
Resources Available: {}

Capabilities:
- Current weekday, date and time on the host clock
- Current UTC time
- Current time at named locations
- Configurable location table"#,
            self.local_timezone_name,
            server.current_time(),
            server.day_name(),
            server.resolver().table().len(),
            ToolRegistry::list().len(),
            self.prompts.list().len(),
            AVAILABLE_RESOURCES.len(),
        )
    }

    fn generate_help_content(&self) -> String {
        format!(
            r#"Date MCP Server Help

TOOLS:
- get_day_name: Name of the current day of the week (e.g. Friday)
  - No parameters required

- get_iso_date: Current date as YYYY-MM-DD
  - No parameters required

- current_time: Current local time in ISO 8601 with UTC offset
  - No parameters required

- current_time_utc: Current UTC time in ISO 8601, ending in Z
  - No parameters required

- current_time_location: Current time at a named location
  - location: Location name (required, case-insensitive)
  - Example: {{"location": "Tokyo"}}

- list_available_locations: Every location accepted by current_time_location
  - No parameters required

PROMPTS:
- date-summary: Ask for a summary of the current date, time and weekday

RESOURCES:
- date://status: Current server status and local time
- date://help: This help documentation
- date://locations: Configured locations and their timezones

LOCAL TIMEZONE: {}

ADDING LOCATIONS:
Set {} (or pass --locations) to comma-separated Name=Area/City pairs:
  {}="Vienna=Europe/Vienna,Reykjavik=Atlantic/Reykjavik"

- Names are matched exactly first, then case-insensitively
- A configured name replaces a built-in location with the same name
- Entries without '=' are ignored
- Timezones must be IANA names such as 'Europe/Vienna'"#,
            self.local_timezone_name, LOCATIONS_ENV_VAR, LOCATIONS_ENV_VAR
        )
    }

    fn generate_locations_content(&self) -> String {
        let table = self.date_server().resolver().table();
        if table.is_empty() {
            return format!(
                "Configured Locations (0)\n\nNo locations configured. Set {} to add some.",
                LOCATIONS_ENV_VAR
            );
        }

        let mut entries: Vec<_> = table.entries().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let lines = entries
            .iter()
            .map(|e| format!("- {}: {}", e.name, e.timezone))
            .collect::<Vec<_>>()
            .join("\n");

        format!("Configured Locations ({})\n\n{}", entries.len(), lines)
    }

    fn handle_tool_call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> McpResult<CallToolResult> {
        self.dispatcher
            .dispatch(name, arguments)
            .inspect_err(|e| tracing::debug!("Tool '{}' failed: {}", name, e))
            .map_err(Into::into)
    }

    fn handle_get_prompt(&self, name: &str) -> McpResult<GetPromptResult> {
        Ok(self.prompts.get(name)?)
    }

    fn read_resource_text(&self, uri: &str) -> Result<String, DateServerError> {
        match uri {
            "date://status" => Ok(self.generate_status_content()),
            "date://help" => Ok(self.generate_help_content()),
            "date://locations" => Ok(self.generate_locations_content()),
            _ => Err(DateServerError::ResourceNotFound {
                uri: uri.to_string(),
            }),
        }
    }
}

impl ServerHandler for DateService {
    fn get_info(&self) -> ServerInfo {
        let local_tz = self.get_local_timezone_name();
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(format!(
                "Date MCP Server for date and time queries. Tools: get_day_name, get_iso_date, current_time, current_time_utc, current_time_location, list_available_locations. Local timezone: {}. Extra locations can be configured with {}.",
                local_tz, LOCATIONS_ENV_VAR
            )),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListToolsResult> {
        Ok(ListToolsResult {
            tools: ToolRegistry::list(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<CallToolResult> {
        self.handle_tool_call(&request.name, request.arguments)
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListPromptsResult> {
        Ok(ListPromptsResult {
            prompts: self.prompts.list(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<GetPromptResult> {
        self.handle_get_prompt(&request.name)
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourcesResult> {
        Ok(ListResourcesResult {
            resources: vec![
                self.create_resource_text("date://status", "server-status"),
                self.create_resource_text("date://help", "help-documentation"),
                self.create_resource_text("date://locations", "location-list"),
            ],
            next_cursor: None,
        })
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ReadResourceResult> {
        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(self.read_resource_text(&uri)?, uri)],
        })
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _: RequestContext<RoleServer>,
    ) -> McpResult<ListResourceTemplatesResult> {
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: Vec::new(),
        })
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> McpResult<InitializeResult> {
        tracing::info!("Date MCP Server initialized successfully");
        Ok(self.get_info())
    }
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    use rmcp::{ServiceExt, transport::stdio};

    let service = DateService::new(&config)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })?;

    service.waiting().await?;
    Ok(())
}
