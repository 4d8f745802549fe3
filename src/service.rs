use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::aggregator::{ErrorSink, TracingErrorSink, WeatherAggregator};
use crate::client::OpenMeteoClient;
use crate::config::Config;
use crate::error::{self, WeatherError};
use crate::fetcher::WeatherFetcher;
use crate::formatters::{format_location_weather, format_locations, format_weather_report};
use crate::geocoding::GeocodingResolver;
use crate::models::{AddLocationRequest, RemoveLocationRequest};
use crate::registry::LocationRegistry;
use crate::workflow::AddLocationWorkflow;

/// MCP server exposing the tracked-location weather engine as tools
#[derive(Clone)]
pub struct Weather {
    registry: Arc<LocationRegistry>,
    aggregator: Arc<WeatherAggregator>,
    workflow: Arc<AddLocationWorkflow>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a server backed by Open-Meteo and seeded with the default locations
    pub fn new(config: &Config) -> error::Result<Self> {
        let client = Arc::new(OpenMeteoClient::new(config)?);
        Ok(Self::with_components(
            Arc::new(LocationRegistry::with_defaults()),
            client.clone(),
            client,
            Arc::new(TracingErrorSink),
            config,
        ))
    }

    pub fn with_components(
        registry: Arc<LocationRegistry>,
        resolver: Arc<dyn GeocodingResolver>,
        fetcher: Arc<dyn WeatherFetcher>,
        error_sink: Arc<dyn ErrorSink>,
        config: &Config,
    ) -> Self {
        let aggregator = WeatherAggregator::new(
            registry.clone(),
            fetcher.clone(),
            error_sink,
            config.request_timeout,
        );
        let workflow = AddLocationWorkflow::new(resolver, registry.clone(), fetcher);

        Self {
            registry,
            aggregator: Arc::new(aggregator),
            workflow: Arc::new(workflow),
            tool_router: Self::tool_router(),
        }
    }
}

/// Not-found errors are the caller's fault; everything else is ours or upstream's
fn to_mcp_error(error: &WeatherError) -> McpError {
    if error.is_not_found() {
        McpError::invalid_params(error.to_string(), None)
    } else {
        McpError::internal_error(error.to_string(), None)
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-locations".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Tracks a set of locations and reports their current weather using Open-Meteo. \
                Add locations by name, remove them by id, and fetch conditions for all of them at once."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current conditions for every tracked location
    #[tool(description = "Get current weather conditions for all tracked locations. Locations whose weather cannot be fetched right now are left out of the report.")]
    async fn get_all_weather(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather for all tracked locations");

        let entries = self.aggregator.get_all().await;
        let formatted = format_weather_report(&entries);

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Lists the tracked locations
    #[tool(description = "List the tracked locations with their ids.")]
    async fn list_locations(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.registry.snapshot();
        Ok(CallToolResult::success(vec![Content::text(format_locations(
            &snapshot,
        ))]))
    }

    /// Adds a location by name and returns its current weather
    #[tool(description = "Start tracking a location by name (e.g. 'Paris' or 'Springfield, Illinois') and return its current weather. The best geocoding match is used.")]
    async fn add_location(
        &self,
        Parameters(request): Parameters<AddLocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(McpError::invalid_params("Location name is required", None));
        }

        tracing::info!("Adding location: {}", name);

        match self.workflow.add_location(name).await {
            Ok(entry) => Ok(CallToolResult::success(vec![Content::text(
                format_location_weather(&entry),
            )])),
            Err(e) if e.is_not_found() => Err(to_mcp_error(&e)),
            Err(e) => Err(McpError::internal_error(
                format!(
                    "Failed to add location: {}. The location may already be tracked; use list_locations to check.",
                    e
                ),
                None,
            )),
        }
    }

    /// Stops tracking a location
    #[tool(description = "Stop tracking a location, identified by the id shown in list_locations.")]
    async fn remove_location(
        &self,
        Parameters(request): Parameters<RemoveLocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Removing location: {}", request.id);

        let removed = self.registry.remove(request.id).map_err(|e| to_mcp_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Stopped tracking {} ({}).",
            removed.name, removed.id
        ))]))
    }
}
