use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::de::DeserializeOwned;

use crate::constants::NWS_API_BASE;
use crate::error::FetchError;
use crate::formatters::{format_alerts, format_forecast};
use crate::http::{JsonFetcher, ReqwestFetcher};
use crate::models::{
    AlertResponse, CoordinateInput, ForecastResponse, GetAlertsRequest, GetForecastRequest,
    PointsResponse,
};
use crate::validation::{Coordinates, StateCode};

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    fetcher: Arc<dyn JsonFetcher>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a Weather service talking to api.weather.gov
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_fetcher(Arc::new(ReqwestFetcher::new()?)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            fetcher,
            tool_router: Self::tool_router(),
        }
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let value = self.fetcher.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Active alerts for a US state, formatted as text
    pub async fn alerts(&self, state: &str) -> String {
        let state = match StateCode::parse(state) {
            Ok(state) => state,
            Err(e) => return e.to_string(),
        };

        tracing::info!("Getting alerts for state: {}", state);

        let url = format!("{}/alerts/active/area/{}", NWS_API_BASE, state);

        match self.make_request::<AlertResponse>(&url).await {
            Ok(alerts) => format_alerts(&alerts.features),
            Err(e) => {
                tracing::warn!(%state, "Failed to fetch alerts: {}", e);
                "Unable to fetch alerts for this state.".to_string()
            }
        }
    }

    /// Short-term forecast for a coordinate pair, formatted as text
    ///
    /// Resolves the forecast URL through the points endpoint first, so two
    /// requests are made in sequence.
    pub async fn forecast(
        &self,
        latitude: impl Into<CoordinateInput>,
        longitude: impl Into<CoordinateInput>,
    ) -> String {
        let coords = match Coordinates::parse(&latitude.into(), &longitude.into()) {
            Ok(coords) => coords,
            Err(e) => return e.to_string(),
        };

        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            coords.latitude,
            coords.longitude
        );

        let points_url = format!("{}/points/{}", NWS_API_BASE, coords.points_path());

        let points = match self.make_request::<PointsResponse>(&points_url).await {
            Ok(points) => points,
            Err(e) => {
                tracing::warn!("Failed to fetch grid points: {}", e);
                return "Unable to fetch forecast data for this location.".to_string();
            }
        };

        match self
            .make_request::<ForecastResponse>(&points.properties.forecast)
            .await
        {
            Ok(forecast) => format_forecast(&forecast.properties.periods),
            Err(e) => {
                tracing::warn!(url = %points.properties.forecast, "Failed to fetch forecast: {}", e);
                "Unable to fetch detailed forecast.".to_string()
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather alerts and short-term forecasts for US locations from the \
                National Weather Service API."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.alerts(&request.state).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Gets the short-term forecast for a US location
    #[tool(description = "Get the weather forecast for a US location. Provide latitude and longitude in decimal degrees (e.g., latitude: 37.7749, longitude: -122.4194 for San Francisco).")]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = self.forecast(request.latitude, request.longitude).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
