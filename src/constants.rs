use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("nws-weather-mcp/", env!("CARGO_PKG_VERSION"));

/// Accept header sent with every NWS request
pub const ACCEPT: &str = "application/geo+json";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of forecast periods rendered
pub const FORECAST_PERIOD_LIMIT: usize = 5;

/// Separator between alert and forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

/// States, DC and inhabited territories accepted by the alerts lookup
pub const US_STATE_CODES: [&str; 57] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC", "AS", "GU", "MP", "PR", "VI", "UM",
];
