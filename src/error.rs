use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Invalid state code: '{0}'. Please provide a two-letter US state or territory code (e.g. CA, NY).")]
    InvalidStateCode(String),

    #[error("Invalid latitude/longitude: '{latitude}', '{longitude}'. Please provide numeric decimal degrees.")]
    InvalidCoordinates { latitude: String, longitude: String },

    #[error("Latitude must be between -90 and 90, and longitude between -180 and 180.")]
    CoordinatesOutOfRange { latitude: f64, longitude: f64 },
}

/// Upstream failure while fetching JSON from the weather service.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
