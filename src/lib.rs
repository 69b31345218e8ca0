//! Weather alerts and forecasts from the National Weather Service API,
//! rendered as plain text and served as MCP tools.

pub mod constants;
pub mod error;
pub mod formatters;
pub mod http;
pub mod logging;
pub mod models;
pub mod service;
pub mod validation;

pub use error::{FetchError, InputError};
pub use http::{JsonFetcher, ReqwestFetcher};
pub use models::CoordinateInput;
pub use service::Weather;
