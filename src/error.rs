//! Error types
//!
//! `ApiError` carries transport detail for logs. `LookupError` is the only
//! thing the user ever sees, and it is small enough to ride inside actions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Failure talking to one of the Open-Meteo endpoints
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("no location matches {0:?}")]
    NotFound(String),
}

/// User-visible lookup failure
#[derive(
    thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
pub enum LookupError {
    #[error("Location not found")]
    LocationNotFound,

    #[error("Failed to fetch weather data")]
    NetworkError,
}

impl From<ApiError> for LookupError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::NotFound(_) => LookupError::LocationNotFound,
            ApiError::Request(_) | ApiError::Status(_) => LookupError::NetworkError,
        }
    }
}
