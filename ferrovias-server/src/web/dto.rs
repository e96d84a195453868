//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Direction;
use crate::stations::StationDirectory;

/// Response for the API root.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub documentation: &'static str,
}

/// Response listing every station.
#[derive(Debug, Serialize)]
pub struct StationsResponse<'a> {
    /// Station name → upstream id
    pub stations: &'a StationDirectory,
}

/// Query parameters for a single station's arrivals.
#[derive(Debug, Deserialize)]
pub struct ArrivalsQuery {
    /// Optional direction filter (`retiro` or `other`)
    pub direction: Option<Direction>,
}

/// Response when a station's page lists no departures.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
