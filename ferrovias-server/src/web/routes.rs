//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::aggregate::fetch_all;
use crate::domain::{Departures, FetchOutcome, NO_DEPARTURES_MESSAGE};
use crate::upstream::{FetchError, TimetableSource};

use super::dto::*;
use super::state::AppState;

/// Browser origins allowed to call the API from local development pages.
/// `null` is the origin browsers send for pages opened from local files.
const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:8080",
    "http://127.0.0.1",
    "http://127.0.0.1:8080",
    "null",
];

/// Create the application router.
pub fn create_router<S: TimetableSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/stations", get(list_stations::<S>))
        .route("/stations/all/status", get(all_station_arrivals::<S>))
        .route("/stations/:station_name", get(station_arrivals::<S>))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the local-development allow-list.
///
/// Credentials are allowed, so methods and headers are mirrored from the
/// preflight rather than answered with a literal `*`.
fn cors_layer() -> CorsLayer {
    let origins = ALLOWED_ORIGINS
        .iter()
        .map(|&origin| HeaderValue::from_static(origin));

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// API root.
async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Ferrovias Train API",
        documentation: "/docs",
    })
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station and its upstream id.
async fn list_stations<S: TimetableSource + 'static>(
    State(state): State<AppState<S>>,
) -> Response {
    Json(StationsResponse {
        stations: &state.directory,
    })
    .into_response()
}

/// Departures for one station, optionally filtered by direction.
async fn station_arrivals<S: TimetableSource + 'static>(
    State(state): State<AppState<S>>,
    Path(station_name): Path<String>,
    Query(query): Query<ArrivalsQuery>,
) -> Result<Response, AppError> {
    let station = state
        .directory
        .lookup(&station_name)
        .ok_or_else(|| AppError::NotFound {
            message: "Station not found".to_string(),
        })?;

    debug!(station = %station_name, id = %station, direction = ?query.direction, "Fetching arrivals");

    match state.source.fetch(station).await? {
        FetchOutcome::Empty => match query.direction {
            None => Ok(Json(MessageResponse {
                message: NO_DEPARTURES_MESSAGE,
            })
            .into_response()),
            Some(_) => Ok(Json(Departures::new()).into_response()),
        },
        FetchOutcome::Board(board) => Ok(Json(board.filtered(query.direction)).into_response()),
    }
}

/// Departures for every station, fetched concurrently.
///
/// Stations whose fetch failed are left out without any error signal.
async fn all_station_arrivals<S: TimetableSource + 'static>(
    State(state): State<AppState<S>>,
) -> Response {
    let all = fetch_all(state.source.as_ref(), state.directory.list_all()).await;
    Json(all).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    UpstreamFailure { message: String },
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::UpstreamFailure {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::UpstreamFailure { message } => {
                warn!(error = %message, "Upstream fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
