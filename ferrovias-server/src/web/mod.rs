//! Web layer for the arrivals proxy.
//!
//! Provides the HTTP endpoints for listing stations and reading their
//! departures.

mod dto;
mod routes;
mod state;

#[cfg(test)]
mod routes_tests;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
