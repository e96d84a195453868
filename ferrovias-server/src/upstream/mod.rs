//! Ferrovias timetable fetcher.
//!
//! This module provides an HTTP client for the Ferrovias "próximos trenes"
//! page, which lists upcoming departures for one Belgrano Norte station.
//!
//! Key characteristics of the upstream:
//! - Requests are form POSTs carrying the station id (`idEst`) and a
//!   constant `adm=1`
//! - Responses are HTML, not a data format; departures are scraped from a
//!   nested table
//! - There is no contract: anything unexpected degrades to an empty board
//!   or a classified error, never a panic

mod client;
mod error;
mod mock;
mod parse;
mod source;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FerroviasClient, UpstreamConfig};
pub use error::{FetchError, FixtureError};
pub use mock::MockTimetable;
pub use parse::{parse_departures, parse_timetable};
#[cfg(test)]
pub(crate) use parse::fixtures;
pub use source::TimetableSource;
