//! Domain types for the arrivals proxy.
//!
//! Station ids as the upstream assigns them, and the departure board shape
//! every fetch is normalized into.

mod departures;
mod station;

pub use departures::{
    DepartureBoard, Departures, Direction, FetchOutcome, NO_DEPARTURES_MESSAGE, is_retiro_bound,
};
pub use station::StationId;
