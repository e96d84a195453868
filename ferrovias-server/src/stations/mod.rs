//! Station directory.
//!
//! Provides the static station name → upstream id mapping, loaded once at
//! process start and immutable afterwards.

mod directory;
mod error;

pub use directory::{Station, StationDirectory};
pub use error::DirectoryError;
