//! Upstream fetch error types.

use std::path::PathBuf;

/// Errors from fetching a station's timetable.
///
/// The display text is passed through verbatim to API clients, so the
/// prefixes are part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure, timeout, or non-success status
    #[error("Network error: {0}")]
    Network(String),

    /// The response could not be parsed
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

/// Errors from loading timetable fixtures for the mock source.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// Reading the fixture directory or a file failed
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file name is not a numeric station id
    #[error("invalid station id in fixture file name: {0}")]
    InvalidName(String),

    /// The directory held no fixtures at all
    #[error("no fixture files found in {0:?}")]
    NoFixtures(PathBuf),
}
