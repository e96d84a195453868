//! Station directory error types.

/// Errors that can occur when building a station directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// The same name was given for two stations
    #[error("duplicate station name: {0}")]
    DuplicateName(String),
}
