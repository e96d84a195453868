//! Station identifier type.

use std::fmt;

use serde::Serialize;

/// Upstream-assigned numeric station identifier.
///
/// Ids are opaque: they carry no ordering or contiguity guarantee, and the
/// only thing that may be done with one is sending it back upstream as the
/// `idEst` form field.
///
/// # Examples
///
/// ```
/// use ferrovias_server::domain::StationId;
///
/// let retiro = StationId::new(75);
/// assert_eq!(retiro.get(), 75);
/// assert_eq!(retiro.to_string(), "75");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(u32);

impl StationId {
    /// Wrap a raw upstream id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw upstream id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
