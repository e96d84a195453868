//! Application state for the web layer.

use std::sync::Arc;

use crate::stations::StationDirectory;

/// Shared application state.
///
/// Generic over the timetable source so the router can run against the live
/// upstream or saved pages.
pub struct AppState<S> {
    /// Station name → id lookup
    pub directory: Arc<StationDirectory>,

    /// Where timetables come from
    pub source: Arc<S>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, source: S) -> Self {
        Self {
            directory: Arc::new(directory),
            source: Arc::new(source),
        }
    }
}

// Manual impl: cloning shares the Arcs and must not require `S: Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            source: Arc::clone(&self.source),
        }
    }
}
