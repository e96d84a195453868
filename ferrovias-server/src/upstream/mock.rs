//! Mock timetable source for running without the upstream.
//!
//! Loads saved timetable pages from HTML files and serves them as if they
//! were live responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{FetchOutcome, StationId};

use super::error::{FetchError, FixtureError};
use super::parse::parse_timetable;
use super::source::TimetableSource;

/// Timetable source that serves saved pages keyed by station id.
#[derive(Debug, Clone)]
pub struct MockTimetable {
    pages: Arc<HashMap<StationId, String>>,
}

impl MockTimetable {
    /// Load pages from a directory.
    ///
    /// Expects files named `{id}.html` (e.g., `75.html`, `126.html`). Other
    /// files are ignored.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let dir = dir.as_ref();

        let mut pages = HashMap::new();
        for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
            let path = entry.map_err(io_err(dir))?.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("html") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let id: u32 = stem
                .parse()
                .map_err(|_| FixtureError::InvalidName(path.display().to_string()))?;

            let html = std::fs::read_to_string(&path).map_err(io_err(&path))?;
            pages.insert(StationId::new(id), html);
        }

        if pages.is_empty() {
            return Err(FixtureError::NoFixtures(dir.to_path_buf()));
        }

        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    /// Build a source from in-memory pages.
    pub fn from_pages(pages: impl IntoIterator<Item = (StationId, String)>) -> Self {
        Self {
            pages: Arc::new(pages.into_iter().collect()),
        }
    }

    /// Station ids that have a saved page.
    pub fn available_stations(&self) -> Vec<StationId> {
        let mut ids: Vec<_> = self.pages.keys().copied().collect();
        ids.sort_by_key(|id| id.get());
        ids
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> FixtureError {
    let path = path.to_path_buf();
    move |source| FixtureError::Io { path, source }
}

impl TimetableSource for MockTimetable {
    /// Stations without a saved page fail like an unreachable upstream.
    async fn fetch(&self, station: StationId) -> Result<FetchOutcome, FetchError> {
        let html = self
            .pages
            .get(&station)
            .ok_or_else(|| FetchError::Network(format!("no saved page for station {station}")))?;
        parse_timetable(html)
    }
}
