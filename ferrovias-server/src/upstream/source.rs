//! Timetable source abstraction.

use std::future::Future;

use crate::domain::{FetchOutcome, StationId};

use super::error::FetchError;

/// Something that can produce a station's timetable.
///
/// Implemented by the live [`FerroviasClient`](super::FerroviasClient) and by
/// [`MockTimetable`](super::MockTimetable). The returned future must be
/// `Send` so fetches can run inside axum handlers and be joined concurrently.
pub trait TimetableSource: Send + Sync {
    /// Fetch the timetable for one station.
    fn fetch(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<FetchOutcome, FetchError>> + Send;
}
