//! Fan-out across every station.
//!
//! One fetch per station is started at once and all of them are awaited
//! before merging. A failed leg never cancels its siblings, and failed
//! stations are left out of the result.

use futures::future::join_all;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, warn};

use crate::domain::Departures;
use crate::stations::Station;
use crate::upstream::TimetableSource;

/// Unfiltered departures per station, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDepartures {
    entries: Vec<(String, Departures)>,
}

impl StationDepartures {
    /// Departures for a station, if its fetch did not fail.
    pub fn get(&self, station: &str) -> Option<&Departures> {
        self.entries
            .iter()
            .find(|(name, _)| name == station)
            .map(|(_, deps)| deps)
    }

    /// Station names present, in directory order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of stations present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no station is present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for StationDepartures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, deps) in &self.entries {
            map.serialize_entry(name, deps)?;
        }
        map.end()
    }
}

/// Fetch every station concurrently and merge the ones that did not fail.
///
/// Stations whose page had no departures are kept with an empty mapping.
pub async fn fetch_all<S: TimetableSource>(source: &S, stations: &[Station]) -> StationDepartures {
    let results = join_all(stations.iter().map(|station| source.fetch(station.id))).await;

    let mut entries = Vec::with_capacity(stations.len());
    for (station, result) in stations.iter().zip(results) {
        match result {
            Ok(outcome) => entries.push((station.name.clone(), outcome.into_all_departures())),
            Err(e) => warn!(
                station = %station.name,
                id = %station.id,
                error = %e,
                "Dropping station from aggregate"
            ),
        }
    }

    debug!(
        requested = stations.len(),
        merged = entries.len(),
        "Aggregate fetch complete"
    );
    StationDepartures { entries }
}
