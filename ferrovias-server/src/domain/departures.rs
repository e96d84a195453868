//! Departure board types.
//!
//! A departure board is built fresh from each upstream fetch and never
//! outlives the request that produced it.

use serde::Deserialize;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Terminus that defines the Retiro-bound direction.
const RETIRO: &str = "RETIRO";

/// Message returned when the upstream page yields no departures.
pub const NO_DEPARTURES_MESSAGE: &str = "No departure times found.";

/// Ordered mapping from destination to departure times.
///
/// Destinations keep the order in which they were first seen and times keep
/// row order. Duplicate times are preserved. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Departures {
    entries: Vec<(String, Vec<String>)>,
}

impl Departures {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a time to a destination, creating the destination if needed.
    pub fn push(&mut self, destination: impl Into<String>, time: impl Into<String>) {
        let destination = destination.into();
        let time = time.into();
        match self.entries.iter_mut().find(|(d, _)| *d == destination) {
            Some((_, times)) => times.push(time),
            None => self.entries.push((destination, vec![time])),
        }
    }

    /// Times for a destination, if present.
    pub fn get(&self, destination: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(d, _)| d == destination)
            .map(|(_, times)| times.as_slice())
    }

    /// Whether the destination is present.
    pub fn contains(&self, destination: &str) -> bool {
        self.get(destination).is_some()
    }

    /// Iterate destinations in first-seen order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(d, _)| d.as_str())
    }

    /// Iterate `(destination, times)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(d, times)| (d.as_str(), times.as_slice()))
    }

    /// Number of distinct destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no destinations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Departures {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (destination, times) in &self.entries {
            map.serialize_entry(destination, times)?;
        }
        map.end()
    }
}

/// Whether a destination is on the Retiro-bound side of the line.
///
/// Case-insensitive substring match, so "Retiro Express" counts.
pub fn is_retiro_bound(destination: &str) -> bool {
    destination.to_uppercase().contains(RETIRO)
}

/// Departures at one station, split by direction.
///
/// Every destination in `all_departures` appears in exactly one of
/// `to_retiro` and `to_other_branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureBoard {
    all_departures: Departures,
    to_retiro: Departures,
    to_other_branch: Departures,
}

impl DepartureBoard {
    /// Build a board by partitioning departures on direction.
    pub fn from_departures(all_departures: Departures) -> Self {
        let (to_retiro, to_other_branch): (Vec<_>, Vec<_>) = all_departures
            .entries
            .iter()
            .cloned()
            .partition(|(destination, _)| is_retiro_bound(destination));

        Self {
            all_departures,
            to_retiro: Departures { entries: to_retiro },
            to_other_branch: Departures {
                entries: to_other_branch,
            },
        }
    }

    /// Every destination seen at the station.
    pub fn all_departures(&self) -> &Departures {
        &self.all_departures
    }

    /// Destinations towards Retiro.
    pub fn to_retiro(&self) -> &Departures {
        &self.to_retiro
    }

    /// Destinations towards the other end of the line.
    pub fn to_other_branch(&self) -> &Departures {
        &self.to_other_branch
    }

    /// Departures matching an optional direction filter.
    pub fn filtered(&self, direction: Option<Direction>) -> &Departures {
        match direction {
            Some(Direction::Retiro) => &self.to_retiro,
            Some(Direction::Other) => &self.to_other_branch,
            None => &self.all_departures,
        }
    }

    /// Consume the board, keeping only the unfiltered departures.
    pub fn into_all_departures(self) -> Departures {
        self.all_departures
    }
}

/// Direction filter requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Only Retiro-bound destinations.
    Retiro,
    /// Only non-Retiro destinations.
    #[serde(alias = "villarosa")]
    Other,
}

/// Successful result of fetching a station's timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one departure was found.
    Board(DepartureBoard),
    /// The page parsed but contained no departures.
    Empty,
}

impl FetchOutcome {
    /// Build an outcome from accumulated departures.
    pub fn from_departures(departures: Departures) -> Self {
        if departures.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Board(DepartureBoard::from_departures(departures))
        }
    }

    /// Unfiltered departures; empty when nothing was found.
    pub fn into_all_departures(self) -> Departures {
        match self {
            FetchOutcome::Board(board) => board.into_all_departures(),
            FetchOutcome::Empty => Departures::new(),
        }
    }
}
