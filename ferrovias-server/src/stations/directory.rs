//! Station name lookup.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::StationId;

use super::error::DirectoryError;

/// Belgrano Norte stations in line order, Retiro to Villa Rosa.
const BELGRANO_NORTE: &[(&str, u32)] = &[
    ("Retiro", 75),
    ("Saldias", 78),
    ("Ciudad Universitaria", 80),
    ("A. del Valle", 82),
    ("Padilla", 84),
    ("Florida", 86),
    ("Munro", 88),
    ("Carapachay", 130),
    ("Villa Adelina", 90),
    ("Boulogne Sur Mer", 95),
    ("A. Montes", 97),
    ("Don Torcuato", 100),
    ("A. Sordeaux", 103),
    ("Villa de Mayo", 105),
    ("Los Polvorines", 108),
    ("Pablo Nogues", 111),
    ("Grand Bourg", 113),
    ("Tierras Altas", 116),
    ("Tortuguitas", 118),
    ("M. Alberti", 120),
    ("Del Viso", 123),
    ("Cecilia Grierson", 135),
    ("Villa Rosa", 126),
];

/// A named station and its upstream id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub name: String,
    pub id: StationId,
}

/// Read-only station name → id lookup.
///
/// Built once at startup and shared by handle. The table is treated as
/// ground truth and is never checked against the upstream.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    stations: Vec<Station>,
}

impl StationDirectory {
    /// The hand-curated Belgrano Norte line.
    pub fn belgrano_norte() -> Self {
        Self {
            stations: BELGRANO_NORTE
                .iter()
                .map(|&(name, id)| Station {
                    name: name.to_string(),
                    id: StationId::new(id),
                })
                .collect(),
        }
    }

    /// Build a directory from `(name, id)` pairs, keeping their order.
    ///
    /// Fails if a name appears twice.
    pub fn from_entries<N: Into<String>>(
        entries: impl IntoIterator<Item = (N, u32)>,
    ) -> Result<Self, DirectoryError> {
        let mut stations: Vec<Station> = Vec::new();
        for (name, id) in entries {
            let name = name.into();
            if stations.iter().any(|s| s.name == name) {
                return Err(DirectoryError::DuplicateName(name));
            }
            stations.push(Station {
                name,
                id: StationId::new(id),
            });
        }
        Ok(Self { stations })
    }

    /// Look up a station id by exact name.
    pub fn lookup(&self, name: &str) -> Option<StationId> {
        self.stations.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// All stations in declared order.
    pub fn list_all(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory has no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Serializes as a `{name: id}` object in declared order.
impl Serialize for StationDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.stations.len()))?;
        for station in &self.stations {
            map.serialize_entry(&station.name, &station.id)?;
        }
        map.end()
    }
}
