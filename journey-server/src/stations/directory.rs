//! Station lookup by id, code and name.

use std::collections::HashMap;

use crate::domain::{Station, StationCode, StationId};

/// Immutable station lookup built once at startup.
///
/// Used to put names on search results and to let callers name stations
/// by code as well as by id.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    by_id: HashMap<StationId, Station>,
    by_code: HashMap<StationCode, StationId>,
    /// Ids ordered by station name.
    ordered: Vec<StationId>,
}

impl StationDirectory {
    pub fn new(stations: Vec<Station>) -> Self {
        let mut ordered: Vec<&Station> = stations.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        let ordered = ordered.into_iter().map(|s| s.id).collect();

        let by_code = stations.iter().map(|s| (s.code, s.id)).collect();
        let by_id = stations.into_iter().map(|s| (s.id, s)).collect();

        Self {
            by_id,
            by_code,
            ordered,
        }
    }

    /// Look up a station by id.
    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id)
    }

    /// Station name for display, falling back to the id.
    pub fn name(&self, id: StationId) -> String {
        self.get(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Station {id}"))
    }

    /// Resolve a caller-supplied station reference: a numeric id or a
    /// station code in any case.
    pub fn resolve(&self, reference: &str) -> Option<StationId> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<u32>() {
            return self.by_id.contains_key(&StationId(id)).then_some(StationId(id));
        }
        let code = StationCode::parse_normalized(reference).ok()?;
        self.by_code.get(&code).copied()
    }

    /// Stations whose name contains `query` or whose code starts with it,
    /// ignoring case. An empty query matches everything. Ordered by name.
    pub fn search(&self, query: &str) -> Vec<&Station> {
        let query = query.trim().to_lowercase();
        self.ordered
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .filter(|s| {
                query.is_empty()
                    || s.name.to_lowercase().contains(&query)
                    || s.code.as_str().to_lowercase().starts_with(&query)
            })
            .collect()
    }

    /// All stations, ordered by name.
    pub fn all(&self) -> Vec<&Station> {
        self.search("")
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
