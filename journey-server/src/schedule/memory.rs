//! In-memory schedule store.
//!
//! Holds a validated copy of the schedule and answers route queries by
//! scanning stop lists. Networks of a few thousand services fit easily.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use tracing::info;

use crate::domain::{ClockTime, Service, ServiceId, Station, StationId, Stop, StopPair};

use super::ScheduleStore;
use super::error::{ScheduleError, StoreError};
use super::file::ScheduleFile;

/// A service with its stops, ordered by sequence.
#[derive(Debug, Clone)]
struct ScheduledService {
    service: Service,
    stops: Vec<Stop>,
}

impl ScheduledService {
    /// First stop at `from` followed later by a stop at `to`.
    fn pair(&self, from: StationId, to: StationId) -> Option<StopPair> {
        let (board_idx, board) = self
            .stops
            .iter()
            .enumerate()
            .find(|(_, stop)| stop.station == from)?;
        let alight = self.stops[board_idx + 1..]
            .iter()
            .find(|stop| stop.station == to)?;

        Some(StopPair {
            service: self.service.clone(),
            board: board.clone(),
            alight: alight.clone(),
        })
    }

    fn visits(&self, station: StationId) -> bool {
        self.stops.iter().any(|stop| stop.station == station)
    }
}

/// Read-only schedule held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySchedule {
    stations: BTreeMap<StationId, Station>,
    /// Active services only, ordered by id.
    services: Vec<ScheduledService>,
}

impl InMemorySchedule {
    /// Build a schedule, validating every service's stop list.
    ///
    /// # Errors
    ///
    /// Fails if station or service ids repeat, a service number repeats, a
    /// service has fewer than two stops, a stop references an unknown
    /// station, sequences do not strictly increase, or distances are
    /// negative or decrease along the route.
    pub fn new(
        stations: Vec<Station>,
        services: Vec<(Service, Vec<Stop>)>,
    ) -> Result<Self, ScheduleError> {
        let mut station_map = BTreeMap::new();
        for station in stations {
            let id = station.id;
            if station_map.insert(id, station).is_some() {
                return Err(ScheduleError::DuplicateStation(id));
            }
        }

        let mut seen_ids = HashSet::new();
        let mut seen_numbers = HashSet::new();
        let mut scheduled = Vec::with_capacity(services.len());

        for (service, mut stops) in services {
            if !seen_ids.insert(service.id) {
                return Err(ScheduleError::DuplicateService(service.id));
            }
            if !seen_numbers.insert(service.number.clone()) {
                return Err(ScheduleError::DuplicateServiceNumber(service.number));
            }

            validate_stops(service.id, &mut stops, &station_map)?;

            if service.active {
                scheduled.push(ScheduledService { service, stops });
            }
        }

        scheduled.sort_by_key(|s| s.service.id);

        Ok(Self {
            stations: station_map,
            services: scheduled,
        })
    }

    /// Build a schedule from a parsed schedule file.
    pub fn from_file(file: ScheduleFile) -> Result<Self, ScheduleError> {
        let stations = file
            .stations
            .into_iter()
            .map(|s| s.into_station())
            .collect::<Result<Vec<_>, _>>()?;
        let services = file
            .services
            .into_iter()
            .map(|s| s.into_service())
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(stations, services)
    }

    /// Load and validate a schedule file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let schedule = Self::from_file(ScheduleFile::read(path)?)?;
        info!(
            path = %path.display(),
            stations = schedule.stations.len(),
            services = schedule.services.len(),
            "Loaded schedule"
        );
        Ok(schedule)
    }

    /// Number of active services.
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    fn is_active_station(&self, id: StationId) -> bool {
        self.stations.get(&id).is_some_and(|s| s.active)
    }

    fn active_stops<'a>(&'a self, service: &'a ScheduledService) -> impl Iterator<Item = StationId> + 'a {
        service
            .stops
            .iter()
            .map(|stop| stop.station)
            .filter(|id| self.is_active_station(*id))
    }

    /// Stations served by any active service that also serves `anchor`.
    fn stations_sharing_a_service_with(&self, anchor: StationId) -> BTreeSet<StationId> {
        self.services
            .iter()
            .filter(|s| s.visits(anchor))
            .flat_map(|s| self.active_stops(s))
            .collect()
    }

    /// Board/alight pairs between two active stations, one per service.
    fn pairs(&self, from: StationId, to: StationId) -> Vec<StopPair> {
        if !self.is_active_station(from) || !self.is_active_station(to) {
            return Vec::new();
        }
        self.services
            .iter()
            .filter_map(|s| s.pair(from, to))
            .collect()
    }
}

fn validate_stops(
    service: ServiceId,
    stops: &mut [Stop],
    stations: &BTreeMap<StationId, Station>,
) -> Result<(), ScheduleError> {
    if stops.len() < 2 {
        return Err(ScheduleError::TooFewStops(service));
    }

    stops.sort_by_key(|stop| stop.sequence);

    let mut previous: Option<&Stop> = None;
    for stop in stops.iter() {
        if !stations.contains_key(&stop.station) {
            return Err(ScheduleError::UnknownStation {
                service,
                station: stop.station,
            });
        }

        if !stop.distance_km.is_finite() || stop.distance_km < 0.0 {
            return Err(ScheduleError::InvalidDistance {
                service,
                sequence: stop.sequence,
            });
        }

        if let Some(prev) = previous {
            if stop.sequence == prev.sequence {
                return Err(ScheduleError::SequenceNotIncreasing {
                    service,
                    sequence: stop.sequence,
                });
            }
            if stop.distance_km < prev.distance_km {
                return Err(ScheduleError::InvalidDistance {
                    service,
                    sequence: stop.sequence,
                });
            }
        }
        previous = Some(stop);
    }

    Ok(())
}

impl ScheduleStore for InMemorySchedule {
    async fn list_active_stations(&self) -> Result<Vec<Station>, StoreError> {
        let mut stations: Vec<Station> = self
            .stations
            .values()
            .filter(|s| s.active)
            .cloned()
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stations)
    }

    async fn direct_route_pairs(
        &self,
        from: StationId,
        to: StationId,
    ) -> Result<Vec<StopPair>, StoreError> {
        Ok(self.pairs(from, to))
    }

    async fn transfer_candidates(
        &self,
        source: StationId,
        destination: StationId,
        limit: usize,
    ) -> Result<Vec<Station>, StoreError> {
        let from_source = self.stations_sharing_a_service_with(source);
        let to_destination = self.stations_sharing_a_service_with(destination);

        // BTreeSet iteration gives ascending station id
        Ok(from_source
            .intersection(&to_destination)
            .filter(|id| **id != source && **id != destination)
            .filter_map(|id| self.stations.get(id))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn earliest_leg(
        &self,
        from: StationId,
        to: StationId,
        not_before: Option<ClockTime>,
    ) -> Result<Option<StopPair>, StoreError> {
        Ok(self
            .pairs(from, to)
            .into_iter()
            .filter(StopPair::is_travellable)
            .filter_map(|pair| pair.departure().map(|dep| (dep, pair)))
            .filter(|(dep, _)| not_before.is_none_or(|t| *dep >= t))
            .min_by_key(|(dep, pair)| (*dep, pair.service.id))
            .map(|(_, pair)| pair))
    }
}
