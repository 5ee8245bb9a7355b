//! Scheduled train service types.
//!
//! A `Service` is a named, numbered train. Its `Stop`s are held by the
//! schedule store; searches see them paired up as a `StopPair` (board and
//! alight on the same service).

use std::fmt;

use super::{ClockTime, StationId};

/// Stable numeric service identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(pub u32);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled train service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: ServiceId,
    /// Human name, e.g. "Tamil Nadu Express".
    pub name: String,
    /// Public train number, unique across the schedule.
    pub number: String,
    /// Service category, e.g. "Express" or "Rajdhani". Drives the fare rate.
    pub category: String,
    /// Inactive services never appear in search results.
    pub active: bool,
}

/// One service's scheduled visit to one station.
///
/// # Invariants
///
/// Within a service, `sequence` strictly increases along the route and
/// `distance_km` never decreases with it. Sequence, not time of day, is
/// the ordering key: services may run past midnight.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub station: StationId,
    /// 1-based position along the service's route.
    pub sequence: u32,
    /// Distance from the service's origin.
    pub distance_km: f64,
    pub scheduled_arrival: Option<ClockTime>,
    pub scheduled_departure: Option<ClockTime>,
}

impl Stop {
    /// Departure time, falling back to arrival for stops that only list one.
    pub fn effective_departure(&self) -> Option<ClockTime> {
        self.scheduled_departure.or(self.scheduled_arrival)
    }

    /// Arrival time, falling back to departure for stops that only list one.
    pub fn effective_arrival(&self) -> Option<ClockTime> {
        self.scheduled_arrival.or(self.scheduled_departure)
    }
}

/// A boarding stop and an alighting stop on the same service.
///
/// This is the unit the schedule store hands back for route queries; it is
/// turned into a priced `Leg` by the finders.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPair {
    pub service: Service,
    pub board: Stop,
    pub alight: Stop,
}

impl StopPair {
    /// Distance travelled between the two stops.
    pub fn distance_km(&self) -> f64 {
        self.alight.distance_km - self.board.distance_km
    }

    /// Departure from the boarding stop, if scheduled.
    pub fn departure(&self) -> Option<ClockTime> {
        self.board.effective_departure()
    }

    /// Arrival at the alighting stop, if scheduled.
    pub fn arrival(&self) -> Option<ClockTime> {
        self.alight.effective_arrival()
    }

    /// Whether the pair covers some distance and has both times, so it can
    /// become a priced leg.
    pub fn is_travellable(&self) -> bool {
        self.distance_km() > 0.0 && self.departure().is_some() && self.arrival().is_some()
    }
}
