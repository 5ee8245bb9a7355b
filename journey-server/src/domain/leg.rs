//! Priced train leg.
//!
//! A `Leg` is one service's travel between two of its stops, together with
//! the fare computed for it. Legs are built fresh for every search.

use crate::fare::FareBreakdown;

use super::{ClockTime, DomainError, Service, StationId, StopPair};

/// A leg of an itinerary (one train).
///
/// Times are validated at construction so `departure_time()` and
/// `arrival_time()` never fail.
///
/// # Invariants
///
/// - The alighting stop's sequence is after the boarding stop's
/// - Departure time exists at the boarding stop
/// - Arrival time exists at the alighting stop
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    service: Service,
    from: StationId,
    to: StationId,
    departure: ClockTime,
    arrival: ClockTime,
    distance_km: f64,
    fare: FareBreakdown,
}

impl Leg {
    /// Construct a leg from a stop pair and the fare priced for it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the alighting stop does not come after the boarding stop
    /// - the boarding departure or alighting arrival time is missing
    pub fn new(pair: StopPair, fare: FareBreakdown) -> Result<Self, DomainError> {
        if pair.alight.sequence <= pair.board.sequence {
            return Err(DomainError::InvalidLeg(
                "alight stop must come after board stop",
            ));
        }

        let departure = pair
            .departure()
            .ok_or(DomainError::MissingTime("boarding departure"))?;
        let arrival = pair
            .arrival()
            .ok_or(DomainError::MissingTime("alighting arrival"))?;
        let distance_km = pair.distance_km();

        Ok(Leg {
            service: pair.service,
            from: pair.board.station,
            to: pair.alight.station,
            departure,
            arrival,
            distance_km,
            fare,
        })
    }

    /// Returns the service this leg is on.
    pub fn service(&self) -> &Service {
        &self.service
    }

    /// Returns the boarding station.
    pub fn from(&self) -> StationId {
        self.from
    }

    /// Returns the alighting station.
    pub fn to(&self) -> StationId {
        self.to
    }

    /// Returns the departure time (guaranteed present).
    pub fn departure_time(&self) -> ClockTime {
        self.departure
    }

    /// Returns the arrival time (guaranteed present).
    pub fn arrival_time(&self) -> ClockTime {
        self.arrival
    }

    /// Distance travelled on this leg.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// The fare computed for this leg.
    pub fn fare(&self) -> &FareBreakdown {
        &self.fare
    }

    /// Shortcut for the fare total.
    pub fn price(&self) -> i64 {
        self.fare.total
    }
}
