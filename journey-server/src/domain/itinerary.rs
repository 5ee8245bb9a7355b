//! Itinerary types.
//!
//! An `Itinerary` is one complete journey offer: a single direct leg, or
//! two legs joined at a transfer station.

use super::{ClockTime, DomainError, Leg, StationId};

/// Two legs joined at a transfer station.
///
/// # Invariants
///
/// - The second leg boards where the first leg alights
/// - The second leg departs no earlier than the first leg arrives
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    first: Leg,
    second: Leg,
}

impl Connection {
    /// Join two legs, validating that they meet in place and time.
    ///
    /// A departure at exactly the arrival time is accepted.
    pub fn new(first: Leg, second: Leg) -> Result<Self, DomainError> {
        if first.to() != second.from() {
            return Err(DomainError::LegsNotJoined(first.to(), second.from()));
        }

        if second.departure_time() < first.arrival_time() {
            return Err(DomainError::MissedConnection {
                arrival: first.arrival_time(),
                departure: second.departure_time(),
            });
        }

        Ok(Self { first, second })
    }

    pub fn first(&self) -> &Leg {
        &self.first
    }

    pub fn second(&self) -> &Leg {
        &self.second
    }

    /// The station where the traveler changes trains.
    pub fn transfer_station(&self) -> StationId {
        self.first.to()
    }
}

/// A searchable journey offer.
#[derive(Debug, Clone, PartialEq)]
pub enum Itinerary {
    /// One service from source to destination
    Direct(Leg),
    /// Two services via a transfer station
    Connecting(Connection),
}

impl Itinerary {
    /// Returns the legs in travel order.
    pub fn legs(&self) -> Vec<&Leg> {
        match self {
            Itinerary::Direct(leg) => vec![leg],
            Itinerary::Connecting(conn) => vec![&conn.first, &conn.second],
        }
    }

    /// Returns true for single-leg itineraries.
    pub fn is_direct(&self) -> bool {
        matches!(self, Itinerary::Direct(_))
    }

    /// The transfer station, for connecting itineraries.
    pub fn transfer_station(&self) -> Option<StationId> {
        match self {
            Itinerary::Direct(_) => None,
            Itinerary::Connecting(conn) => Some(conn.transfer_station()),
        }
    }

    /// Sum of the leg fare totals.
    pub fn total_price(&self) -> i64 {
        self.legs().iter().map(|leg| leg.price()).sum()
    }

    /// Sum of the leg distances.
    pub fn total_distance_km(&self) -> f64 {
        self.legs().iter().map(|leg| leg.distance_km()).sum()
    }

    /// Departure from the source station.
    pub fn departure_time(&self) -> ClockTime {
        match self {
            Itinerary::Direct(leg) => leg.departure_time(),
            Itinerary::Connecting(conn) => conn.first.departure_time(),
        }
    }

    /// Arrival at the destination station.
    pub fn arrival_time(&self) -> ClockTime {
        match self {
            Itinerary::Direct(leg) => leg.arrival_time(),
            Itinerary::Connecting(conn) => conn.second.arrival_time(),
        }
    }
}
