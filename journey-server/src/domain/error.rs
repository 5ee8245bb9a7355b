//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from store and API errors.

use super::{ClockTime, StationId};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Missing required time data for an operation
    #[error("missing required time data: {0}")]
    MissingTime(&'static str),

    /// Invalid leg construction (e.g., alight before board)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Second leg does not start where the first one ends
    #[error("legs do not meet: first ends at station {0}, second starts at station {1}")]
    LegsNotJoined(StationId, StationId),

    /// Second leg leaves before the first one arrives
    #[error("connection missed: arrive {arrival}, depart {departure}")]
    MissedConnection {
        arrival: ClockTime,
        departure: ClockTime,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::MissingTime("boarding departure");
        assert_eq!(err.to_string(), "missing required time data: boarding departure");

        let err = DomainError::InvalidLeg("alight must be after board");
        assert_eq!(err.to_string(), "invalid leg: alight must be after board");

        let err = DomainError::LegsNotJoined(StationId(4), StationId(5));
        assert_eq!(
            err.to_string(),
            "legs do not meet: first ends at station 4, second starts at station 5"
        );

        let err = DomainError::MissedConnection {
            arrival: ClockTime::parse_hhmm("12:00").unwrap(),
            departure: ClockTime::parse_hhmm("11:30").unwrap(),
        };
        assert_eq!(err.to_string(), "connection missed: arrive 12:00, depart 11:30");
    }
}
