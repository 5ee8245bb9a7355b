//! Schedule store error types.

use std::path::PathBuf;

use crate::domain::{InvalidStationCode, ServiceId, StationId, TimeError};

/// Errors from schedule store queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached (connection refused, timeout, etc.)
    #[error("schedule store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the data was unusable
    #[error("schedule data error: {0}")]
    Data(String),
}

impl StoreError {
    /// Whether retrying the same query might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }
}

/// Errors loading or validating a schedule.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// Schedule file could not be read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Schedule file is not valid JSON for the schedule format
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    #[error("station {station}: {source}")]
    InvalidStationCode {
        station: StationId,
        source: InvalidStationCode,
    },

    #[error("duplicate service id {0}")]
    DuplicateService(ServiceId),

    #[error("service number {0} is used more than once")]
    DuplicateServiceNumber(String),

    #[error("service {0} must have at least 2 stops")]
    TooFewStops(ServiceId),

    #[error("service {service} stops at unknown station {station}")]
    UnknownStation {
        service: ServiceId,
        station: StationId,
    },

    #[error("service {service}: stop sequence must strictly increase (at sequence {sequence})")]
    SequenceNotIncreasing { service: ServiceId, sequence: u32 },

    #[error("service {service}: distance must be non-negative and never decrease (at sequence {sequence})")]
    InvalidDistance { service: ServiceId, sequence: u32 },

    #[error("service {service} sequence {sequence}: {source}")]
    InvalidTime {
        service: ServiceId,
        sequence: u32,
        source: TimeError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors() {
        assert!(StoreError::Unavailable("connection refused".into()).is_transient());
        assert!(!StoreError::Data("bad row".into()).is_transient());
    }

    #[test]
    fn error_display() {
        let err = StoreError::Unavailable("connection refused".into());
        assert_eq!(err.to_string(), "schedule store unavailable: connection refused");

        let err = ScheduleError::UnknownStation {
            service: ServiceId(3),
            station: StationId(99),
        };
        assert_eq!(err.to_string(), "service 3 stops at unknown station 99");

        let err = ScheduleError::SequenceNotIncreasing {
            service: ServiceId(3),
            sequence: 2,
        };
        assert_eq!(
            err.to_string(),
            "service 3: stop sequence must strictly increase (at sequence 2)"
        );
    }
}
