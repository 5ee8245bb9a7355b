//! Schedule file format.
//!
//! The schedule is a JSON document listing stations and services with
//! their stops. These types mirror the file exactly; conversion to domain
//! types (and all validation) happens in `InMemorySchedule::new`.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{ClockTime, Service, ServiceId, Station, StationCode, StationId, Stop};

use super::error::ScheduleError;

/// Top-level schedule document.
#[derive(Debug, Deserialize)]
pub struct ScheduleFile {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StationRecord {
    pub id: u32,
    pub name: String,
    pub code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ServiceRecord {
    pub id: u32,
    pub name: String,
    pub number: String,
    pub category: String,
    #[serde(default = "default_active")]
    pub active: bool,
    pub stops: Vec<StopRecord>,
}

#[derive(Debug, Deserialize)]
pub struct StopRecord {
    pub station: u32,
    /// Defaults to the stop's 1-based position in the list.
    pub sequence: Option<u32>,
    #[serde(default)]
    pub distance_km: f64,
    /// "HH:MM"
    pub arrival: Option<String>,
    /// "HH:MM"
    pub departure: Option<String>,
}

fn default_active() -> bool {
    true
}

impl ScheduleFile {
    /// Parse a schedule document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a schedule file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ScheduleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScheduleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl StationRecord {
    pub(super) fn into_station(self) -> Result<Station, ScheduleError> {
        let id = StationId(self.id);
        let code = StationCode::parse_normalized(&self.code)
            .map_err(|source| ScheduleError::InvalidStationCode { station: id, source })?;

        Ok(Station {
            id,
            name: self.name,
            code,
            active: self.active,
        })
    }
}

impl ServiceRecord {
    pub(super) fn into_service(self) -> Result<(Service, Vec<Stop>), ScheduleError> {
        let id = ServiceId(self.id);

        let stops = self
            .stops
            .into_iter()
            .enumerate()
            .map(|(idx, record)| record.into_stop(id, idx as u32 + 1))
            .collect::<Result<Vec<_>, _>>()?;

        let service = Service {
            id,
            name: self.name,
            number: self.number,
            category: self.category,
            active: self.active,
        };

        Ok((service, stops))
    }
}

impl StopRecord {
    fn into_stop(self, service: ServiceId, position: u32) -> Result<Stop, ScheduleError> {
        let sequence = self.sequence.unwrap_or(position);
        let parse = |s: Option<String>| -> Result<Option<ClockTime>, ScheduleError> {
            s.filter(|s| !s.trim().is_empty())
                .map(|s| ClockTime::parse_hhmm(s.trim()))
                .transpose()
                .map_err(|source| ScheduleError::InvalidTime {
                    service,
                    sequence,
                    source,
                })
        };

        Ok(Stop {
            station: StationId(self.station),
            sequence,
            distance_km: self.distance_km,
            scheduled_arrival: parse(self.arrival)?,
            scheduled_departure: parse(self.departure)?,
        })
    }
}
