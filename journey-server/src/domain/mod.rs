//! Domain types for the journey search engine.
//!
//! This module contains the core domain model types that represent
//! validated schedule data and search results. Types enforce their
//! invariants at construction time, so code that receives them can trust
//! their validity.

mod error;
mod itinerary;
pub(crate) mod leg;
mod service;
mod station;
mod time;

pub use error::DomainError;
pub use itinerary::{Connection, Itinerary};
pub use leg::Leg;
pub use service::{Service, ServiceId, Stop, StopPair};
pub use station::{InvalidStationCode, Station, StationCode, StationId};
pub use time::{ClockTime, TimeError};
