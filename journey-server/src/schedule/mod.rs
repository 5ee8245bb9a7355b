//! Read-only access to the timetable.
//!
//! The search engine only ever asks four questions of the schedule; they
//! are collected in [`ScheduleStore`] so the planner can be tested against
//! mock stores and the backing storage can change without touching search
//! logic.

mod error;
mod file;
mod memory;
mod retry;

use std::future::Future;

use crate::domain::{ClockTime, Station, StationId, StopPair};

pub use error::{ScheduleError, StoreError};
pub use file::{ScheduleFile, ServiceRecord, StationRecord, StopRecord};
pub use memory::InMemorySchedule;
pub use retry::RetryPolicy;

/// Queries the search engine makes against the schedule.
///
/// Only active services are ever returned. All futures are `Send` so a
/// store can be shared between request handlers.
pub trait ScheduleStore: Send + Sync {
    /// All active stations, ordered by name.
    fn list_active_stations(
        &self,
    ) -> impl Future<Output = Result<Vec<Station>, StoreError>> + Send;

    /// One board/alight pair per service that calls at `from` and later
    /// (by stop sequence) at `to`.
    fn direct_route_pairs(
        &self,
        from: StationId,
        to: StationId,
    ) -> impl Future<Output = Result<Vec<StopPair>, StoreError>> + Send;

    /// Stations sharing an active service with `source` and an active
    /// service with `destination`, excluding both endpoints. Ordered by
    /// ascending station id, at most `limit`.
    ///
    /// Stop order is not considered here; `earliest_leg` filters out
    /// candidates that cannot actually be travelled through.
    fn transfer_candidates(
        &self,
        source: StationId,
        destination: StationId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Station>, StoreError>> + Send;

    /// The earliest-departing `from` → `to` pair, optionally departing no
    /// earlier than `not_before`. Ties go to the lower service id.
    ///
    /// Only travellable pairs are considered: a zero-distance pair or one
    /// without times never hides a later usable service.
    fn earliest_leg(
        &self,
        from: StationId,
        to: StationId,
        not_before: Option<ClockTime>,
    ) -> impl Future<Output = Result<Option<StopPair>, StoreError>> + Send;
}
