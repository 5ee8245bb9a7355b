//! Connecting route search: two services joined at a transfer station.
//!
//! The store proposes a bounded set of candidate transfer stations. Each
//! candidate is evaluated independently and concurrently: take the
//! earliest service from the source to the candidate, then the earliest
//! onward service that leaves after it arrives. A candidate that fails for
//! any reason is skipped without affecting the others.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Connection, Itinerary, StationId};
use crate::schedule::{ScheduleStore, StoreError};

use super::config::SearchConfig;
use super::pricing::{LegError, LegPricer};
use super::search::SearchError;

/// Why a transfer candidate produced no itinerary.
#[derive(Debug, thiserror::Error)]
enum Skip {
    #[error("no service from the source")]
    NoFirstLeg,

    #[error("no onward service in time")]
    NoSecondLeg,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Leg(#[from] LegError),
}

impl Skip {
    fn store_unavailable(&self) -> bool {
        matches!(self, Skip::Store(e) if e.is_transient())
    }
}

/// Find two-leg itineraries from `source` to `destination`.
///
/// Results are in candidate order (ascending transfer station id), one
/// per candidate at most. An empty result is a valid outcome.
///
/// # Errors
///
/// `ServiceUnavailable` if the candidate query fails, or if nothing was
/// found while some candidate could not reach the store.
pub async fn find_connecting<S: ScheduleStore>(
    store: &S,
    config: &SearchConfig,
    pricer: &LegPricer<'_>,
    source: StationId,
    destination: StationId,
) -> Result<Vec<Itinerary>, SearchError> {
    let limit = config.max_transfer_candidates;
    let candidates = config
        .retry
        .run("transfer_candidates", || {
            store.transfer_candidates(source, destination, limit)
        })
        .await?;

    if candidates.is_empty() {
        debug!(%source, %destination, "No transfer candidates");
        return Ok(Vec::new());
    }

    let outcomes = join_all(candidates.iter().map(|station| {
        evaluate_candidate(store, config, pricer, source, station.id, destination)
    }))
    .await;

    let mut itineraries = Vec::new();
    let mut unavailable = 0;

    for (station, outcome) in candidates.iter().zip(outcomes) {
        match outcome {
            Ok(itinerary) => itineraries.push(itinerary),
            Err(skip) => {
                if skip.store_unavailable() {
                    unavailable += 1;
                    warn!(via = %station.id, reason = %skip, "Transfer candidate skipped");
                } else {
                    debug!(via = %station.id, reason = %skip, "Transfer candidate skipped");
                }
            }
        }
    }

    debug!(
        %source,
        %destination,
        candidates = candidates.len(),
        found = itineraries.len(),
        "Connecting search complete"
    );

    // An empty result would hide routes through the unreachable candidates
    if itineraries.is_empty() && unavailable > 0 {
        return Err(SearchError::ServiceUnavailable(format!(
            "schedule store unavailable for {unavailable} of {} transfer candidates",
            candidates.len()
        )));
    }

    Ok(itineraries)
}

async fn evaluate_candidate<S: ScheduleStore>(
    store: &S,
    config: &SearchConfig,
    pricer: &LegPricer<'_>,
    source: StationId,
    via: StationId,
    destination: StationId,
) -> Result<Itinerary, Skip> {
    let first = config
        .retry
        .run("earliest_leg", || store.earliest_leg(source, via, None))
        .await?
        .ok_or(Skip::NoFirstLeg)?;
    let first = pricer.price(first)?;

    let not_before = config
        .earliest_onward_departure(first.arrival_time())
        .ok_or(Skip::NoSecondLeg)?;

    let second = config
        .retry
        .run("earliest_leg", || {
            store.earliest_leg(via, destination, Some(not_before))
        })
        .await?
        .ok_or(Skip::NoSecondLeg)?;
    let second = pricer.price(second)?;

    let connection = Connection::new(first, second).map_err(LegError::from)?;
    Ok(Itinerary::Connecting(connection))
}
