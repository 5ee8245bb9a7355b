//! Direct route search: one service from source to destination.

use tracing::{debug, warn};

use crate::domain::{Leg, StationId};
use crate::schedule::{RetryPolicy, ScheduleStore, StoreError};

use super::pricing::LegPricer;

/// Find every active service calling at `source` and later at
/// `destination`, priced as one leg each.
///
/// Pairs that cannot become a leg (no distance between the stops, a
/// missing time) are dropped with a warning. The result is in store
/// order; callers must not rely on it.
pub async fn find_direct<S: ScheduleStore>(
    store: &S,
    retry: &RetryPolicy,
    pricer: &LegPricer<'_>,
    source: StationId,
    destination: StationId,
) -> Result<Vec<Leg>, StoreError> {
    let pairs = retry
        .run("direct_route_pairs", || {
            store.direct_route_pairs(source, destination)
        })
        .await?;

    let total = pairs.len();
    let legs: Vec<Leg> = pairs
        .into_iter()
        .filter_map(|pair| {
            let service = pair.service.id;
            match pricer.price(pair) {
                Ok(leg) => Some(leg),
                Err(e) => {
                    warn!(%service, error = %e, "Skipping unusable direct service");
                    None
                }
            }
        })
        .collect();

    debug!(
        %source,
        %destination,
        pairs = total,
        legs = legs.len(),
        "Direct search complete"
    );

    Ok(legs)
}
