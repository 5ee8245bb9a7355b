//! Search configuration for the journey planner.

use std::time::Duration;

use crate::domain::ClockTime;
use crate::schedule::RetryPolicy;

/// Configuration parameters for journey search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of transfer stations evaluated per connecting search.
    pub max_transfer_candidates: usize,

    /// How many days ahead of today a journey may be searched.
    pub horizon_days: i64,

    /// Minimum time between arriving at a transfer station and departing.
    /// Zero accepts a departure at exactly the arrival time.
    pub min_transfer_mins: u32,

    /// Retry policy applied to every store query.
    pub retry: RetryPolicy,

    /// Upper bound on the whole search, retries included.
    pub search_timeout: Duration,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_transfer_candidates: usize,
        horizon_days: i64,
        min_transfer_mins: u32,
        retry: RetryPolicy,
        search_timeout: Duration,
    ) -> Self {
        Self {
            max_transfer_candidates,
            horizon_days,
            min_transfer_mins,
            retry,
            search_timeout,
        }
    }

    /// Earliest time an onward service may leave after arriving at
    /// `arrival`, or `None` if the transfer would run past midnight.
    pub fn earliest_onward_departure(&self, arrival: ClockTime) -> Option<ClockTime> {
        arrival.checked_add_mins(self.min_transfer_mins)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfer_candidates: 10,
            horizon_days: 120,
            min_transfer_mins: 0,
            retry: RetryPolicy::default(),
            search_timeout: Duration::from_secs(10),
        }
    }
}
