//! Journey planner.
//!
//! This module answers: "which trains take me from this station to that
//! one on this date, and what does each cost?"
//!
//! Direct services are preferred. Only when none exist does the planner
//! look for itineraries with exactly one change, trying a bounded set of
//! transfer stations concurrently.

mod config;
mod connecting;
mod direct;
mod pricing;
mod rank;
mod search;

pub use config::SearchConfig;
pub use connecting::find_connecting;
pub use direct::find_direct;
pub use pricing::{LegError, LegPricer};
pub use rank::sort_by_total_price;
pub use search::{Planner, SearchError, SearchRequest};
