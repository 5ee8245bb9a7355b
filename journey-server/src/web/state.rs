//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::Planner;
use crate::schedule::InMemorySchedule;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Journey planner over the loaded schedule
    pub planner: Arc<Planner<InMemorySchedule>>,

    /// Station lookup for names and codes
    pub stations: Arc<StationDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: Planner<InMemorySchedule>, stations: StationDirectory) -> Self {
        Self {
            planner: Arc::new(planner),
            stations: Arc::new(stations),
        }
    }
}
