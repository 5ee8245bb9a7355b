//! Web layer for the journey search engine.
//!
//! Thin JSON endpoints over the planner and fare calculator: station
//! listing, journey search and fare quotes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
