//! Fare computation.
//!
//! Turns a trip's distance, service category, travel date and class into
//! an itemised fare. Demand and seasonal pricing are simulated heuristics
//! driven entirely by `FareConfig`; nothing here looks at bookings.

mod calculator;
mod class;
mod config;

pub use calculator::{ClassQuote, FareBreakdown, FareCalculator, FareError, parse_travel_date};
pub use class::FareClass;
pub use config::{
    ClassMultipliers, DemandConfig, DemandLevel, DistanceTier, EarlyBookingBand, FareConfig,
    Season, SeasonConfig,
};
