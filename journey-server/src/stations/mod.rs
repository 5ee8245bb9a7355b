//! Station lookup.
//!
//! Maps station ids and codes to stations for the web layer. Built once
//! from the schedule at startup; the schedule never changes while the
//! server runs.

mod directory;

pub use directory::StationDirectory;
