//! Journey search and fare engine.
//!
//! A web service that answers: "how do I get from this station to that
//! one on this date, and what will each option cost?"

pub mod domain;
pub mod fare;
pub mod planner;
pub mod schedule;
pub mod stations;
pub mod web;
