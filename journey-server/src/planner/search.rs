//! Search orchestration.
//!
//! Validates a request, tries direct services first and falls back to
//! one-transfer itineraries only when there are none.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{Itinerary, Station, StationId};
use crate::fare::{FareCalculator, FareClass};
use crate::schedule::{ScheduleStore, StoreError};

use super::config::SearchConfig;
use super::connecting::find_connecting;
use super::direct::find_direct;
use super::pricing::LegPricer;

/// Error from journey search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The request itself is unusable; retrying will not help
    #[error("invalid search request: {0}")]
    InvalidInput(String),

    /// The schedule could not be queried, or the search ran out of time
    #[error("search unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<StoreError> for SearchError {
    fn from(e: StoreError) -> Self {
        SearchError::ServiceUnavailable(e.to_string())
    }
}

/// Request for journey search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub source: StationId,
    pub destination: StationId,
    pub travel_date: NaiveDate,
    /// The day the search is made; fares are quoted as booked on this day.
    pub today: NaiveDate,
    pub fare_class: FareClass,
}

impl SearchRequest {
    /// Create a new search request. The travel date defaults to `today`.
    pub fn new(
        source: StationId,
        destination: StationId,
        travel_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        Self {
            source,
            destination,
            travel_date: travel_date.unwrap_or(today),
            today,
            fare_class: FareClass::default(),
        }
    }

    pub fn with_fare_class(mut self, fare_class: FareClass) -> Self {
        self.fare_class = fare_class;
        self
    }

    /// Validate the search request against a booking horizon in days.
    pub fn validate(&self, horizon_days: i64) -> Result<(), SearchError> {
        if !self.source.is_valid() || !self.destination.is_valid() {
            return Err(SearchError::InvalidInput(
                "source and destination must be positive station ids".to_string(),
            ));
        }

        if self.source == self.destination {
            return Err(SearchError::InvalidInput(
                "source and destination must differ".to_string(),
            ));
        }

        let days_ahead = self
            .travel_date
            .signed_duration_since(self.today)
            .num_days();
        if days_ahead < 0 {
            return Err(SearchError::InvalidInput(format!(
                "travel date {} is in the past",
                self.travel_date
            )));
        }
        if days_ahead > horizon_days {
            return Err(SearchError::InvalidInput(format!(
                "travel date {} is more than {horizon_days} days ahead",
                self.travel_date
            )));
        }

        Ok(())
    }
}

/// Journey planner over a shared schedule store.
pub struct Planner<S> {
    store: Arc<S>,
    calculator: FareCalculator,
    config: SearchConfig,
}

impl<S: ScheduleStore> Planner<S> {
    /// Create a new planner.
    pub fn new(store: Arc<S>, calculator: FareCalculator, config: SearchConfig) -> Self {
        Self {
            store,
            calculator,
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn calculator(&self) -> &FareCalculator {
        &self.calculator
    }

    /// Active stations for the station picker.
    pub async fn stations(&self) -> Result<Vec<Station>, SearchError> {
        let store = self.store.as_ref();
        let stations = self
            .config
            .retry
            .run("list_active_stations", || store.list_active_stations())
            .await?;
        Ok(stations)
    }

    /// Search for itineraries.
    ///
    /// Direct services are returned when any exist; otherwise one-transfer
    /// itineraries. The result is unranked and may be empty.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a malformed request (checked before the store is
    /// touched). `ServiceUnavailable` if the store cannot be reached after
    /// retries or the search exceeds its timeout.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        request.validate(self.config.horizon_days)?;

        match tokio::time::timeout(self.config.search_timeout, self.run(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    source = %request.source,
                    destination = %request.destination,
                    timeout = ?self.config.search_timeout,
                    "Search timed out"
                );
                Err(SearchError::ServiceUnavailable(
                    "search timed out".to_string(),
                ))
            }
        }
    }

    async fn run(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        let store = self.store.as_ref();
        let pricer = LegPricer::new(
            &self.calculator,
            request.travel_date,
            request.today,
            request.fare_class,
        );

        let direct = find_direct(
            store,
            &self.config.retry,
            &pricer,
            request.source,
            request.destination,
        )
        .await?;

        if !direct.is_empty() {
            info!(
                source = %request.source,
                destination = %request.destination,
                date = %pricer.travel_date(),
                found = direct.len(),
                "Found direct services"
            );
            return Ok(direct.into_iter().map(Itinerary::Direct).collect());
        }

        debug!(
            source = %request.source,
            destination = %request.destination,
            "No direct services, trying connections"
        );

        let connecting = find_connecting(
            store,
            &self.config,
            &pricer,
            request.source,
            request.destination,
        )
        .await?;

        info!(
            source = %request.source,
            destination = %request.destination,
            date = %pricer.travel_date(),
            found = connecting.len(),
            "Found connecting itineraries"
        );

        Ok(connecting)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
