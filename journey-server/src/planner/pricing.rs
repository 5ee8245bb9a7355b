//! Turning schedule stop pairs into priced legs.

use chrono::NaiveDate;

use crate::domain::{DomainError, Leg, StopPair};
use crate::fare::{FareCalculator, FareClass, FareError};

/// Why a stop pair could not become a leg.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LegError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Fare(#[from] FareError),
}

/// Prices legs for one search: fixed calculator, dates and class.
#[derive(Debug, Clone, Copy)]
pub struct LegPricer<'a> {
    calculator: &'a FareCalculator,
    travel_date: NaiveDate,
    booked_on: NaiveDate,
    fare_class: FareClass,
}

impl<'a> LegPricer<'a> {
    pub fn new(
        calculator: &'a FareCalculator,
        travel_date: NaiveDate,
        booked_on: NaiveDate,
        fare_class: FareClass,
    ) -> Self {
        Self {
            calculator,
            travel_date,
            booked_on,
            fare_class,
        }
    }

    pub fn travel_date(&self) -> NaiveDate {
        self.travel_date
    }

    /// Price the pair's distance on its service's category and build the leg.
    pub fn price(&self, pair: StopPair) -> Result<Leg, LegError> {
        let fare = self.calculator.compute(
            pair.distance_km(),
            &pair.service.category,
            self.travel_date,
            self.fare_class,
            self.booked_on,
        )?;
        Ok(Leg::new(pair, fare)?)
    }
}
