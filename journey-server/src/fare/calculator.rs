//! Fare computation.
//!
//! Pure: the same distance, category, dates and class always give the same
//! breakdown. All arithmetic is done in `f64`; each reported field is then
//! rounded on its own to whole currency units.

use chrono::{Datelike, Local, NaiveDate};

use super::config::{DemandLevel, FareConfig, Season};
use super::FareClass;

/// Errors from fare computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// Distance was zero, negative or not a number
    #[error("distance must be a positive number of km, got {0}")]
    InvalidDistance(f64),

    /// Travel date could not be parsed
    #[error("invalid travel date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },
}

/// Parse a travel date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use journey_server::fare::parse_travel_date;
///
/// assert!(parse_travel_date("2026-12-01").is_ok());
/// assert!(parse_travel_date("01/12/2026").is_err());
/// ```
pub fn parse_travel_date(s: &str) -> Result<NaiveDate, FareError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| FareError::InvalidDate {
        input: s.to_string(),
    })
}

/// Itemised fare for one leg in one class.
///
/// Every amount is in whole currency units. `original_price` and `savings`
/// are present only when an early-booking discount applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FareBreakdown {
    pub fare_class: FareClass,
    pub demand_level: DemandLevel,
    pub season: Season,
    pub base_fee: i64,
    pub distance_charge: i64,
    pub demand_surcharge: i64,
    pub weekend_surcharge: i64,
    pub holiday_surcharge: i64,
    pub seasonal_adjustment: i64,
    pub total: i64,
    pub original_price: Option<i64>,
    pub savings: Option<i64>,
}

impl FareBreakdown {
    pub fn discount_applied(&self) -> bool {
        self.savings.is_some()
    }
}

/// A fare quoted for one class, for per-class previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassQuote {
    pub fare_class: FareClass,
    pub name: &'static str,
    pub fare: FareBreakdown,
}

/// Computes itemised fares from a `FareConfig`.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    pub fn new(config: FareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Compute the fare for a trip.
    ///
    /// `booked_on` is the day the fare is quoted; the number of whole days
    /// between it and `travel_date` decides the early-booking discount.
    ///
    /// # Errors
    ///
    /// Returns `FareError::InvalidDistance` if `distance_km` is not a
    /// positive finite number.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use journey_server::fare::{FareCalculator, FareClass};
    ///
    /// let calculator = FareCalculator::default();
    /// let tuesday = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
    /// let fare = calculator
    ///     .compute(300.0, "Express", tuesday, FareClass::Sleeper, tuesday)
    ///     .unwrap();
    ///
    /// assert_eq!(fare.base_fee, 50);
    /// assert_eq!(fare.distance_charge, 450);
    /// assert_eq!(fare.weekend_surcharge, 0);
    /// ```
    pub fn compute(
        &self,
        distance_km: f64,
        category: &str,
        travel_date: NaiveDate,
        class: FareClass,
        booked_on: NaiveDate,
    ) -> Result<FareBreakdown, FareError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(FareError::InvalidDistance(distance_km));
        }

        let config = &self.config;

        let base = config.base_fee;
        let rate = config.rate_for(category);
        let distance = distance_km * rate * config.tier_multiplier(distance_km);
        let subtotal = base + distance;

        let weekend = if config.is_weekend(travel_date) {
            subtotal * config.weekend_surcharge
        } else {
            0.0
        };
        let holiday = if config.is_holiday(travel_date) {
            subtotal * config.holiday_surcharge
        } else {
            0.0
        };

        let demand_level = config.demand.level_for(travel_date.weekday(), distance_km);
        let demand = subtotal * (config.demand.multiplier(demand_level) - 1.0);

        let season = Season::for_date(travel_date);
        let seasonal = subtotal * (config.seasons.multiplier(season) - 1.0);

        let before_discount =
            (subtotal + weekend + holiday + demand + seasonal) * config.classes.get(class);

        let days_ahead = travel_date.signed_duration_since(booked_on).num_days();
        let savings = before_discount * config.early_booking_discount(days_ahead);
        let total = before_discount - savings;
        let discounted = savings > 0.0;

        Ok(FareBreakdown {
            fare_class: class,
            demand_level,
            season,
            base_fee: round_currency(base),
            distance_charge: round_currency(distance),
            demand_surcharge: round_currency(demand),
            weekend_surcharge: round_currency(weekend),
            holiday_surcharge: round_currency(holiday),
            seasonal_adjustment: round_currency(seasonal),
            total: round_currency(total),
            original_price: discounted.then(|| round_currency(before_discount)),
            savings: discounted.then(|| round_currency(savings)),
        })
    }

    /// Compute a fare quoted today.
    pub fn compute_today(
        &self,
        distance_km: f64,
        category: &str,
        travel_date: NaiveDate,
        class: FareClass,
    ) -> Result<FareBreakdown, FareError> {
        let today = Local::now().date_naive();
        self.compute(distance_km, category, travel_date, class, today)
    }

    /// Quote the same trip in every class.
    pub fn quote_all_classes(
        &self,
        distance_km: f64,
        category: &str,
        travel_date: NaiveDate,
        booked_on: NaiveDate,
    ) -> Result<Vec<ClassQuote>, FareError> {
        FareClass::ALL
            .into_iter()
            .map(|class| {
                let fare = self.compute(distance_km, category, travel_date, class, booked_on)?;
                Ok(ClassQuote {
                    fare_class: class,
                    name: class.display_name(),
                    fare,
                })
            })
            .collect()
    }
}

/// Round to the nearest whole currency unit, halves away from zero.
fn round_currency(amount: f64) -> i64 {
    amount.round() as i64
}
