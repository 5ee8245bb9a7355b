//! Fare configuration.
//!
//! Every rate, tier boundary and surcharge the calculator uses lives here.
//! `FareConfig::default()` holds the published tables; tests and operators
//! can build their own.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use super::FareClass;

/// Simulated demand bucket for a travel day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
    Peak,
}

impl DemandLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemandLevel::Low => "low",
            DemandLevel::Medium => "medium",
            DemandLevel::High => "high",
            DemandLevel::Peak => "peak",
        }
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel season, derived from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// April to June
    Summer,
    /// July to September
    Monsoon,
    /// October to March
    Winter,
}

impl Season {
    /// Season for a calendar month (1-12).
    pub fn for_month(month: u32) -> Self {
        match month {
            4..=6 => Season::Summer,
            7..=9 => Season::Monsoon,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month(date.month())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distance band and the multiplier applied to the distance charge.
///
/// Tiers are matched in order; the first whose `max_km` is at least the
/// trip distance wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceTier {
    pub max_km: f64,
    pub multiplier: f64,
}

/// Rules mapping a travel day and trip length to a demand level.
#[derive(Debug, Clone, PartialEq)]
pub struct DemandConfig {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub peak: f64,
    /// Weekdays pinned to a level regardless of distance.
    pub fixed_days: Vec<(Weekday, DemandLevel)>,
    /// Trips longer than this use `long_distance_level` on other days.
    pub long_distance_km: f64,
    pub long_distance_level: DemandLevel,
    /// Level for short trips on days with no fixed level.
    pub ordinary_level: DemandLevel,
}

impl DemandConfig {
    /// Deterministic demand level for a travel day and distance.
    pub fn level_for(&self, weekday: Weekday, distance_km: f64) -> DemandLevel {
        if let Some((_, level)) = self.fixed_days.iter().find(|(day, _)| *day == weekday) {
            return *level;
        }
        if distance_km > self.long_distance_km {
            self.long_distance_level
        } else {
            self.ordinary_level
        }
    }

    pub fn multiplier(&self, level: DemandLevel) -> f64 {
        match level {
            DemandLevel::Low => self.low,
            DemandLevel::Medium => self.medium,
            DemandLevel::High => self.high,
            DemandLevel::Peak => self.peak,
        }
    }
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            low: 0.9,
            medium: 1.0,
            high: 1.3,
            peak: 1.5,
            fixed_days: vec![
                (Weekday::Fri, DemandLevel::High),
                (Weekday::Sat, DemandLevel::Peak),
                (Weekday::Sun, DemandLevel::High),
            ],
            long_distance_km: 1000.0,
            long_distance_level: DemandLevel::Medium,
            ordinary_level: DemandLevel::Low,
        }
    }
}

/// Seasonal multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonConfig {
    pub summer: f64,
    pub monsoon: f64,
    pub winter: f64,
}

impl SeasonConfig {
    pub fn multiplier(&self, season: Season) -> f64 {
        match season {
            Season::Summer => self.summer,
            Season::Monsoon => self.monsoon,
            Season::Winter => self.winter,
        }
    }
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self {
            summer: 1.1,
            monsoon: 0.95,
            winter: 1.2,
        }
    }
}

/// Multipliers applied to the whole fare per travel class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMultipliers {
    pub sleeper: f64,
    pub three_ac: f64,
    pub two_ac: f64,
    pub one_ac: f64,
    pub chair_car: f64,
}

impl ClassMultipliers {
    pub fn get(&self, class: FareClass) -> f64 {
        match class {
            FareClass::Sleeper => self.sleeper,
            FareClass::ThreeAc => self.three_ac,
            FareClass::TwoAc => self.two_ac,
            FareClass::OneAc => self.one_ac,
            FareClass::ChairCar => self.chair_car,
        }
    }
}

impl Default for ClassMultipliers {
    fn default() -> Self {
        Self {
            sleeper: 1.0,
            three_ac: 2.5,
            two_ac: 3.5,
            one_ac: 5.0,
            chair_car: 2.0,
        }
    }
}

/// Discount for booking at least `min_days` ahead of travel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarlyBookingBand {
    pub min_days: i64,
    pub discount: f64,
}

/// Complete fare configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FareConfig {
    /// Minimum booking fee added to every fare.
    pub base_fee: f64,
    /// Per-km rate by service category, keyed lowercase.
    pub category_rates: HashMap<String, f64>,
    /// Rate for categories missing from `category_rates`.
    pub default_rate: f64,
    pub distance_tiers: Vec<DistanceTier>,
    pub weekend_days: Vec<Weekday>,
    pub weekend_surcharge: f64,
    pub holidays: BTreeSet<NaiveDate>,
    pub holiday_surcharge: f64,
    pub demand: DemandConfig,
    pub seasons: SeasonConfig,
    pub classes: ClassMultipliers,
    /// Checked in order; the first band whose `min_days` is met applies.
    pub early_booking: Vec<EarlyBookingBand>,
}

impl FareConfig {
    /// Set or replace the per-km rate for a category.
    pub fn with_category_rate(mut self, category: &str, rate: f64) -> Self {
        self.category_rates
            .insert(category.to_ascii_lowercase(), rate);
        self
    }

    /// Add a holiday date.
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Per-km rate for a service category, case-insensitive.
    pub fn rate_for(&self, category: &str) -> f64 {
        self.category_rates
            .get(&category.trim().to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Distance tier multiplier; 1.0 if no tier covers the distance.
    pub fn tier_multiplier(&self, distance_km: f64) -> f64 {
        self.distance_tiers
            .iter()
            .find(|tier| distance_km <= tier.max_km)
            .map_or(1.0, |tier| tier.multiplier)
    }

    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.weekend_days.contains(&date.weekday())
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Early-booking discount fraction for booking `days_ahead` days early.
    pub fn early_booking_discount(&self, days_ahead: i64) -> f64 {
        self.early_booking
            .iter()
            .find(|band| days_ahead >= band.min_days)
            .map_or(0.0, |band| band.discount)
    }
}

/// Published per-km rates.
const CATEGORY_RATES: &[(&str, f64)] = &[
    ("Rajdhani", 2.5),
    ("Shatabdi", 2.2),
    ("Duronto", 2.0),
    ("Superfast", 1.8),
    ("Express", 1.5),
    ("Mail", 1.3),
    ("Passenger", 1.0),
    ("Jan Shatabdi", 1.6),
    ("Intercity", 1.4),
    ("Local", 0.8),
];

/// National holidays with a published date.
const HOLIDAYS: &[(i32, u32, u32)] = &[
    (2024, 1, 26),
    (2024, 3, 8),
    (2024, 3, 29),
    (2024, 8, 15),
    (2024, 10, 2),
    (2024, 10, 24),
    (2024, 11, 12),
    (2024, 12, 25),
    (2025, 1, 26),
    (2025, 8, 15),
    (2025, 10, 2),
    (2025, 12, 25),
    (2026, 1, 26),
    (2026, 8, 15),
    (2026, 10, 2),
    (2026, 12, 25),
    (2027, 1, 26),
    (2027, 8, 15),
    (2027, 10, 2),
    (2027, 12, 25),
];

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fee: 50.0,
            category_rates: CATEGORY_RATES
                .iter()
                .map(|(name, rate)| (name.to_ascii_lowercase(), *rate))
                .collect(),
            default_rate: 1.5,
            distance_tiers: vec![
                DistanceTier {
                    max_km: 200.0,
                    multiplier: 1.2,
                },
                DistanceTier {
                    max_km: 500.0,
                    multiplier: 1.0,
                },
                DistanceTier {
                    max_km: 1000.0,
                    multiplier: 0.9,
                },
                DistanceTier {
                    max_km: 2000.0,
                    multiplier: 0.8,
                },
                DistanceTier {
                    max_km: f64::INFINITY,
                    multiplier: 0.7,
                },
            ],
            weekend_days: vec![Weekday::Sat, Weekday::Sun],
            weekend_surcharge: 0.15,
            holidays: HOLIDAYS
                .iter()
                .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
                .collect(),
            holiday_surcharge: 0.25,
            demand: DemandConfig::default(),
            seasons: SeasonConfig::default(),
            classes: ClassMultipliers::default(),
            early_booking: vec![
                EarlyBookingBand {
                    min_days: 31,
                    discount: 0.10,
                },
                EarlyBookingBand {
                    min_days: 16,
                    discount: 0.05,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn category_rates_are_case_insensitive() {
        let config = FareConfig::default();
        assert_eq!(config.rate_for("Rajdhani"), 2.5);
        assert_eq!(config.rate_for("rajdhani"), 2.5);
        assert_eq!(config.rate_for(" Jan Shatabdi "), 1.6);
        assert_eq!(config.rate_for("LOCAL"), 0.8);
    }

    #[test]
    fn unknown_category_uses_default_rate() {
        let config = FareConfig::default();
        assert_eq!(config.rate_for("Hovercraft"), 1.5);
        assert_eq!(config.rate_for(""), 1.5);
    }

    #[test]
    fn with_category_rate_overrides() {
        let config = FareConfig::default().with_category_rate("Vande Bharat", 2.8);
        assert_eq!(config.rate_for("vande bharat"), 2.8);
    }

    #[test]
    fn distance_tiers() {
        let config = FareConfig::default();
        assert_eq!(config.tier_multiplier(1.0), 1.2);
        assert_eq!(config.tier_multiplier(200.0), 1.2);
        assert_eq!(config.tier_multiplier(200.5), 1.0);
        assert_eq!(config.tier_multiplier(500.0), 1.0);
        assert_eq!(config.tier_multiplier(750.0), 0.9);
        assert_eq!(config.tier_multiplier(1500.0), 0.8);
        assert_eq!(config.tier_multiplier(2001.0), 0.7);
        assert_eq!(config.tier_multiplier(10_000.0), 0.7);
    }

    #[test]
    fn no_tiers_means_no_adjustment() {
        let config = FareConfig {
            distance_tiers: Vec::new(),
            ..FareConfig::default()
        };
        assert_eq!(config.tier_multiplier(300.0), 1.0);
    }

    #[test]
    fn seasons_by_month() {
        assert_eq!(Season::for_month(1), Season::Winter);
        assert_eq!(Season::for_month(3), Season::Winter);
        assert_eq!(Season::for_month(4), Season::Summer);
        assert_eq!(Season::for_month(6), Season::Summer);
        assert_eq!(Season::for_month(7), Season::Monsoon);
        assert_eq!(Season::for_month(9), Season::Monsoon);
        assert_eq!(Season::for_month(10), Season::Winter);
        assert_eq!(Season::for_month(12), Season::Winter);
    }

    #[test]
    fn demand_levels() {
        let demand = DemandConfig::default();
        assert_eq!(demand.level_for(Weekday::Sat, 100.0), DemandLevel::Peak);
        assert_eq!(demand.level_for(Weekday::Sat, 3000.0), DemandLevel::Peak);
        assert_eq!(demand.level_for(Weekday::Fri, 100.0), DemandLevel::High);
        assert_eq!(demand.level_for(Weekday::Sun, 100.0), DemandLevel::High);
        assert_eq!(demand.level_for(Weekday::Mon, 100.0), DemandLevel::Low);
        assert_eq!(demand.level_for(Weekday::Thu, 1000.0), DemandLevel::Low);
        assert_eq!(demand.level_for(Weekday::Wed, 1000.5), DemandLevel::Medium);
    }

    #[test]
    fn weekend_and_holiday_lookup() {
        let config = FareConfig::default();
        assert!(config.is_weekend(date(2026, 10, 17)));
        assert!(config.is_weekend(date(2026, 10, 18)));
        assert!(!config.is_weekend(date(2026, 10, 19)));

        assert!(config.is_holiday(date(2024, 11, 12)));
        assert!(config.is_holiday(date(2026, 12, 25)));
        assert!(!config.is_holiday(date(2026, 12, 24)));
    }

    #[test]
    fn early_booking_bands() {
        let config = FareConfig::default();
        assert_eq!(config.early_booking_discount(-3), 0.0);
        assert_eq!(config.early_booking_discount(0), 0.0);
        assert_eq!(config.early_booking_discount(15), 0.0);
        assert_eq!(config.early_booking_discount(16), 0.05);
        assert_eq!(config.early_booking_discount(30), 0.05);
        assert_eq!(config.early_booking_discount(31), 0.10);
        assert_eq!(config.early_booking_discount(120), 0.10);
    }

    #[test]
    fn class_multipliers() {
        let classes = ClassMultipliers::default();
        assert_eq!(classes.get(FareClass::Sleeper), 1.0);
        assert_eq!(classes.get(FareClass::ThreeAc), 2.5);
        assert_eq!(classes.get(FareClass::TwoAc), 3.5);
        assert_eq!(classes.get(FareClass::OneAc), 5.0);
        assert_eq!(classes.get(FareClass::ChairCar), 2.0);
    }
}
