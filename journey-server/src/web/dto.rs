//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg, Station, StationId};
use crate::fare::{ClassQuote, FareBreakdown};
use crate::stations::StationDirectory;

/// Query for the station list.
#[derive(Debug, Default, Deserialize)]
pub struct StationsQuery {
    /// Optional name or code filter
    pub q: Option<String>,
}

/// A station in responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationResult {
    pub id: u32,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// Query for a journey search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Station id or code
    pub source: Option<String>,

    /// Station id or code
    pub destination: Option<String>,

    /// Travel date, `YYYY-MM-DD` (defaults to today)
    pub date: Option<String>,

    /// Fare class code (defaults to sleeper)
    pub class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub source: StationResult,
    pub destination: StationResult,
    pub date: String,
    pub fare_class: String,
    pub itineraries: Vec<ItineraryResult>,
}

/// One journey option.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    /// "direct" or "connecting"
    pub route_type: &'static str,
    pub transfer_station: Option<StationResult>,
    pub departure_time: String,
    pub arrival_time: String,
    pub total_distance_km: f64,
    pub total_price: i64,
    pub legs: Vec<LegResult>,
}

/// One train within a journey option.
#[derive(Debug, Serialize)]
pub struct LegResult {
    pub service_id: u32,
    pub train_name: String,
    pub train_number: String,
    pub category: String,
    pub from: StationResult,
    pub to: StationResult,
    pub departure_time: String,
    pub arrival_time: String,
    pub distance_km: f64,
    pub fare: FareResult,
}

/// Itemised fare.
#[derive(Debug, Serialize)]
pub struct FareResult {
    pub fare_class: String,
    pub class_name: &'static str,
    pub demand_level: &'static str,
    pub season: &'static str,
    pub base_fee: i64,
    pub distance_charge: i64,
    pub demand_surcharge: i64,
    pub weekend_surcharge: i64,
    pub holiday_surcharge: i64,
    pub seasonal_adjustment: i64,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<i64>,
    pub discount_applied: bool,
}

/// Query for a fare quote.
#[derive(Debug, Deserialize)]
pub struct FareQuery {
    /// Distance in km, parsed by the handler
    pub distance: Option<String>,

    /// Service category (defaults to Express)
    pub category: Option<String>,

    /// Travel date, `YYYY-MM-DD` (defaults to today)
    pub date: Option<String>,

    /// Fare class code; all classes are quoted when absent
    pub class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FaresResponse {
    pub distance_km: f64,
    pub category: String,
    pub date: String,
    pub quotes: Vec<QuoteResult>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResult {
    pub fare_class: String,
    pub name: &'static str,
    pub fare: FareResult,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.0,
            name: station.name.clone(),
            code: station.code.to_string(),
        }
    }

    /// Look the station up, falling back to the bare id.
    pub fn lookup(stations: &StationDirectory, id: StationId) -> Self {
        match stations.get(id) {
            Some(station) => Self::from_station(station),
            None => Self {
                id: id.0,
                name: stations.name(id),
                code: String::new(),
            },
        }
    }
}

impl ItineraryResult {
    pub fn from_itinerary(itinerary: &Itinerary, stations: &StationDirectory) -> Self {
        Self {
            route_type: if itinerary.is_direct() {
                "direct"
            } else {
                "connecting"
            },
            transfer_station: itinerary
                .transfer_station()
                .map(|id| StationResult::lookup(stations, id)),
            departure_time: itinerary.departure_time().to_string(),
            arrival_time: itinerary.arrival_time().to_string(),
            total_distance_km: itinerary.total_distance_km(),
            total_price: itinerary.total_price(),
            legs: itinerary
                .legs()
                .into_iter()
                .map(|leg| LegResult::from_leg(leg, stations))
                .collect(),
        }
    }
}

impl LegResult {
    pub fn from_leg(leg: &Leg, stations: &StationDirectory) -> Self {
        let service = leg.service();
        Self {
            service_id: service.id.0,
            train_name: service.name.clone(),
            train_number: service.number.clone(),
            category: service.category.clone(),
            from: StationResult::lookup(stations, leg.from()),
            to: StationResult::lookup(stations, leg.to()),
            departure_time: leg.departure_time().to_string(),
            arrival_time: leg.arrival_time().to_string(),
            distance_km: leg.distance_km(),
            fare: FareResult::from_breakdown(leg.fare()),
        }
    }
}

impl FareResult {
    pub fn from_breakdown(fare: &FareBreakdown) -> Self {
        Self {
            fare_class: fare.fare_class.to_string(),
            class_name: fare.fare_class.display_name(),
            demand_level: fare.demand_level.as_str(),
            season: fare.season.as_str(),
            base_fee: fare.base_fee,
            distance_charge: fare.distance_charge,
            demand_surcharge: fare.demand_surcharge,
            weekend_surcharge: fare.weekend_surcharge,
            holiday_surcharge: fare.holiday_surcharge,
            seasonal_adjustment: fare.seasonal_adjustment,
            total: fare.total,
            original_price: fare.original_price,
            savings: fare.savings,
            discount_applied: fare.discount_applied(),
        }
    }
}

impl QuoteResult {
    pub fn from_quote(quote: &ClassQuote) -> Self {
        Self {
            fare_class: quote.fare_class.to_string(),
            name: quote.name,
            fare: FareResult::from_breakdown(&quote.fare),
        }
    }
}
