//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{Local, NaiveDate};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::StationId;
use crate::fare::{ClassQuote, FareClass, FareError, parse_travel_date};
use crate::planner::{SearchError, SearchRequest};
use crate::stations::StationDirectory;

use super::dto::*;
use super::state::AppState;

/// Category quoted when the caller does not name one.
const DEFAULT_CATEGORY: &str = "Express";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/stations", get(list_stations))
        .route("/api/search", get(search_journeys))
        .route("/api/fares", get(quote_fares))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Active stations, optionally filtered by name or code.
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Result<Json<StationsResponse>, AppError> {
    let filter = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());

    let stations = match filter {
        Some(q) => state
            .stations
            .search(q)
            .into_iter()
            .map(StationResult::from_station)
            .collect(),
        None => state
            .planner
            .stations()
            .await?
            .iter()
            .map(StationResult::from_station)
            .collect(),
    };

    Ok(Json(StationsResponse { stations }))
}

/// Search for journeys between two stations.
async fn search_journeys(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let today = Local::now().date_naive();
    search_on(&state, query, today).await.map(Json)
}

async fn search_on(
    state: &AppState,
    query: SearchQuery,
    today: NaiveDate,
) -> Result<SearchResponse, AppError> {
    let (Some(source), Some(destination)) = (
        non_empty(query.source.as_deref()),
        non_empty(query.destination.as_deref()),
    ) else {
        return Err(AppError::bad_request("source and destination are required"));
    };

    let source = resolve_station(&state.stations, source)?;
    let destination = resolve_station(&state.stations, destination)?;
    let travel_date = non_empty(query.date.as_deref())
        .map(parse_travel_date)
        .transpose()?;
    let fare_class = non_empty(query.class.as_deref())
        .map(FareClass::parse_or_default)
        .unwrap_or_default();

    let request =
        SearchRequest::new(source, destination, travel_date, today).with_fare_class(fare_class);
    let itineraries = state.planner.search(&request).await?;

    Ok(SearchResponse {
        source: StationResult::lookup(&state.stations, source),
        destination: StationResult::lookup(&state.stations, destination),
        date: request.travel_date.to_string(),
        fare_class: fare_class.to_string(),
        itineraries: itineraries
            .iter()
            .map(|itinerary| ItineraryResult::from_itinerary(itinerary, &state.stations))
            .collect(),
    })
}

/// Quote a fare for a distance, in one class or all of them.
async fn quote_fares(
    State(state): State<AppState>,
    Query(query): Query<FareQuery>,
) -> Result<Json<FaresResponse>, AppError> {
    let today = Local::now().date_naive();
    quote_on(&state, query, today).map(Json)
}

fn quote_on(state: &AppState, query: FareQuery, today: NaiveDate) -> Result<FaresResponse, AppError> {
    let calculator = state.planner.calculator();
    let distance = parse_distance(query.distance.as_deref())?;
    let category = non_empty(query.category.as_deref()).unwrap_or(DEFAULT_CATEGORY);
    let travel_date = non_empty(query.date.as_deref())
        .map(parse_travel_date)
        .transpose()?
        .unwrap_or(today);

    let quotes = match non_empty(query.class.as_deref()) {
        Some(code) => {
            let class = FareClass::parse_or_default(code);
            let fare = calculator.compute(distance, category, travel_date, class, today)?;
            vec![ClassQuote {
                fare_class: class,
                name: class.display_name(),
                fare,
            }]
        }
        None => calculator.quote_all_classes(distance, category, travel_date, today)?,
    };

    Ok(FaresResponse {
        distance_km: distance,
        category: category.to_string(),
        date: travel_date.to_string(),
        quotes: quotes.iter().map(QuoteResult::from_quote).collect(),
    })
}

fn parse_distance(value: Option<&str>) -> Result<f64, AppError> {
    let raw = non_empty(value).ok_or_else(|| AppError::bad_request("distance is required"))?;
    raw.parse()
        .map_err(|_| AppError::bad_request(format!("distance must be a number, got {raw:?}")))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn resolve_station(stations: &StationDirectory, reference: &str) -> Result<StationId, AppError> {
    stations
        .resolve(reference)
        .ok_or_else(|| AppError::bad_request(format!("unknown station: {reference}")))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    ServiceUnavailable { message: String },
}

impl AppError {
    fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidInput(message) => AppError::BadRequest { message },
            SearchError::ServiceUnavailable(message) => AppError::ServiceUnavailable { message },
        }
    }
}

impl From<FareError> for AppError {
    fn from(e: FareError) -> Self {
        AppError::bad_request(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::ServiceUnavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
