use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use journey_server::fare::FareCalculator;
use journey_server::planner::{Planner, SearchConfig};
use journey_server::schedule::InMemorySchedule;
use journey_server::stations::StationDirectory;
use journey_server::web::{AppState, create_router};

const DEFAULT_SCHEDULE_PATH: &str = "data/schedule.json";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let schedule_path =
        std::env::var("SCHEDULE_PATH").unwrap_or_else(|_| DEFAULT_SCHEDULE_PATH.to_string());
    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .expect("BIND_ADDR must be a socket address");

    // Load the schedule (fail fast if missing or invalid)
    let schedule = InMemorySchedule::load(&schedule_path).expect("Failed to load schedule");

    let planner = Planner::new(
        Arc::new(schedule),
        FareCalculator::default(),
        SearchConfig::default(),
    );
    let stations = StationDirectory::new(
        planner
            .stations()
            .await
            .expect("Failed to list stations"),
    );
    info!(stations = stations.len(), "Station directory ready");

    let state = AppState::new(planner, stations);
    let app = create_router(state);

    info!("Journey search listening on http://{addr}");
    info!("  GET /api/stations?q=        - Active stations");
    info!("  GET /api/search?source=&destination=&date=&class=  - Journey search");
    info!("  GET /api/fares?distance=&category=&date=&class=    - Fare quotes");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
