use chrono::Duration;
use sea_orm::Database;
use tracing::info;

use hotelier_core::tracing::init_tracing;
use hotelier_hotel::config::HotelConfig;
use hotelier_hotel::gate::GateState;
use hotelier_hotel::router::build_router;
use hotelier_hotel::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = HotelConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        gate: GateState::new(
            config.session_secret,
            config.cookie_domain,
            Duration::seconds(config.session_ttl_secs),
        ),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.hotel_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("hotel service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
