use chrono::Duration;
use sea_orm::Database;
use tracing::info;

use hotelier_auth::config::AuthConfig;
use hotelier_auth::router::build_router;
use hotelier_auth::state::AppState;
use hotelier_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = AuthConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        session_secret: config.session_secret,
        cookie_domain: config.cookie_domain,
        session_ttl: Duration::seconds(config.session_ttl_secs),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
