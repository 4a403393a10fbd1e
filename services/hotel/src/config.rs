use hotelier_auth_types::cookie::SESSION_TTL_SECS;

/// Hotel service configuration loaded from environment variables.
#[derive(Debug)]
pub struct HotelConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret the auth service signs session tokens with.
    pub session_secret: String,
    /// Cookie domain attribute, used when clearing a stale session cookie.
    pub cookie_domain: String,
    /// Session lifetime in seconds (default 3600). Env var: `SESSION_TTL_SECS`.
    pub session_ttl_secs: i64,
    /// TCP port to listen on (default 3113). Env var: `HOTEL_PORT`.
    pub hotel_port: u16,
}

impl HotelConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            session_secret: std::env::var("SESSION_SECRET").expect("SESSION_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").expect("COOKIE_DOMAIN"),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(SESSION_TTL_SECS),
            hotel_port: std::env::var("HOTEL_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3113),
        }
    }
}
