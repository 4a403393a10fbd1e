//! Session cookie builders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name carrying the signed session token.
pub const HOTELIER_SESSION: &str = "hotelier_session";

/// Default session lifetime in seconds (1 hour).
pub const SESSION_TTL_SECS: i64 = 3600;

fn session_cookie(value: String, domain: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((HOTELIER_SESSION, value))
        .path("/")
        .domain(domain)
        .max_age(max_age)
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Set the session cookie on the jar.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use hotelier_auth_types::cookie::{set_session_cookie, HOTELIER_SESSION};
///
/// let jar = CookieJar::new();
/// let jar = set_session_cookie(jar, "token".to_string(), "hotel.test".to_string(), 3600);
/// let cookie = jar.get(HOTELIER_SESSION).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("hotel.test"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(3600)));
/// assert!(cookie.http_only().unwrap_or(false));
/// ```
pub fn set_session_cookie(
    jar: CookieJar,
    value: String,
    domain: String,
    max_age_secs: i64,
) -> CookieJar {
    jar.add(session_cookie(value, domain, Duration::seconds(max_age_secs)))
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use hotelier_auth_types::cookie::{clear_session_cookie, set_session_cookie, HOTELIER_SESSION};
///
/// let jar = set_session_cookie(CookieJar::new(), "t".into(), "hotel.test".into(), 3600);
/// let jar = clear_session_cookie(jar, "hotel.test".to_string());
/// let cookie = jar.get(HOTELIER_SESSION).unwrap();
/// assert_eq!(cookie.value(), "");
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_session_cookie(jar: CookieJar, domain: String) -> CookieJar {
    jar.add(session_cookie(String::new(), domain, Duration::ZERO))
}
