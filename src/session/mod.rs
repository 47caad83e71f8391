//! Session cookie handling.
//!
//! # Responsibilities
//! - Turn the browser's session cookie into backend auth headers
//! - Parse the `Set-Cookie` header the backend issues on login
//! - Build the cookie re-issued to the browser
//!
//! # Design Decisions
//! - The token is opaque: never validated or decoded here
//! - The re-issued cookie takes its name from the backend, not a constant

use axum::http::{header, HeaderMap, HeaderValue};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::config::SessionConfig;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Build the headers forwarded to the backend for this request.
///
/// Empty when the browser sent no session cookie.
pub fn token_headers(jar: &CookieJar) -> HeaderMap {
    token_headers_for(jar.get(SESSION_COOKIE).map(Cookie::value))
}

/// Build backend headers from an optional token value.
pub fn token_headers_for(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return headers;
    };

    if let Ok(value) = HeaderValue::from_str(&format!("{SESSION_COOKIE}={token}")) {
        headers.insert(header::COOKIE, value);
    }
    headers
}

/// Extract the name/value pair from a `Set-Cookie` header.
///
/// Returns `None` when either side of the first `=` is empty.
pub fn parse_set_cookie(header: &str) -> Option<(String, String)> {
    let name_value = header.split(';').next()?;
    let (name, value) = name_value.split_once('=')?;
    let (name, value) = (name.trim(), value.trim());

    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name.to_string(), value.to_string()))
}

/// The session cookie handed to the browser.
pub fn session_cookie(name: String, value: String, config: &SessionConfig) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(config.secure)
        .path("/")
        .max_age(time::Duration::seconds(config.cookie_max_age_secs))
        .build()
}
