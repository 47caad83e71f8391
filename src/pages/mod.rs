//! Page data loaders.
//!
//! Each loader fetches what its page needs from the backend, concurrently
//! where the calls are independent, and returns the view model the rendering
//! layer consumes.
//!
//! # Data Flow
//! ```text
//! GET /<page>
//!     → session::token_headers
//!     → tokio::join!(backend calls)
//!     → http::response::ensure_ok (401 → redirect, other → surfaced status)
//!     → typed JSON → view model
//! ```

pub mod email;
pub mod extras;
pub mod home;
pub mod login;
pub mod meals;

/// Pick the live email list, or the configured fallback when the backend
/// has none.
pub fn resolve_emails(live: Vec<String>, fallback: &[String]) -> Vec<String> {
    if live.is_empty() {
        fallback.to_vec()
    } else {
        live
    }
}
