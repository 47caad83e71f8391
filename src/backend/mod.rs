//! Backend API access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → session::token_headers (Cookie: token=...)
//!     → client.rs (reqwest call against base URL)
//!     → BackendResponse (status, content type, Set-Cookie, body)
//!     → types.rs DTOs when the handler needs typed JSON
//! ```

pub mod client;
pub mod types;

pub use client::{BackendClient, BackendError, BackendResponse};

/// Backend paths.
pub mod paths {
    pub const MEALS: &str = "/api/meals";
    pub const CALENDAR: &str = "/api/calendar";
    pub const ITEMS: &str = "/api/items";
    pub const AISLES: &str = "/api/aisles";
    pub const EMAILS: &str = "/api/emails";
    pub const EMAIL: &str = "/api/email";
    pub const UPDATE: &str = "/api/update";
    pub const ITEMS_UPDATE: &str = "/api/items/update";
    pub const LOGIN: &str = "/api/login";
}
