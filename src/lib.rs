//! Meals frontend library.
//!
//! Server-side data layer for the meal-planning web app: page data loaders
//! and JSON passthroughs in front of the meals backend API.

pub mod api;
pub mod backend;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pages;
pub mod session;

pub use config::FrontendConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
