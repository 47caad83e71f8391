//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all page loaders and passthroughs
//! - Wire up middleware (tracing, body limit, request ID)
//! - Share the backend client and configuration with handlers
//! - Serve until the shutdown signal fires

use std::io;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::backend::{BackendClient, BackendError};
use crate::config::FrontendConfig;
use crate::http::request::{request_id, UuidRequestId, X_REQUEST_ID};
use crate::pages;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<BackendClient>,
    pub config: Arc<FrontendConfig>,
}

/// HTTP server for the meals frontend.
pub struct HttpServer {
    router: Router,
    config: Arc<FrontendConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: FrontendConfig) -> Result<Self, BackendError> {
        let backend = Arc::new(BackendClient::new(&config.backend)?);
        let config = Arc::new(config);

        let state = AppState {
            backend,
            config: config.clone(),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &FrontendConfig, state: AppState) -> Router {
        Router::new()
            // Page data loaders
            .route("/", get(pages::home::load))
            .route("/login", get(pages::login::load).post(pages::login::action))
            .route("/update", get(pages::meals::load_update))
            .route("/enable", get(pages::meals::load_enable))
            .route("/extras", get(pages::extras::load))
            .route("/email", get(pages::email::load))
            // Passthroughs
            .route(
                "/api/calendar",
                get(api::calendar::calendar).post(api::calendar::calendar),
            )
            .route("/api/email", post(api::email::send_email))
            .route("/api/items/update", post(api::update::update_items))
            .route("/api/update", post(api::update::update_meals))
            .route("/api/login", post(api::login::login))
            .route("/health", get(api::health))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id(request),
                )
            }))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            backend = %self.config.backend.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }
}
