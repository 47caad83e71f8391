//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the backend base URL
//! - Validate value ranges (body limit > 0, fallback emails present)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrontendConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::FrontendConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("backend.base_url `{0}` is not a valid URL")]
    BaseUrl(String),

    #[error("backend.base_url `{0}` must use http or https")]
    BaseUrlScheme(String),

    #[error("emails.fallback must contain at least one address")]
    NoFallbackEmails,

    #[error("emails.fallback contains a blank entry")]
    BlankFallbackEmail,

    #[error("security.max_body_size must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.backend.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(_) => errors.push(ValidationError::BaseUrlScheme(
            config.backend.base_url.clone(),
        )),
        Err(_) => errors.push(ValidationError::BaseUrl(config.backend.base_url.clone())),
    }

    if config.emails.fallback.is_empty() {
        errors.push(ValidationError::NoFallbackEmails);
    } else if config.emails.fallback.iter().any(|e| e.trim().is_empty()) {
        errors.push(ValidationError::BlankFallbackEmail);
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
