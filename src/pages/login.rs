//! Login page and its form action.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;
use axum::{Form, Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::login::session_from;
use crate::backend::paths;
use crate::backend::types::LoginRequest;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// The login page needs no backend data.
pub async fn load() -> Json<Value> {
    Json(json!({}))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Submit the login form: on success store the session cookie and go home.
pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let Form(form) = form?;
    let request = LoginRequest {
        password: form.password,
    };
    let response = state
        .backend
        .post_json(paths::LOGIN, &request, HeaderMap::new())
        .await?;

    if response.is_unauthorized() {
        tracing::info!("Login rejected by backend");
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let cookie = session_from(&response, &state.config.session)?;
    tracing::info!(cookie = cookie.name(), "Session established");

    Ok((jar.add(cookie), Redirect::to("/")))
}
