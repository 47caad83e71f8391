//! `POST /api/login`: forward credentials, re-issue the backend's session
//! cookie on our own origin.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::backend::types::{ErrorBody, LoginRequest};
use crate::backend::{paths, BackendResponse};
use crate::config::SessionConfig;
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::session::{parse_set_cookie, session_cookie};

/// Build the browser cookie from the backend's `Set-Cookie` header.
pub(crate) fn session_from(
    response: &BackendResponse,
    config: &SessionConfig,
) -> Result<Cookie<'static>, ApiError> {
    let header = response
        .set_cookie
        .as_deref()
        .ok_or_else(|| ApiError::unauthorized("Something went wrong getting cookie"))?;

    let (name, value) = parse_set_cookie(header)
        .ok_or_else(|| ApiError::unauthorized("Something went wrong setting cookie"))?;

    Ok(session_cookie(name, value, config))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Response), ApiError> {
    let Json(request) = payload?;

    let response = state
        .backend
        .post_json(paths::LOGIN, &request, HeaderMap::new())
        .await?;

    if !response.is_success() {
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| "An error occurred while logging in.".to_string());
        tracing::info!(status = %response.status, "Login rejected by backend");
        return Err(ApiError::unauthorized(message));
    }

    let cookie = session_from(&response, &state.config.session)?;
    let body = relay(&response)?;

    Ok((jar.add(cookie), body))
}
