use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::api::checked_json;
use crate::backend::paths;
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::session::token_headers;

/// `POST /api/update`: enable or disable meals.
pub async fn update_meals(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ApiError> {
    let updates = checked_json(&body)?;
    tracing::debug!(count = updates.as_array().map_or(0, Vec::len), "Forwarding meal updates");

    let response = state
        .backend
        .post_raw(paths::UPDATE, body, token_headers(&jar))
        .await?;
    relay(&response)
}

/// `POST /api/items/update`: add, rename or remove extra items.
pub async fn update_items(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ApiError> {
    let updates = checked_json(&body)?;
    tracing::debug!(
        count = updates.as_array().map_or(0, Vec::len),
        "Forwarding extra item updates"
    );

    let response = state
        .backend
        .post_raw(paths::ITEMS_UPDATE, body, token_headers(&jar))
        .await?;
    relay(&response)
}
