use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use serde_json::Value;

use crate::api::checked_json;
use crate::backend::paths;
use crate::http::response::{relay, ApiError};
use crate::http::server::AppState;
use crate::session::token_headers;

fn list_len(request: &Value, field: &str) -> usize {
    request.get(field).and_then(Value::as_array).map_or(0, Vec::len)
}

/// `POST /api/email`: send the shopping list for the chosen meals.
pub async fn send_email(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request = checked_json(&body)?;

    tracing::info!(
        meals = list_len(&request, "meals"),
        recipients = list_len(&request, "emails"),
        extra_items = list_len(&request, "extraItems"),
        "Dispatching shopping list email"
    );

    let response = state
        .backend
        .post_raw(paths::EMAIL, body, token_headers(&jar))
        .await?;
    relay(&response)
}
