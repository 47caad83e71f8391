//! Extra item editor. Shows every item, enabled or not, plus the aisles an
//! item can be filed under.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::backend::types::{AislesResponse, ExtraItem, ExtraItemsResponse};
use crate::backend::paths;
use crate::http::response::{ensure_ok, PageError};
use crate::http::server::AppState;
use crate::session::token_headers;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasData {
    pub extra_items: Vec<ExtraItem>,
    pub aisles: Vec<String>,
}

pub async fn load(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ExtrasData>, PageError> {
    let headers = token_headers(&jar);

    let (items, aisles) = tokio::join!(
        state.backend.get(paths::ITEMS, headers.clone()),
        state.backend.get(paths::AISLES, headers),
    );
    let (items, aisles) = (items?, aisles?);

    ensure_ok(&[
        (&items, "Failed to fetch extra items"),
        (&aisles, "Failed to fetch aisles"),
    ])?;

    let items: ExtraItemsResponse = items.json()?;
    let aisles: AislesResponse = aisles.json()?;

    Ok(Json(ExtrasData {
        extra_items: items.all_items,
        aisles: aisles.aisles,
    }))
}
