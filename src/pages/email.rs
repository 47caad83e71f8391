//! Shopping list email page.
//!
//! Needs four independent backend calls. Only enabled extra items can be
//! put on a list, so disabled ones are dropped here.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::backend::types::{
    enabled_items, AislesResponse, EmailsResponse, ExtraItem, ExtraItemsResponse, Meal,
    MealsResponse,
};
use crate::backend::paths;
use crate::http::response::{ensure_ok, PageError};
use crate::http::server::AppState;
use crate::pages::resolve_emails;
use crate::session::token_headers;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    pub all_meals: Vec<Meal>,
    pub all_emails: Vec<String>,
    pub all_extra_items: Vec<ExtraItem>,
    pub aisles: Vec<String>,
}

pub async fn load(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<EmailData>, PageError> {
    let headers = token_headers(&jar);

    let (meals, items, emails, aisles) = tokio::join!(
        state.backend.get(paths::MEALS, headers.clone()),
        state.backend.get(paths::ITEMS, headers.clone()),
        state.backend.get(paths::EMAILS, headers.clone()),
        state.backend.get(paths::AISLES, headers),
    );
    let (meals, items, emails, aisles) = (meals?, items?, emails?, aisles?);

    ensure_ok(&[
        (&meals, "Failed to fetch meals"),
        (&items, "Failed to fetch extra items"),
        (&emails, "Failed to fetch emails"),
        (&aisles, "Failed to fetch aisles"),
    ])?;

    let meals: MealsResponse = meals.json()?;
    let items: ExtraItemsResponse = items.json()?;
    let emails: EmailsResponse = emails.json()?;
    let aisles: AislesResponse = aisles.json()?;

    Ok(Json(EmailData {
        all_meals: meals.all_meals,
        all_emails: resolve_emails(emails.emails, &state.config.emails.fallback),
        all_extra_items: enabled_items(items.all_items),
        aisles: aisles.aisles,
    }))
}
