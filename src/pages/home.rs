//! Home page: meal collection, this month's calendar and email recipients.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::backend::types::{CalendarResponse, EmailsResponse, Meal, MealsResponse};
use crate::backend::paths;
use crate::http::response::{ensure_ok, PageError};
use crate::http::server::AppState;
use crate::pages::resolve_emails;
use crate::session::token_headers;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub all_meals: Vec<Meal>,
    pub all_calendars: CalendarResponse,
    pub all_emails: Vec<String>,
}

pub async fn load(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<HomeData>, PageError> {
    let headers = token_headers(&jar);

    let (meals, calendar, emails) = tokio::join!(
        state.backend.get(paths::MEALS, headers.clone()),
        state.backend.get(paths::CALENDAR, headers.clone()),
        state.backend.get(paths::EMAILS, headers),
    );
    let (meals, calendar, emails) = (meals?, calendar?, emails?);

    ensure_ok(&[
        (&meals, "Failed to fetch meals"),
        (&calendar, "Failed to fetch calendar"),
        (&emails, "Failed to fetch emails"),
    ])?;

    let meals: MealsResponse = meals.json()?;
    let emails: EmailsResponse = emails.json()?;

    Ok(Json(HomeData {
        all_meals: meals.all_meals,
        all_calendars: calendar.json()?,
        all_emails: resolve_emails(emails.emails, &state.config.emails.fallback),
    }))
}
