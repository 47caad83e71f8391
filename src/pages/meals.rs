//! Meal collection pages: `/update` edits meals, `/enable` toggles them.
//! Both need the same data.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use crate::backend::types::{Meal, MealsResponse};
use crate::backend::paths;
use crate::http::response::{ensure_ok, PageError};
use crate::http::server::AppState;
use crate::session::token_headers;

#[derive(Debug, Serialize)]
pub struct MealsData {
    pub meals: Vec<Meal>,
}

async fn load_meals(state: &AppState, jar: &CookieJar) -> Result<Json<MealsData>, PageError> {
    let response = state.backend.get(paths::MEALS, token_headers(jar)).await?;
    ensure_ok(&[(&response, "Failed to fetch meals")])?;

    let data: MealsResponse = response.json()?;
    Ok(Json(MealsData {
        meals: data.all_meals,
    }))
}

pub async fn load_update(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MealsData>, PageError> {
    load_meals(&state, &jar).await
}

pub async fn load_enable(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<MealsData>, PageError> {
    load_meals(&state, &jar).await
}
