//! `/api/calendar`: one month of planned meals.
//!
//! Missing or unparsable `year`/`month` fall back to the current month. Like
//! a browser's `parseInt`, a leading number is enough (`"2024x"` is 2024).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::backend::paths;
use crate::backend::types::{CalendarResponse, ErrorBody, MonthResponse};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::session::token_headers;

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub curr_month_response: MonthResponse,
    pub selected_year: i32,
    pub selected_month: u8,
}

/// Read the integer at the start of `raw`, ignoring whatever follows it.
fn leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let n: i64 = rest[..end].parse().ok()?;
    Some(if negative { -n } else { n })
}

/// Resolve the requested year and month against `today`.
pub fn select_month(query: &CalendarQuery, today: Date) -> (i32, u8) {
    let year = query
        .year
        .as_deref()
        .and_then(leading_int)
        .and_then(|y| i32::try_from(y).ok())
        .unwrap_or_else(|| today.year());

    let month = query
        .month
        .as_deref()
        .and_then(leading_int)
        .and_then(|m| u8::try_from(m).ok())
        .filter(|m| (1..=12).contains(m))
        .unwrap_or_else(|| u8::from(today.month()));

    (year, month)
}

pub async fn calendar(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarView>, ApiError> {
    let (year, month) = select_month(&query, OffsetDateTime::now_utc().date());

    let response = state
        .backend
        .get_with_query(
            paths::CALENDAR,
            &[("year", year.to_string()), ("month", month.to_string())],
            token_headers(&jar),
        )
        .await?;

    if !response.is_success() {
        let message = response
            .json::<ErrorBody>()
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| "An error occurred while fetching calendar data.".to_string());
        return Err(ApiError::Rejected {
            status: response.status,
            message,
        });
    }

    let data: CalendarResponse = response.json()?;
    let Some(curr_month_response) = data.curr_month_response else {
        return Err(ApiError::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "No calendar data found.".to_string(),
        });
    };

    Ok(Json(CalendarView {
        curr_month_response,
        selected_year: year,
        selected_month: month,
    }))
}
