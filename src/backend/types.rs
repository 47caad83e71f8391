//! Backend DTOs.
//!
//! Field names follow the backend's JSON (PascalCase, with `ID` and `URL`
//! upper-cased). Update and email bodies are not modelled: they are forwarded
//! to the backend untouched.

use serde::{Deserialize, Serialize};

/// A meal, either from the collection (`Day == 0`) or placed on a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "Day")]
    pub day: u8,
    #[serde(rename = "Meal")]
    pub meal: String,
    #[serde(rename = "URL", default)]
    pub url: Option<String>,
    #[serde(rename = "Enabled", default)]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsResponse {
    #[serde(rename = "allMeals")]
    pub all_meals: Vec<Meal>,
}

/// One calendar month of planned meals, grouped by week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResponse {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "MealsEachWeek")]
    pub meals_each_week: Vec<Vec<Meal>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    #[serde(rename = "currMonthResponse", default)]
    pub curr_month_response: Option<MonthResponse>,
}

/// A grocery item that is not tied to a meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraItem {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Aisle")]
    pub aisle: String,
    #[serde(rename = "Enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraItemsResponse {
    #[serde(rename = "allItems")]
    pub all_items: Vec<ExtraItem>,
}

/// Keep only enabled items, preserving their order.
pub fn enabled_items(items: Vec<ExtraItem>) -> Vec<ExtraItem> {
    items.into_iter().filter(|item| item.enabled).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AislesResponse {
    pub aisles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailsResponse {
    #[serde(default)]
    pub emails: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// The `{"error": ...}` body the backend sends on failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The error text, if the backend sent a non-empty string.
    pub fn message(&self) -> Option<String> {
        match &self.error {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
