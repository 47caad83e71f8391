//! Page data loader tests against a mock backend.

use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

mod common;

use common::{start_frontend, start_frontend_with, start_mock_backend, CookieLog};

fn meals_body() -> Value {
    json!({
        "allMeals": [
            {"Day": 0, "Meal": "Lasagna", "URL": "https://example.com/lasagna", "Enabled": true},
            {"Day": 0, "Meal": "Tacos", "URL": null, "Enabled": false}
        ]
    })
}

fn items_body() -> Value {
    json!({
        "allItems": [
            {"ID": 4, "Name": "Bread", "Aisle": "Cheese & Bakery", "Enabled": true},
            {"ID": 2, "Name": "Ice", "Aisle": "16 & 17 (Freezer)", "Enabled": false},
            {"ID": 9, "Name": "Apples", "Aisle": "Produce", "Enabled": true}
        ]
    })
}

fn calendar_body() -> Value {
    json!({
        "currMonthResponse": {
            "Year": 2025,
            "Month": "March",
            "MealsEachWeek": [[{"Day": 1, "Meal": "Lasagna", "URL": null, "Enabled": true}]]
        }
    })
}

fn full_backend(log: CookieLog, emails: Value) -> Router {
    let logged = |log: CookieLog, body: Value| {
        move |headers: HeaderMap| {
            let log = log.clone();
            let body = body.clone();
            async move {
                log.record(&headers);
                Json(body)
            }
        }
    };

    Router::new()
        .route("/api/meals", get(logged(log.clone(), meals_body())))
        .route("/api/calendar", get(logged(log.clone(), calendar_body())))
        .route("/api/items", get(logged(log.clone(), items_body())))
        .route("/api/emails", get(logged(log.clone(), emails)))
        .route(
            "/api/aisles",
            get(logged(log, json!({"aisles": ["Produce", "Cheese & Bakery"]}))),
        )
}

#[tokio::test]
async fn test_home_assembles_view_model() {
    let log = CookieLog::default();
    let backend = start_mock_backend(full_backend(
        log.clone(),
        json!({"emails": ["cook@example.com"]}),
    ))
    .await;
    let frontend = start_frontend(backend).await;

    let res = frontend
        .client
        .get(frontend.url("/"))
        .header("cookie", "token=abc123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["allMeals"][0]["Meal"], "Lasagna");
    assert_eq!(body["allCalendars"]["currMonthResponse"]["Month"], "March");
    assert_eq!(body["allEmails"], json!(["cook@example.com"]));

    let seen = log.seen();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|c| c.as_deref() == Some("token=abc123")));
}

#[tokio::test]
async fn test_fallback_emails_when_backend_has_none() {
    let backend = start_mock_backend(full_backend(CookieLog::default(), json!({"emails": []}))).await;
    let frontend = start_frontend_with(backend, |config| {
        config.emails.fallback = vec!["a@example.com".into(), "b@example.com".into()];
    })
    .await;

    let body: Value = frontend
        .client
        .get(frontend.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["allEmails"], json!(["a@example.com", "b@example.com"]));
}

#[tokio::test]
async fn test_no_session_cookie_sends_no_cookie() {
    let log = CookieLog::default();
    let backend = start_mock_backend(full_backend(log.clone(), json!({"emails": []}))).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/enable")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["meals"].as_array().unwrap().len(), 2);

    assert_eq!(log.seen(), vec![None]);
}

#[tokio::test]
async fn test_email_page_keeps_only_enabled_items() {
    let backend = start_mock_backend(full_backend(
        CookieLog::default(),
        json!({"emails": ["cook@example.com"]}),
    ))
    .await;
    let frontend = start_frontend(backend).await;

    let body: Value = frontend
        .client
        .get(frontend.url("/email"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = body["allExtraItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["Name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Bread", "Apples"]);
    assert_eq!(body["aisles"], json!(["Produce", "Cheese & Bakery"]));
    assert_eq!(body["allMeals"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_extras_page_shows_every_item() {
    let backend = start_mock_backend(full_backend(CookieLog::default(), json!({"emails": []}))).await;
    let frontend = start_frontend(backend).await;

    let body: Value = frontend
        .client
        .get(frontend.url("/extras"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["extraItems"].as_array().unwrap().len(), 3);
    assert_eq!(body["aisles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unauthorized_redirects_to_login() {
    let router = Router::new()
        .route("/api/meals", get(|| async { Json(meals_body()) }))
        .route("/api/items", get(|| async { Json(items_body()) }))
        .route("/api/emails", get(|| async { Json(json!({"emails": []})) }))
        .route(
            "/api/aisles",
            get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))) }),
        );
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/email")).send().await.unwrap();
    assert_eq!(res.status(), 302);
    assert_eq!(res.headers().get("location").unwrap(), "/login");
}

#[tokio::test]
async fn test_backend_error_status_surfaced() {
    let router = Router::new()
        .route(
            "/api/items",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "database down") }),
        )
        .route("/api/aisles", get(|| async { Json(json!({"aisles": []})) }));
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/extras")).send().await.unwrap();
    assert_eq!(res.status(), 503);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Failed to fetch extra items");
}

#[tokio::test]
async fn test_update_page_surfaces_not_found() {
    let router = Router::new().route("/api/other", get(|| async { "unused" }));
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/update")).send().await.unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Failed to fetch meals");
}

#[tokio::test]
async fn test_unparsable_backend_json_is_internal_error() {
    let router = Router::new().route(
        "/api/meals",
        get(|| async { ([("content-type", "application/json")], "{oops") }),
    );
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/update")).send().await.unwrap();
    assert_eq!(res.status(), 500);
}

#[tokio::test]
async fn test_unreachable_backend_is_internal_error() {
    // Bind and drop a listener to get a port nothing listens on.
    let closed = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let frontend = start_frontend(closed).await;

    let res = frontend.client.get(frontend.url("/enable")).send().await.unwrap();
    assert_eq!(res.status(), 500);
}

#[tokio::test]
async fn test_login_page_needs_no_backend() {
    let backend = start_mock_backend(Router::new()).await;
    let frontend = start_frontend(backend).await;

    let res = frontend.client.get(frontend.url("/login")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.json::<Value>().await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_login_form_sets_cookie_and_redirects_home() {
    let router = Router::new().route(
        "/api/login",
        post(|Json(body): Json<Value>| async move {
            if body["password"] == "hunter2" {
                (
                    StatusCode::OK,
                    [("set-cookie", "token=abc123; Path=/; HttpOnly")],
                    Json(json!({"token": "abc123"})),
                )
            } else {
                (
                    StatusCode::UNAUTHORIZED,
                    [("x-login", "rejected")],
                    Json(json!({"error": "Invalid credentials"})),
                )
            }
        }),
    );
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend
        .client
        .post(frontend.url("/login"))
        .form(&[("password", "hunter2")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 303);
    assert_eq!(res.headers().get("location").unwrap(), "/");
    let cookie = res.headers().get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("token=abc123"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=2628000"));

    let res = frontend
        .client
        .post(frontend.url("/login"))
        .form(&[("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_form_without_cookie_fails() {
    let router = Router::new().route(
        "/api/login",
        post(|| async { Json(json!({"token": "abc123"})) }),
    );
    let backend = start_mock_backend(router).await;
    let frontend = start_frontend(backend).await;

    let res = frontend
        .client
        .post(frontend.url("/login"))
        .form(&[("password", "hunter2")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["message"], "Something went wrong getting cookie");
}

#[tokio::test]
async fn test_login_form_without_password_is_internal_error() {
    let backend = start_mock_backend(Router::new()).await;
    let frontend = start_frontend(backend).await;

    let res = frontend
        .client
        .post(frontend.url("/login"))
        .form(&[("username", "cook")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Request failed");
}
