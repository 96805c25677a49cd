// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use carbon_tracker::config::Config;
use carbon_tracker::db::LogStore;
use carbon_tracker::routes::create_router;
use carbon_tracker::AppState;
use std::sync::Arc;

/// Create a test app backed by an in-memory log store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        LogStore::new_in_memory(),
    ));

    (create_router(state.clone()), state)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless GET request.
#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Activity payload with the given date and quantities.
#[allow(dead_code)]
pub fn activity(
    date: &str,
    travel_km: f64,
    travel_mode: &str,
    electricity_kwh: f64,
    diet: &str,
) -> serde_json::Value {
    serde_json::json!({
        "date": date,
        "travelKm": travel_km,
        "travelMode": travel_mode,
        "electricityKwh": electricity_kwh,
        "diet": diet,
    })
}
