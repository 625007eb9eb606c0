#![allow(dead_code)]

//! Test infrastructure for bday-server API tests

use bday_core::{
    BirthdayCalculator, BirthdayService, FixedClock, LeapDayPolicy, RecordStore,
};
use bday_db::SqliteRecordStore;
use bday_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Create AppState backed by an in-memory SQLite database, pinned to `today`
pub async fn create_test_app_state(today: NaiveDate) -> AppState {
    let pool = bday_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    create_app_state_with_store(Arc::new(SqliteRecordStore::new(pool)), today)
}

pub fn create_app_state_with_store(store: Arc<dyn RecordStore>, today: NaiveDate) -> AppState {
    AppState::new(BirthdayService::new(
        store,
        Arc::new(FixedClock(today)),
        BirthdayCalculator::new(LeapDayPolicy::Feb28),
    ))
}

pub fn put_hello(username: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/hello/{}", username))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
