#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use drip_core::drip::UnnumberedTopicPolicy;
use drip_core::types::{DbId, Timestamp};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use drip_api::config::ServerConfig;
use drip_api::router::build_app_router;
use drip_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        unnumbered_topics: UnnumberedTopicPolicy::Unlocked,
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a JSON array of IDs, sorted.
pub fn sorted_ids(value: &serde_json::Value) -> Vec<DbId> {
    let mut ids: Vec<DbId> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_i64().unwrap())
        .collect();
    ids.sort_unstable();
    ids
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Midday UTC, so the calendar day is unambiguous.
pub fn utc(y: i32, m: u32, d: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub async fn insert_course(pool: &PgPool, title: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO courses (title) VALUES ($1) RETURNING id")
        .bind(title)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_module(pool: &PgPool, course_id: DbId, sort_order: i32) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO course_modules (course_id, title, sort_order) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(course_id)
    .bind(format!("Module {sort_order}"))
    .bind(sort_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_topic(pool: &PgPool, module_id: DbId, sort_order: i32) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO topics (module_id, title, sort_order) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(module_id)
    .bind(format!("Topic {sort_order}"))
    .bind(sort_order)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_student(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO students (name, email) VALUES ($1, $2) RETURNING id")
        .bind(email)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Enroll a student in a fresh batch of the course.
pub async fn enroll(
    pool: &PgPool,
    student_id: DbId,
    course_id: DbId,
    batch_start: Option<Timestamp>,
    enrolled_at: Timestamp,
) -> DbId {
    let batch_id: DbId = sqlx::query_scalar(
        "INSERT INTO batches (course_id, name, start_date) VALUES ($1, 'Batch', $2) RETURNING id",
    )
    .bind(course_id)
    .bind(batch_start)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query_scalar(
        "INSERT INTO enrollments (student_id, course_id, batch_id, enrolled_at) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(student_id)
    .bind(course_id)
    .bind(batch_id)
    .bind(enrolled_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Two modules (three topics, then two), inserted out of hierarchy order.
///
/// Returns the course ID and topic IDs in hierarchy order.
pub async fn seed_five_topic_course(pool: &PgPool) -> (DbId, Vec<DbId>) {
    let course_id = insert_course(pool, "Rust Foundations").await;
    let second = insert_module(pool, course_id, 2).await;
    let first = insert_module(pool, course_id, 1).await;

    let t4 = insert_topic(pool, second, 1).await;
    let t5 = insert_topic(pool, second, 2).await;
    let t3 = insert_topic(pool, first, 3).await;
    let t1 = insert_topic(pool, first, 1).await;
    let t2 = insert_topic(pool, first, 2).await;

    (course_id, vec![t1, t2, t3, t4, t5])
}
