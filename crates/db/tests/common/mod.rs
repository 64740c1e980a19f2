//! Fixture inserts for tables the drip engine only reads.
#![allow(dead_code)]

use chrono::{NaiveDate, TimeZone, Utc};
use drip_core::types::{DbId, Timestamp};
use sqlx::PgPool;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

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

pub async fn insert_batch(pool: &PgPool, course_id: DbId, start: Option<Timestamp>) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO batches (course_id, name, start_date) VALUES ($1, 'Batch', $2) RETURNING id",
    )
    .bind(course_id)
    .bind(start)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_enrollment(
    pool: &PgPool,
    student_id: DbId,
    course_id: DbId,
    batch_id: DbId,
    enrolled_at: Timestamp,
) -> DbId {
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

/// A course with two modules (three topics, then two). Modules are inserted
/// in reverse so hierarchy order differs from insertion order.
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
