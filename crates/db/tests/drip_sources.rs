//! Integration tests for the PostgreSQL drip sources driving the resolver.

mod common;

use assert_matches::assert_matches;
use common::{
    day, insert_batch, insert_course, insert_enrollment, insert_student, seed_five_topic_course,
    utc,
};
use drip_core::drip::{UnlockReason, UnlockResolver, UnnumberedTopicPolicy};
use drip_core::error::CoreError;
use drip_core::holiday::HolidayCache;
use drip_db::repositories::{EnrollmentRepo, HolidayRepo, TopicRepo};
use drip_db::PgDripSources;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn enrollment_lookup_joins_batch_start(pool: PgPool) {
    let (course_id, _) = seed_five_topic_course(&pool).await;
    let other_course = insert_course(&pool, "Other").await;
    let student = insert_student(&pool, "ada@example.com").await;
    let batch = insert_batch(&pool, course_id, Some(utc(2023, 12, 28))).await;
    insert_enrollment(&pool, student, course_id, batch, utc(2024, 1, 1)).await;

    let found = EnrollmentRepo::find_active(&pool, student, course_id)
        .await
        .unwrap()
        .expect("enrollment exists");
    assert_eq!(found.batch_id, batch);
    assert_eq!(found.batch_start_date, Some(utc(2023, 12, 28)));

    assert!(EnrollmentRepo::find_active(&pool, student, other_course)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn resolves_around_holiday_end_to_end(pool: PgPool) {
    let (course_id, topics) = seed_five_topic_course(&pool).await;
    let student = insert_student(&pool, "grace@example.com").await;
    let batch = insert_batch(&pool, course_id, Some(utc(2024, 1, 1))).await;
    insert_enrollment(&pool, student, course_id, batch, utc(2024, 1, 1)).await;
    TopicRepo::assign_unlock_order(&pool, course_id).await.unwrap();
    HolidayRepo::upsert(&pool, day(2024, 1, 3), "Office closed").await.unwrap();

    let cache = HolidayCache::new();
    let sources = PgDripSources::new(&pool, &cache);
    let resolver =
        UnlockResolver::new(&sources, &sources, &sources, UnnumberedTopicPolicy::default());

    let set = resolver.resolve(student, course_id, day(2024, 1, 5)).await.unwrap();
    assert_eq!(set.reason, UnlockReason::Ok);
    assert_eq!(set.unlocked_count, 4);
    let mut expected = topics[..4].to_vec();
    expected.sort_unstable();
    assert_eq!(set.unlocked_topic_ids, expected);
    assert!(cache.is_populated().await);
}

#[sqlx::test(migrations = "./migrations")]
async fn earlier_batch_start_pulls_reference_back(pool: PgPool) {
    let (course_id, _) = seed_five_topic_course(&pool).await;
    let student = insert_student(&pool, "late@example.com").await;
    // Batch started Monday; student joined Wednesday.
    let batch = insert_batch(&pool, course_id, Some(utc(2024, 1, 1))).await;
    insert_enrollment(&pool, student, course_id, batch, utc(2024, 1, 3)).await;
    TopicRepo::assign_unlock_order(&pool, course_id).await.unwrap();

    let cache = HolidayCache::new();
    let sources = PgDripSources::new(&pool, &cache);
    let resolver =
        UnlockResolver::new(&sources, &sources, &sources, UnnumberedTopicPolicy::default());

    let set = resolver.resolve(student, course_id, day(2024, 1, 3)).await.unwrap();
    assert_eq!(set.unlocked_count, 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn cleared_course_resolves_to_no_drip(pool: PgPool) {
    let (course_id, _) = seed_five_topic_course(&pool).await;
    let student = insert_student(&pool, "ops@example.com").await;
    let batch = insert_batch(&pool, course_id, None).await;
    insert_enrollment(&pool, student, course_id, batch, utc(2024, 1, 1)).await;
    TopicRepo::assign_unlock_order(&pool, course_id).await.unwrap();
    TopicRepo::clear_unlock_order(&pool, course_id).await.unwrap();

    let cache = HolidayCache::new();
    let sources = PgDripSources::new(&pool, &cache);
    let resolver =
        UnlockResolver::new(&sources, &sources, &sources, UnnumberedTopicPolicy::default());

    let set = resolver.resolve(student, course_id, day(2024, 1, 1)).await.unwrap();
    assert_eq!(set.reason, UnlockReason::NoDripConfigured);
    assert_eq!(set.unlocked_topic_ids.len(), 5);
    assert!(!cache.is_populated().await);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_student_is_not_found(pool: PgPool) {
    let (course_id, _) = seed_five_topic_course(&pool).await;

    let cache = HolidayCache::new();
    let sources = PgDripSources::new(&pool, &cache);
    let resolver =
        UnlockResolver::new(&sources, &sources, &sources, UnnumberedTopicPolicy::default());

    let err = resolver.resolve(12_345, course_id, day(2024, 1, 1)).await.unwrap_err();
    assert_matches!(err, CoreError::NotFound { entity: "Student", .. });
}
