//! Foundation service tests
//!
//! Every broker is a strict mock: a call nobody expected fails the test, and
//! `times(..)` expectations are verified when the service is dropped.

mod retrieve;

use std::sync::Arc;
use std::time::Duration;

use agora_core::{
    ClockError, Comment, DateTimeBroker, Entity, FoundationError, GroupPost, GroupPostId,
    LoggingBroker, Post, PostImpression, PostImpressionId, StorageBroker, StorageResult,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockall::mock;
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use super::foundation::FoundationService;

pub const WINDOW_SECS: i64 = 60;

macro_rules! mock_storage {
    ($name:ident, $entity:ident, $id:ident) => {
        mock! {
            pub $name {}

            #[async_trait]
            impl StorageBroker<$entity> for $name {
                async fn insert(&self, entity: &$entity) -> StorageResult<$entity>;
                async fn select_all(&self) -> StorageResult<Vec<$entity>>;
                async fn select_by_id(&self, id: &$id) -> StorageResult<Option<$entity>>;
                async fn update(&self, entity: &$entity) -> StorageResult<$entity>;
                async fn delete(&self, entity: &$entity) -> StorageResult<$entity>;
            }
        }
    };
}

mock_storage!(GroupPostStorage, GroupPost, GroupPostId);
mock_storage!(PostStorage, Post, Uuid);
mock_storage!(CommentStorage, Comment, Uuid);
mock_storage!(PostImpressionStorage, PostImpression, PostImpressionId);

mock! {
    pub Clock {}

    impl DateTimeBroker for Clock {
        fn current_date_time(&self) -> Result<DateTime<Utc>, ClockError>;
    }
}

mock! {
    pub Logger {}

    impl LoggingBroker for Logger {
        fn log_critical(&self, error: &FoundationError);
        fn log_error(&self, error: &FoundationError);
        fn log_warning(&self, error: &FoundationError);
    }
}

pub fn service<E, S>(storage: S, clock: MockClock, logger: MockLogger) -> FoundationService<E>
where
    E: Entity,
    S: StorageBroker<E> + 'static,
{
    FoundationService::new(
        Arc::new(storage),
        Arc::new(clock),
        Arc::new(logger),
        Duration::from_secs(WINDOW_SECS.unsigned_abs()),
    )
}

/// Clock that answers exactly once
pub fn clock_at(now: DateTime<Utc>) -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_current_date_time().times(1).returning(move || Ok(now));
    clock
}

pub fn expect_error_logged(logger: &mut MockLogger, expected: FoundationError) {
    logger
        .expect_log_error()
        .withf(move |error| *error == expected)
        .times(1)
        .return_const(());
}

pub fn expect_critical_logged(logger: &mut MockLogger, expected: FoundationError) {
    logger
        .expect_log_critical()
        .withf(move |error| *error == expected)
        .times(1)
        .return_const(());
}

/// Logger that fails the test on any call
pub fn silent_logger() -> MockLogger {
    MockLogger::new()
}

pub fn random_string() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(5..20);
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// A moment somewhere in the last ten years
pub fn random_date_time() -> DateTime<Utc> {
    let mut rng = rand::thread_rng();
    Utc::now() - TimeDelta::days(rng.gen_range(1..3650)) - TimeDelta::seconds(rng.gen_range(0..86_400))
}

/// Minutes far enough to leave the recency window
pub fn random_minutes_outside_window() -> i64 {
    rand::thread_rng().gen_range(2..600)
}

pub fn random_group_post(date: DateTime<Utc>) -> GroupPost {
    GroupPost {
        group_id: Uuid::new_v4(),
        post_id: Uuid::new_v4(),
        created_date: date,
        updated_date: date,
    }
}

/// A group post as a caller would submit it for modification
pub fn random_modify_group_post(now: DateTime<Utc>) -> GroupPost {
    let mut group_post = random_group_post(now);
    group_post.created_date = now - TimeDelta::minutes(random_minutes_outside_window());
    group_post
}

pub fn random_post(date: DateTime<Utc>) -> Post {
    Post {
        id: Uuid::new_v4(),
        content: random_string(),
        author: random_string(),
        created_date: date,
        updated_date: date,
    }
}

pub fn random_comment(date: DateTime<Utc>) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        content: random_string(),
        post_id: Uuid::new_v4(),
        created_date: date,
        updated_date: date,
    }
}

pub fn random_post_impression(date: DateTime<Utc>) -> PostImpression {
    PostImpression {
        post_id: Uuid::new_v4(),
        profile_id: Uuid::new_v4(),
        impression: agora_core::Impression::Love,
        created_date: date,
        updated_date: date,
    }
}
