use agora_core::traits::ID_REQUIRED;
use agora_core::{
    DependencyFailure, FoundationError, PostImpressionId, StorageError, ValidationFailure,
    Violations,
};
use uuid::Uuid;

use super::*;

#[tokio::test]
async fn test_retrieve_all_returns_storage_contents() {
    let posts: Vec<Post> = (0..rand::thread_rng().gen_range(2..10))
        .map(|_| random_post(random_date_time()))
        .collect();
    let stored = posts.clone();

    let mut storage = MockPostStorage::new();
    storage
        .expect_select_all()
        .times(1)
        .returning(move || Ok(stored.clone()));

    let service = service::<Post, _>(storage, MockClock::new(), silent_logger());

    assert_eq!(service.retrieve_all().await, Ok(posts));
}

#[tokio::test]
async fn test_retrieve_all_connection_failure_is_critical() {
    let storage_error = StorageError::connection(random_string());
    let expected = FoundationError::Dependency {
        entity: "Post",
        source: DependencyFailure::FailedStorage {
            entity: "Post",
            source: storage_error.clone(),
        },
    };

    let mut storage = MockPostStorage::new();
    storage
        .expect_select_all()
        .times(1)
        .returning(move || Err(storage_error.clone()));

    let mut logger = MockLogger::new();
    expect_critical_logged(&mut logger, expected.clone());

    let service = service::<Post, _>(storage, MockClock::new(), logger);

    assert_eq!(service.retrieve_all().await, Err(expected));
}

#[tokio::test]
async fn test_retrieve_post_impression_by_id() {
    let stored = random_post_impression(random_date_time());
    let id = stored.id();
    let expected = stored.clone();

    let mut storage = MockPostImpressionStorage::new();
    storage
        .expect_select_by_id()
        .withf(move |candidate| *candidate == id)
        .times(1)
        .returning(move |_| Ok(Some(stored.clone())));

    let service = service::<PostImpression, _>(storage, MockClock::new(), silent_logger());

    assert_eq!(service.retrieve_by_id(id).await, Ok(expected));
}

#[tokio::test]
async fn test_retrieve_missing_post_impression_is_not_found() {
    let id = PostImpressionId::new(Uuid::new_v4(), Uuid::new_v4());
    let expected = FoundationError::Validation {
        entity: "PostImpression",
        source: ValidationFailure::NotFound {
            entity: "PostImpression",
            identifiers: vec![("PostId", id.post_id), ("ProfileId", id.profile_id)],
        },
    };

    let mut storage = MockPostImpressionStorage::new();
    storage
        .expect_select_by_id()
        .times(1)
        .returning(|_| Ok(None));

    let mut logger = MockLogger::new();
    expect_error_logged(&mut logger, expected.clone());

    let service = service::<PostImpression, _>(storage, MockClock::new(), logger);

    assert_eq!(service.retrieve_by_id(id).await, Err(expected));
}

#[tokio::test]
async fn test_retrieve_with_empty_id_never_reaches_storage() {
    let expected = FoundationError::Validation {
        entity: "Post",
        source: ValidationFailure::Invalid {
            entity: "Post",
            violations: Violations::new().with("Id", ID_REQUIRED),
        },
    };

    let mut logger = MockLogger::new();
    expect_error_logged(&mut logger, expected.clone());

    let service = service::<Post, _>(MockPostStorage::new(), MockClock::new(), logger);

    assert_eq!(service.retrieve_by_id(Uuid::nil()).await, Err(expected));
}
