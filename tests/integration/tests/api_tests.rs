//! API Integration Tests
//!
//! Most tests run against in-memory storage. Tests that need PostgreSQL
//! return early unless `DATABASE_URL` is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use agora_core::{
    Comment, Group, GroupMembership, GroupPost, GroupStatus, Impression, Post, PostImpression,
    Profile,
};
use integration_tests::{assert_error, assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready_reports_memory_storage() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["storage"], "memory");
}

// ============================================================================
// Entity Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_profile_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let profile = profile();
    let path = format!("/api/v1/profiles/{}", profile.id);

    let response = server.post("/api/v1/profiles", &profile).await.unwrap();
    let created: Profile = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created, profile);

    let response = server.get(&path).await.unwrap();
    let found: Profile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found, profile);

    let mut renamed = profile.clone();
    renamed.name = "Renamed User".to_string();
    renamed.updated_date = later(profile.created_date);
    let response = server.put("/api/v1/profiles", &renamed).await.unwrap();
    let modified: Profile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(modified, renamed);

    let response = server.delete(&path).await.unwrap();
    let removed: Profile = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed, renamed);

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_social_graph_round_trip() {
    let server = TestServer::start().await.unwrap();

    let author = profile();
    let reader = profile();
    let post = post(&author);
    let group = group();

    for profile in [&author, &reader] {
        let response = server.post("/api/v1/profiles", profile).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }
    let response = server.post("/api/v1/posts", &post).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server.post("/api/v1/groups", &group).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let membership = group_membership(&group, &reader);
    let response = server
        .post("/api/v1/groupmemberships", &membership)
        .await
        .unwrap();
    let created: GroupMembership = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created, membership);

    let group_post = group_post(&group, &post);
    let response = server.post("/api/v1/groupposts", &group_post).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .get(&format!("/api/v1/groupposts/{}/{}", group.id, post.id))
        .await
        .unwrap();
    let found: GroupPost = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found, group_post);

    let comment = comment(&post);
    let response = server.post("/api/v1/comments", &comment).await.unwrap();
    let created: Comment = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.post_id, post.id);

    let impression = post_impression(&post, &reader, Impression::Love);
    let response = server.post("/api/v1/postimpressions", &impression).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut changed = impression.clone();
    changed.impression = Impression::Laugh;
    changed.updated_date = later(impression.created_date);
    let response = server.put("/api/v1/postimpressions", &changed).await.unwrap();
    let modified: PostImpression = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(modified.impression, Impression::Laugh);

    let response = server
        .delete(&format!("/api/v1/postimpressions/{}/{}", post.id, reader.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let server = TestServer::start().await.unwrap();
    let groups: Vec<Group> = (0..3).map(|_| group()).collect();

    for group in &groups {
        let response = server.post("/api/v1/groups", group).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/v1/groups").await.unwrap();
    let listed: Vec<Group> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed, groups);
}

#[tokio::test]
async fn test_group_status_defaults_to_active() {
    let server = TestServer::start().await.unwrap();
    let group = group();
    let mut body = serde_json::to_value(&group).unwrap();
    body.as_object_mut().unwrap().remove("status");

    let response = server.post("/api/v1/groups", &body).await.unwrap();
    let created: Group = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.status, GroupStatus::Active);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_null_entity_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.post("/api/v1/comments", &Value::Null).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert_eq!(error["message"], "Comment is null");
}

#[tokio::test]
async fn test_invalid_membership_reports_each_field() {
    let server = TestServer::start().await.unwrap();
    let mut membership = group_membership(&group(), &profile());
    membership.id = Uuid::nil();
    membership.group_id = Uuid::nil();

    let response = server
        .post("/api/v1/groupmemberships", &membership)
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();

    let details = error["details"].as_object().unwrap();
    assert_eq!(details.len(), 2);
    assert_eq!(details["Id"][0], "Id is required");
    assert_eq!(details["GroupId"][0], "Id is required");
}

#[tokio::test]
async fn test_stale_post_is_rejected() {
    let server = TestServer::start().await.unwrap();
    let mut post = post(&profile());
    post.created_date -= chrono::TimeDelta::hours(1);
    post.updated_date = post.created_date;

    let response = server.post("/api/v1/posts", &post).await.unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert_eq!(error["details"]["UpdatedDate"][0], "Date is not recent");
}

#[tokio::test]
async fn test_modify_unknown_post_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let mut post = post(&profile());
    post.updated_date = later(post.created_date);

    let response = server.put("/api/v1/posts", &post).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_duplicate_post_is_conflict() {
    let server = TestServer::start().await.unwrap();
    let post = post(&profile());

    server.post("/api/v1/posts", &post).await.unwrap();
    let response = server.post("/api/v1/posts", &post).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_with_nil_id_is_invalid() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .delete(&format!("/api/v1/posts/{}", Uuid::nil()))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
        .await
        .unwrap();
    assert_eq!(error["details"]["Id"][0], "Id is required");
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_comment_on_missing_post_is_foreign_key_error() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        return;
    };

    let orphan = comment(&post(&profile()));
    let response = server.post("/api/v1/comments", &orphan).await.unwrap();
    assert_error(
        response,
        StatusCode::BAD_REQUEST,
        "DEPENDENCY_VALIDATION_ERROR",
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_postgres_post_lifecycle() {
    let Some(server) = TestServer::start_postgres().await.unwrap() else {
        return;
    };

    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["storage"], "postgres");

    let author = profile();
    let response = server.post("/api/v1/profiles", &author).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let post: Post = post(&author);
    let response = server.post("/api/v1/posts", &post).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    let removed: Post = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed.id, post.id);
}
