//! Test fixtures and data generators
//!
//! Each builder stamps the record with the current time so it passes the
//! recency check on add.

use std::sync::atomic::{AtomicU64, Ordering};

use agora_core::{
    Comment, Group, GroupMembership, GroupPost, GroupStatus, Impression, Post, PostImpression,
    Profile,
};
use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A moment shortly after `created`, used as the update date of a modification
pub fn later(created: DateTime<Utc>) -> DateTime<Utc> {
    created + TimeDelta::seconds(1)
}

pub fn profile() -> Profile {
    let suffix = unique_suffix();
    let now = Utc::now();
    Profile {
        id: Uuid::new_v4(),
        name: format!("Test User {suffix}"),
        username: format!("testuser{suffix}"),
        email: format!("test{suffix}@example.com"),
        created_date: now,
        updated_date: now,
    }
}

pub fn post(author: &Profile) -> Post {
    Post::new(
        Uuid::new_v4(),
        format!("post number {}", unique_suffix()),
        author.username.clone(),
        Utc::now(),
    )
}

pub fn group() -> Group {
    let now = Utc::now();
    Group {
        id: Uuid::new_v4(),
        name: format!("group {}", unique_suffix()),
        description: "integration test group".to_string(),
        status: GroupStatus::Active,
        created_date: now,
        updated_date: now,
    }
}

pub fn group_post(group: &Group, post: &Post) -> GroupPost {
    let now = Utc::now();
    GroupPost {
        group_id: group.id,
        post_id: post.id,
        created_date: now,
        updated_date: now,
    }
}

pub fn comment(post: &Post) -> Comment {
    let now = Utc::now();
    Comment {
        id: Uuid::new_v4(),
        content: format!("comment {}", unique_suffix()),
        post_id: post.id,
        created_date: now,
        updated_date: now,
    }
}

pub fn group_membership(group: &Group, profile: &Profile) -> GroupMembership {
    let now = Utc::now();
    GroupMembership {
        id: Uuid::new_v4(),
        group_id: group.id,
        profile_id: profile.id,
        membership_date: now,
        created_date: now,
        updated_date: now,
    }
}

pub fn post_impression(post: &Post, profile: &Profile, impression: Impression) -> PostImpression {
    let now = Utc::now();
    PostImpression {
        post_id: post.id,
        profile_id: profile.id,
        impression,
        created_date: now,
        updated_date: now,
    }
}
