//! In-memory storage broker
//!
//! Backs the server when no database is configured and drives the HTTP
//! tests. Keys are unique per table and rows come back in insertion order.
//! Foreign keys are not enforced.

use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use agora_core::{
    Comment, Entity, Group, GroupMembership, GroupPost, Post, PostImpression, Profile,
    StorageBroker, StorageError, StorageResult,
};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

/// One entity's rows, keyed by identifier
struct Table<E: Entity> {
    rows: DashMap<E::Id, (u64, E)>,
    sequence: AtomicU64,
}

impl<E> Table<E>
where
    E: Entity,
    E::Id: Hash + Eq,
{
    fn new() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn insert(&self, entity: &E) -> StorageResult<E> {
        match self.rows.entry(entity.id()) {
            Entry::Occupied(occupied) => Err(StorageError::duplicate_key(format!(
                "{} {} already exists",
                E::NAME,
                occupied.key()
            ))),
            Entry::Vacant(vacant) => {
                let position = self.sequence.fetch_add(1, Ordering::Relaxed);
                vacant.insert((position, entity.clone()));
                debug!(entity = E::NAME, id = %entity.id(), "Row inserted");
                Ok(entity.clone())
            }
        }
    }

    fn select_all(&self) -> Vec<E> {
        let mut rows: Vec<(u64, E)> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|(position, _)| *position);
        rows.into_iter().map(|(_, entity)| entity).collect()
    }

    fn select_by_id(&self, id: &E::Id) -> Option<E> {
        self.rows.get(id).map(|row| row.value().1.clone())
    }

    fn update(&self, entity: &E) -> StorageResult<E> {
        let mut row = self
            .rows
            .get_mut(&entity.id())
            .ok_or_else(|| vanished::<E>(&entity.id()))?;
        row.1 = entity.clone();
        Ok(entity.clone())
    }

    fn delete(&self, entity: &E) -> StorageResult<E> {
        self.rows
            .remove(&entity.id())
            .map(|(_, (_, removed))| removed)
            .ok_or_else(|| vanished::<E>(&entity.id()))
    }
}

fn vanished<E: Entity>(id: &E::Id) -> StorageError {
    StorageError::concurrency_conflict(format!("{} {id} changed concurrently", E::NAME))
}

/// In-memory implementation of every StorageBroker
pub struct InMemoryStorageBroker {
    posts: Table<Post>,
    groups: Table<Group>,
    group_posts: Table<GroupPost>,
    comments: Table<Comment>,
    profiles: Table<Profile>,
    group_memberships: Table<GroupMembership>,
    post_impressions: Table<PostImpression>,
}

impl InMemoryStorageBroker {
    pub fn new() -> Self {
        Self {
            posts: Table::new(),
            groups: Table::new(),
            group_posts: Table::new(),
            comments: Table::new(),
            profiles: Table::new(),
            group_memberships: Table::new(),
            post_impressions: Table::new(),
        }
    }
}

impl std::fmt::Debug for InMemoryStorageBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStorageBroker")
            .field("posts", &self.posts.rows.len())
            .field("groups", &self.groups.rows.len())
            .field("group_posts", &self.group_posts.rows.len())
            .field("comments", &self.comments.rows.len())
            .field("profiles", &self.profiles.rows.len())
            .field("group_memberships", &self.group_memberships.rows.len())
            .field("post_impressions", &self.post_impressions.rows.len())
            .finish()
    }
}

impl Default for InMemoryStorageBroker {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! memory_storage {
    ($entity:ty, $table:ident) => {
        #[async_trait]
        impl StorageBroker<$entity> for InMemoryStorageBroker {
            async fn insert(&self, entity: &$entity) -> StorageResult<$entity> {
                self.$table.insert(entity)
            }

            async fn select_all(&self) -> StorageResult<Vec<$entity>> {
                Ok(self.$table.select_all())
            }

            async fn select_by_id(
                &self,
                id: &<$entity as Entity>::Id,
            ) -> StorageResult<Option<$entity>> {
                Ok(self.$table.select_by_id(id))
            }

            async fn update(&self, entity: &$entity) -> StorageResult<$entity> {
                self.$table.update(entity)
            }

            async fn delete(&self, entity: &$entity) -> StorageResult<$entity> {
                self.$table.delete(entity)
            }
        }
    };
}

memory_storage!(Post, posts);
memory_storage!(Group, groups);
memory_storage!(GroupPost, group_posts);
memory_storage!(Comment, comments);
memory_storage!(Profile, profiles);
memory_storage!(GroupMembership, group_memberships);
memory_storage!(PostImpression, post_impressions);
