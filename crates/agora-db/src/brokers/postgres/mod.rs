//! PostgreSQL storage broker
//!
//! One broker over one pool implements [`agora_core::StorageBroker`] for
//! every entity; each entity's queries live in their own module.

mod comment;
mod group;
mod group_membership;
mod group_post;
mod post;
mod post_impression;
mod profile;

use sqlx::PgPool;

/// PostgreSQL implementation of every StorageBroker
#[derive(Clone)]
pub struct PgStorageBroker {
    pool: PgPool,
}

impl PgStorageBroker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for PgStorageBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStorageBroker")
            .field("pool_size", &self.pool.size())
            .finish()
    }
}
