//! Service context - dependency container for the foundation services
//!
//! Holds one foundation service per entity, all sharing the same clock,
//! logger, and recency window.

use std::sync::Arc;
use std::time::Duration;

use agora_common::DEFAULT_RECENCY_WINDOW_SECS;
use agora_core::{
    Comment, DateTimeBroker, Group, GroupMembership, GroupPost, LoggingBroker, Post,
    PostImpression, Profile, StorageBroker,
};

use super::error::{ContextError, ContextResult};
use super::foundation::FoundationService;

pub type PostService = FoundationService<Post>;
pub type GroupService = FoundationService<Group>;
pub type GroupPostService = FoundationService<GroupPost>;
pub type CommentService = FoundationService<Comment>;
pub type ProfileService = FoundationService<Profile>;
pub type GroupMembershipService = FoundationService<GroupMembership>;
pub type PostImpressionService = FoundationService<PostImpression>;

/// Storage that can persist every entity
///
/// Implemented automatically for any broker that stores all seven.
pub trait SocialStorageBroker:
    StorageBroker<Post>
    + StorageBroker<Group>
    + StorageBroker<GroupPost>
    + StorageBroker<Comment>
    + StorageBroker<Profile>
    + StorageBroker<GroupMembership>
    + StorageBroker<PostImpression>
{
}

impl<T> SocialStorageBroker for T where
    T: StorageBroker<Post>
        + StorageBroker<Group>
        + StorageBroker<GroupPost>
        + StorageBroker<Comment>
        + StorageBroker<Profile>
        + StorageBroker<GroupMembership>
        + StorageBroker<PostImpression>
{
}

/// Service context containing every foundation service
#[derive(Clone)]
pub struct ServiceContext {
    posts: Arc<PostService>,
    groups: Arc<GroupService>,
    group_posts: Arc<GroupPostService>,
    comments: Arc<CommentService>,
    profiles: Arc<ProfileService>,
    group_memberships: Arc<GroupMembershipService>,
    post_impressions: Arc<PostImpressionService>,
}

impl ServiceContext {
    /// Build every service over one storage broker
    pub fn new<S>(
        storage: Arc<S>,
        date_time_broker: Arc<dyn DateTimeBroker>,
        logging_broker: Arc<dyn LoggingBroker>,
        recency_window: Duration,
    ) -> Self
    where
        S: SocialStorageBroker + 'static,
    {
        Self {
            posts: Arc::new(FoundationService::<Post>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            groups: Arc::new(FoundationService::<Group>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            group_posts: Arc::new(FoundationService::<GroupPost>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            comments: Arc::new(FoundationService::<Comment>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            profiles: Arc::new(FoundationService::<Profile>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            group_memberships: Arc::new(FoundationService::<GroupMembership>::new(
                storage.clone(),
                date_time_broker.clone(),
                logging_broker.clone(),
                recency_window,
            )),
            post_impressions: Arc::new(FoundationService::<PostImpression>::new(
                storage,
                date_time_broker,
                logging_broker,
                recency_window,
            )),
        }
    }

    pub fn posts(&self) -> &PostService {
        &self.posts
    }

    pub fn groups(&self) -> &GroupService {
        &self.groups
    }

    pub fn group_posts(&self) -> &GroupPostService {
        &self.group_posts
    }

    pub fn comments(&self) -> &CommentService {
        &self.comments
    }

    pub fn profiles(&self) -> &ProfileService {
        &self.profiles
    }

    pub fn group_memberships(&self) -> &GroupMembershipService {
        &self.group_memberships
    }

    pub fn post_impressions(&self) -> &PostImpressionService {
        &self.post_impressions
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("services", &"...")
            .finish()
    }
}

/// Builder for creating a ServiceContext
pub struct ServiceContextBuilder<S> {
    storage: Option<Arc<S>>,
    date_time_broker: Option<Arc<dyn DateTimeBroker>>,
    logging_broker: Option<Arc<dyn LoggingBroker>>,
    recency_window: Duration,
}

impl<S: SocialStorageBroker + 'static> ServiceContextBuilder<S> {
    pub fn new() -> Self {
        Self {
            storage: None,
            date_time_broker: None,
            logging_broker: None,
            recency_window: Duration::from_secs(DEFAULT_RECENCY_WINDOW_SECS),
        }
    }

    pub fn storage(mut self, storage: Arc<S>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn date_time_broker(mut self, broker: Arc<dyn DateTimeBroker>) -> Self {
        self.date_time_broker = Some(broker);
        self
    }

    pub fn logging_broker(mut self, broker: Arc<dyn LoggingBroker>) -> Self {
        self.logging_broker = Some(broker);
        self
    }

    pub fn recency_window(mut self, window: Duration) -> Self {
        self.recency_window = window;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ContextError::MissingDependency` if a broker was not supplied
    pub fn build(self) -> ContextResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.storage
                .ok_or(ContextError::MissingDependency("storage"))?,
            self.date_time_broker
                .ok_or(ContextError::MissingDependency("date_time_broker"))?,
            self.logging_broker
                .ok_or(ContextError::MissingDependency("logging_broker"))?,
            self.recency_window,
        ))
    }
}

impl<S: SocialStorageBroker + 'static> Default for ServiceContextBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
