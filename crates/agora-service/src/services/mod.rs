//! Foundation services
//!
//! A single generic [`FoundationService`] validates, persists, and maps the
//! failures of every entity. The [`ServiceContext`] holds one per entity.

pub mod context;
pub mod error;
pub mod exceptions;
pub mod foundation;
pub mod validation;

#[cfg(test)]
mod tests;

pub use context::{
    CommentService, GroupMembershipService, GroupPostService, GroupService, PostImpressionService,
    PostService, ProfileService, ServiceContext, ServiceContextBuilder, SocialStorageBroker,
};
pub use error::{ContextError, ContextResult};
pub use exceptions::ExceptionMapper;
pub use foundation::FoundationService;
pub use validation::{ValidationEngine, WriteKind};
