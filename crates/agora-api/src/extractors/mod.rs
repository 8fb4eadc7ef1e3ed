//! Axum extractors for request handling
//!
//! Wrap axum's JSON and path extractors so rejections come back as
//! [`ApiError`](crate::response::ApiError) bodies.

mod json;
mod path;

pub use json::ApiJson;
pub use path::{ApiPath, GroupPostPath, PostImpressionPath};
