//! Model -> entity mappers
//!
//! Enum columns are stored as integers; a value outside the known range is
//! reported as an unexpected storage failure rather than silently defaulted.

mod comment;
mod group;
mod group_membership;
mod group_post;
mod post;
mod post_impression;
mod profile;
