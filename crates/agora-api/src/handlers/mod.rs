//! Route handlers
//!
//! Entity endpoints share one generic handler set; see [`resources`].

pub mod health;
pub mod resources;
