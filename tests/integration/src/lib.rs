//! Integration test utilities for the agora server
//!
//! Spawns the real HTTP application on a local port and drives it
//! with `reqwest`.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
