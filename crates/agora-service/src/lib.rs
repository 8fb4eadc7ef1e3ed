//! # agora-service
//!
//! Application layer: the foundation services with their validation engine
//! and exception mapper, plus the clock and logging brokers.

pub mod brokers;
pub mod services;

pub use brokers::{SystemDateTimeBroker, TracingLoggingBroker};
pub use services::{
    ContextError, FoundationService, ServiceContext, ServiceContextBuilder, SocialStorageBroker,
    ValidationEngine,
};
