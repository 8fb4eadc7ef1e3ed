//! Production brokers that live outside storage: the system clock and tracing-backed logging

mod date_time;
mod logging;

pub use date_time::SystemDateTimeBroker;
pub use logging::TracingLoggingBroker;
