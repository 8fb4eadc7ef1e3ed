//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, ServerConfig,
    ValidationConfig, DEFAULT_RECENCY_WINDOW_SECS,
};
