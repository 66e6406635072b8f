//! Shared configuration for the palate workspace.

pub mod config;

pub use config::{load_app_config_from_env, AppConfig, ConfigError};
