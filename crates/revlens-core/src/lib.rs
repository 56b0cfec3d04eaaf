//! Shared data model and configuration for the revlens review analysis
//! pipeline.

mod app_config;
mod config;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use types::RawReview;
