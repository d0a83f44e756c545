//! Core types shared by the `kwsignal` workspace.
//!
//! Holds the aggregated [`KeywordSignal`] record, the competition grading
//! used by display consumers, and environment-driven configuration. Nothing
//! in this crate performs network I/O.

pub mod app_config;
pub mod competition;
pub mod config;
pub mod signal;

use thiserror::Error;

pub use app_config::{AppConfig, SearchAdSettings};
pub use competition::CompetitionLevel;
pub use config::{
    load_app_config, load_app_config_from_env, load_search_ad_settings_from_env,
};
pub use signal::{
    clean_phrase, find_seed_signal, KeywordSignal, KEYWORD_SIGNAL_SCHEMA_VERSION,
    MAX_SUGGESTIONS,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
