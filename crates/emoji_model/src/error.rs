//! Error types for emoji configuration

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid emoji config: {0}")]
    InvalidConfig(String),

    #[error("Invalid emoji entry '{name}': {reason}")]
    InvalidEmoji { name: String, reason: String },

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
