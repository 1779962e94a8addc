//! Error types for the host adapter

use crate::EditorId;
use emoji_model::AssetRef;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("Editor not found: {0}")]
    EditorNotFound(EditorId),

    #[error("Asset not found: {0}")]
    AssetNotFound(AssetRef),

    #[error("Edit error: {0}")]
    Edit(#[from] edit_engine::EditError),

    #[error("Emoji config error: {0}")]
    Config(#[from] emoji_model::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HostError>;
