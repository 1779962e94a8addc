//! Loading and saving emoji configuration files

use crate::Result;
use emoji_model::EmojiConfig;
use std::path::Path;

/// Read and validate a configuration file
pub fn read_config_file(path: &Path) -> Result<EmojiConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(EmojiConfig::from_json(&content)?)
}

/// Load a configuration file, or the built-in defaults if the file is
/// missing or invalid
pub fn load_config_file(path: &Path) -> EmojiConfig {
    if !path.exists() {
        tracing::debug!("No emoji config at {:?}, using defaults", path);
        return EmojiConfig::default_config();
    }

    match read_config_file(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load emoji config, using defaults: {}", e);
            EmojiConfig::default_config()
        }
    }
}

/// Write a configuration file, creating parent directories as needed
pub fn save_config_file(path: &Path, config: &EmojiConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, config.to_json()?)?;
    Ok(())
}
