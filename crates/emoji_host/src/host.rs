//! Emoji host - configuration and editor sessions
//!
//! The host owns the current emoji registry and every open editor. Pushing
//! new configuration builds a fresh registry and hands it to all editors;
//! their buffers are left exactly as they were.

use crate::{read_config_file, HostError, Result};
use edit_engine::{EditCommand, EditEngine};
use emoji_model::{EmojiConfig, EmojiRegistry, RichText};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// Identifier of an open editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorId(Uuid);

impl EditorId {
    /// Create a new random editor ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EditorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EditorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options for opening an editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorOptions {
    /// Maximum number of units, or unlimited
    pub max_length: Option<usize>,
    /// Whether line breaks are accepted
    pub multiline: bool,
    /// Initial plain text
    pub default_value: Option<String>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            max_length: None,
            multiline: true,
            default_value: None,
        }
    }
}

impl EditorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn single_line(mut self) -> Self {
        self.multiline = false;
        self
    }

    pub fn default_value(mut self, text: impl Into<String>) -> Self {
        self.default_value = Some(text.into());
        self
    }
}

/// Owner of the emoji configuration and open editors
#[derive(Debug)]
pub struct EmojiHost {
    config: EmojiConfig,
    registry: Arc<EmojiRegistry>,
    editors: HashMap<EditorId, EditEngine>,
}

impl EmojiHost {
    /// Create a host with a validated configuration
    pub fn new(config: EmojiConfig) -> Result<Self> {
        config.validate()?;
        let registry = Arc::new(EmojiRegistry::register(&config));
        Ok(Self {
            config,
            registry,
            editors: HashMap::new(),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &EmojiConfig {
        &self.config
    }

    /// Current registry snapshot
    pub fn registry(&self) -> &Arc<EmojiRegistry> {
        &self.registry
    }

    /// Replace the configuration.
    ///
    /// Open editors keep their content but parse subsequent input with the
    /// new registry. An invalid configuration is rejected and the previous
    /// one stays in effect.
    pub fn configure(&mut self, config: EmojiConfig) -> Result<()> {
        config.validate()?;
        let registry = Arc::new(EmojiRegistry::register(&config));
        for editor in self.editors.values_mut() {
            editor.set_registry(Arc::clone(&registry));
        }

        tracing::info!(
            "Emoji configuration {} applied to {} editors",
            config.version,
            self.editors.len()
        );
        self.config = config;
        self.registry = registry;
        Ok(())
    }

    /// Replace the configuration from a JSON document
    pub fn configure_from_json(&mut self, json: &str) -> Result<()> {
        self.configure(EmojiConfig::from_json(json)?)
    }

    /// Replace the configuration from a file
    pub fn configure_from_file(&mut self, path: &Path) -> Result<()> {
        self.configure(read_config_file(path)?)
    }

    /// Open a new editor
    pub fn open_editor(&mut self, options: EditorOptions) -> EditorId {
        let mut editor = EditEngine::new(Arc::clone(&self.registry))
            .with_max_length(options.max_length)
            .with_multiline(options.multiline);
        if let Some(text) = &options.default_value {
            editor.replace_all(text);
        }

        let id = EditorId::new();
        tracing::debug!("Opened editor {}", id);
        self.editors.insert(id, editor);
        id
    }

    pub fn editor(&self, id: EditorId) -> Option<&EditEngine> {
        self.editors.get(&id)
    }

    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut EditEngine> {
        self.editors.get_mut(&id)
    }

    /// Close an editor, returning its final plain text
    pub fn close_editor(&mut self, id: EditorId) -> Option<String> {
        let editor = self.editors.remove(&id)?;
        tracing::debug!("Closed editor {}", id);
        Some(editor.plain_text())
    }

    /// Number of open editors
    pub fn editor_count(&self) -> usize {
        self.editors.len()
    }

    /// Run a command against an editor
    pub fn execute(&mut self, id: EditorId, command: &EditCommand) -> Result<()> {
        let editor = self
            .editors
            .get_mut(&id)
            .ok_or(HostError::EditorNotFound(id))?;
        Ok(editor.execute(command)?)
    }

    /// Plain text of an editor, for submission. The editor is not modified.
    pub fn submit(&self, id: EditorId) -> Result<String> {
        let editor = self.editors.get(&id).ok_or(HostError::EditorNotFound(id))?;
        let text = editor.plain_text();
        tracing::debug!("Submitted {} units from editor {}", editor.length(), id);
        Ok(text)
    }

    /// Parse text for read-only display with the current registry
    pub fn parse(&self, text: &str) -> RichText {
        shortcode::parse(text, &self.registry)
    }
}

impl Default for EmojiHost {
    fn default() -> Self {
        let config = EmojiConfig::default_config();
        let registry = Arc::new(EmojiRegistry::register(&config));
        Self {
            config,
            registry,
            editors: HashMap::new(),
        }
    }
}
