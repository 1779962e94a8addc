//! Host-supplied emoji configuration
//!
//! The configuration document is JSON with camelCase keys:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "emojis": { "wave": { "image": "wave.gif", "width": 24, "height": 24 } },
//!   "categories": { "gestures": ["wave"] },
//!   "settings": { "defaultSize": { "width": 24, "height": 24 } }
//! }
//! ```

use crate::{EmojiDescriptor, EmojiSize, ModelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Delimiters that bound a shortcode name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcodeSyntax {
    pub open: char,
    pub close: char,
}

impl ShortcodeSyntax {
    /// `:name:`
    pub const COLON: ShortcodeSyntax = ShortcodeSyntax { open: ':', close: ':' };
    /// `[name]`
    pub const BRACKET: ShortcodeSyntax = ShortcodeSyntax { open: '[', close: ']' };

    /// Whether `c` may appear inside a shortcode name
    pub fn is_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')
    }

    /// Whether every character of `name` may appear inside a shortcode
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty() && name.chars().all(Self::is_name_char)
    }

    /// Format `name` as a delimited shortcode
    pub fn shortcode(&self, name: &str) -> String {
        let mut out = String::with_capacity(name.len() + 2);
        out.push(self.open);
        out.push_str(name);
        out.push(self.close);
        out
    }
}

impl Default for ShortcodeSyntax {
    fn default() -> Self {
        Self::COLON
    }
}

/// One emoji entry of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiEntry {
    /// Optional repeat of the map key; must match it when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Asset reference handed to the rendering layer
    #[serde(rename = "image")]
    pub asset_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default)]
    pub description: String,
    /// Explicit animation flag; inferred from the asset extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl EmojiEntry {
    /// Create an entry with an explicit animation flag
    pub fn new(asset_ref: impl Into<String>, animated: bool) -> Self {
        Self {
            name: None,
            asset_ref: asset_ref.into(),
            width: None,
            height: None,
            description: String::new(),
            animated: Some(animated),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set an explicit size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Rendering settings shared by all emojis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmojiSettings {
    pub default_size: EmojiSize,
    pub max_size: EmojiSize,
    pub supported_formats: Vec<String>,
    pub syntax: ShortcodeSyntax,
}

impl EmojiSettings {
    /// Whether `format` (a file extension) is listed as supported
    pub fn supports_format(&self, format: &str) -> bool {
        self.supported_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format))
    }
}

impl Default for EmojiSettings {
    fn default() -> Self {
        Self {
            default_size: EmojiSize::new(24, 24),
            max_size: EmojiSize::new(48, 48),
            supported_formats: ["gif", "png", "jpg", "webp"]
                .into_iter()
                .map(String::from)
                .collect(),
            syntax: ShortcodeSyntax::default(),
        }
    }
}

/// The complete emoji configuration pushed by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub emojis: BTreeMap<String, EmojiEntry>,
    /// Category name to member emoji names, in display order
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub settings: EmojiSettings,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl EmojiConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            version: default_version(),
            emojis: BTreeMap::new(),
            categories: BTreeMap::new(),
            settings: EmojiSettings::default(),
        }
    }

    /// Add an emoji with an explicit animation flag
    pub fn with_emoji(mut self, name: impl Into<String>, asset_ref: impl Into<String>, animated: bool) -> Self {
        self.emojis.insert(name.into(), EmojiEntry::new(asset_ref, animated));
        self
    }

    /// Add a fully specified emoji entry
    pub fn with_entry(mut self, name: impl Into<String>, entry: EmojiEntry) -> Self {
        self.emojis.insert(name.into(), entry);
        self
    }

    /// Add a category
    pub fn with_category<I, S>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(name.into(), members.into_iter().map(Into::into).collect());
        self
    }

    /// Use a different shortcode syntax
    pub fn with_syntax(mut self, syntax: ShortcodeSyntax) -> Self {
        self.settings.syntax = syntax;
        self
    }

    /// The built-in configuration used when the host supplies none
    pub fn default_config() -> Self {
        Self::new()
            .with_entry("smile", EmojiEntry::new("smile.gif", true).with_description("Smiling face"))
            .with_entry("laugh", EmojiEntry::new("laugh.gif", true).with_description("Laughing face"))
            .with_entry("heart", EmojiEntry::new("heart.gif", true).with_description("Red heart"))
            .with_entry("thumbs_up", EmojiEntry::new("thumbs_up.gif", true).with_description("Thumbs up"))
            .with_category("faces", ["smile", "laugh"])
            .with_category("gestures", ["thumbs_up"])
            .with_category("objects", ["heart"])
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EmojiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// Check structural consistency of the configuration
    ///
    /// Category members that are not registered are tolerated (they are
    /// skipped at lookup time), everything else must be well formed.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ModelError::InvalidConfig("version must not be empty".to_string()));
        }

        let syntax = self.settings.syntax;
        if ShortcodeSyntax::is_name_char(syntax.open) || ShortcodeSyntax::is_name_char(syntax.close) {
            return Err(ModelError::InvalidConfig(format!(
                "shortcode delimiters '{}' '{}' must not be name characters",
                syntax.open, syntax.close
            )));
        }

        for (key, entry) in &self.emojis {
            if key.is_empty() {
                return Err(ModelError::InvalidConfig("emoji name must not be empty".to_string()));
            }
            if let Some(name) = &entry.name {
                if name != key {
                    return Err(ModelError::InvalidEmoji {
                        name: key.clone(),
                        reason: format!("entry name '{}' does not match its key", name),
                    });
                }
            }
            if entry.asset_ref.trim().is_empty() {
                return Err(ModelError::InvalidEmoji {
                    name: key.clone(),
                    reason: "image must not be empty".to_string(),
                });
            }
            if entry.width == Some(0) || entry.height == Some(0) {
                return Err(ModelError::InvalidEmoji {
                    name: key.clone(),
                    reason: "size must be positive".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Build the descriptor for one entry, applying size defaults
    pub fn descriptor_for(&self, name: &str, entry: &EmojiEntry) -> EmojiDescriptor {
        let settings = &self.settings;
        let size = EmojiSize::new(
            entry.width.unwrap_or(settings.default_size.width),
            entry.height.unwrap_or(settings.default_size.height),
        )
        .clamp_to(settings.max_size);
        let asset_ref = crate::AssetRef::new(entry.asset_ref.clone());
        let is_animated = entry.animated.unwrap_or_else(|| asset_ref.looks_animated());

        EmojiDescriptor::new(name, asset_ref, is_animated)
            .with_size(size)
            .with_description(entry.description.clone())
    }
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{ "emojis": { "wave": { "image": "wave.gif" } } }"#;
        let config = EmojiConfig::from_json(json).unwrap();

        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.settings.syntax, ShortcodeSyntax::COLON);
        assert_eq!(config.emojis["wave"].asset_ref, "wave.gif");
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "version": "2.0.0",
            "emojis": {
                "smile": { "name": "smile", "image": "smile.png", "width": 32, "height": 32,
                           "description": "Smiling face", "animated": true }
            },
            "categories": { "faces": ["smile"] },
            "settings": {
                "defaultSize": { "width": 20, "height": 20 },
                "maxSize": { "width": 40, "height": 40 },
                "supportedFormats": ["png"],
                "syntax": { "open": "[", "close": "]" }
            }
        }"#;
        let config = EmojiConfig::from_json(json).unwrap();

        assert_eq!(config.settings.syntax, ShortcodeSyntax::BRACKET);
        assert!(config.settings.supports_format("PNG"));
        assert!(!config.settings.supports_format("gif"));

        let descriptor = config.descriptor_for("smile", &config.emojis["smile"]);
        assert!(descriptor.is_animated);
        assert_eq!(descriptor.size, EmojiSize::new(32, 32));
        assert_eq!(descriptor.description, "Smiling face");
    }

    #[test]
    fn test_descriptor_defaults() {
        let config = EmojiConfig::new().with_entry(
            "big",
            EmojiEntry {
                animated: None,
                ..EmojiEntry::new("big.png", false).with_size(100, 10)
            },
        );
        let descriptor = config.descriptor_for("big", &config.emojis["big"]);

        assert!(!descriptor.is_animated);
        assert_eq!(descriptor.size, EmojiSize::new(48, 10));
    }

    #[test]
    fn test_animation_inferred_from_extension() {
        let mut entry = EmojiEntry::new("party.gif", false);
        entry.animated = None;
        let config = EmojiConfig::new().with_entry("party", entry);

        let descriptor = config.descriptor_for("party", &config.emojis["party"]);
        assert!(descriptor.is_animated);
    }

    #[test]
    fn test_validate_rejects_mismatched_name() {
        let mut entry = EmojiEntry::new("a.png", false);
        entry.name = Some("b".to_string());
        let config = EmojiConfig::new().with_entry("a", entry);

        assert!(matches!(config.validate(), Err(ModelError::InvalidEmoji { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let config = EmojiConfig::new().with_emoji("a", "  ", false);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_name_char_delimiter() {
        let config = EmojiConfig::new().with_syntax(ShortcodeSyntax { open: 'x', close: ':' });
        assert!(matches!(config.validate(), Err(ModelError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(EmojiConfig::from_json("{ not json"), Err(ModelError::Json(_))));
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = EmojiConfig::default_config();
        config.validate().unwrap();
        assert_eq!(config.emojis.len(), 4);
        assert_eq!(config.categories["faces"], vec!["smile", "laugh"]);

        let reparsed = EmojiConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_shortcode_names() {
        assert!(ShortcodeSyntax::is_valid_name("thumbs_up"));
        assert!(ShortcodeSyntax::is_valid_name("+1"));
        assert!(!ShortcodeSyntax::is_valid_name(""));
        assert!(!ShortcodeSyntax::is_valid_name("two words"));
        assert_eq!(ShortcodeSyntax::BRACKET.shortcode("smile"), "[smile]");
    }
}
