//! Emoji descriptors and asset references
//!
//! A descriptor is everything the editing core knows about an emoji: its
//! name, an opaque reference to its image asset, and whether that asset
//! animates. The image bytes themselves never enter the core.

use serde::{Deserialize, Serialize};

/// Opaque handle to an emoji image asset, resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Create a new asset reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased file extension of the reference, if it has one
    pub fn extension(&self) -> Option<String> {
        let file = self.0.rsplit(&['/', '\\'][..]).next()?;
        let (stem, ext) = file.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Guess whether the referenced asset is animated from its extension
    pub fn looks_animated(&self) -> bool {
        matches!(self.extension().as_deref(), Some("gif" | "apng" | "webp"))
    }
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Rendered size of an emoji in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiSize {
    pub width: u32,
    pub height: u32,
}

impl EmojiSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp each dimension to `max`
    pub fn clamp_to(self, max: EmojiSize) -> Self {
        Self {
            width: self.width.min(max.width),
            height: self.height.min(max.height),
        }
    }
}

impl Default for EmojiSize {
    fn default() -> Self {
        Self::new(24, 24)
    }
}

/// A registered emoji
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmojiDescriptor {
    /// Name used inside shortcodes (`wave` for `:wave:`)
    pub name: String,
    /// Asset handle for the rendering layer
    pub asset_ref: AssetRef,
    /// Whether the asset is an animation
    pub is_animated: bool,
    /// Display size
    #[serde(default)]
    pub size: EmojiSize,
    /// Human readable description, used by search
    #[serde(default)]
    pub description: String,
}

impl EmojiDescriptor {
    /// Create a descriptor with default size and no description
    pub fn new(name: impl Into<String>, asset_ref: impl Into<AssetRef>, is_animated: bool) -> Self {
        Self {
            name: name.into(),
            asset_ref: asset_ref.into(),
            is_animated,
            size: EmojiSize::default(),
            description: String::new(),
        }
    }

    /// Set the display size
    pub fn with_size(mut self, size: EmojiSize) -> Self {
        self.size = size;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
