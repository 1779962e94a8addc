//! Immutable emoji registry
//!
//! A registry is built in one step from an [`EmojiConfig`] and never changes
//! afterwards. New configuration produces a new registry; editors holding the
//! previous one keep a consistent snapshot until they are handed the new one.

use crate::{EmojiConfig, EmojiDescriptor, EmojiSettings, ShortcodeSyntax};
use serde::Serialize;
use std::collections::HashMap;

/// A titled group of emojis for pickers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerSection<'a> {
    pub title: &'a str,
    pub emojis: Vec<&'a EmojiDescriptor>,
}

/// Lookup from emoji name to descriptor
#[derive(Debug, Clone, Default)]
pub struct EmojiRegistry {
    by_name: HashMap<String, EmojiDescriptor>,
    categories: Vec<(String, Vec<String>)>,
    settings: EmojiSettings,
}

impl EmojiRegistry {
    /// A registry with no emojis; every shortcode stays literal text
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from a configuration
    pub fn register(config: &EmojiConfig) -> Self {
        let mut by_name = HashMap::with_capacity(config.emojis.len());
        for (name, entry) in &config.emojis {
            if !ShortcodeSyntax::is_valid_name(name) {
                tracing::warn!(
                    "Emoji '{}' contains characters that cannot appear in a shortcode; it can only be inserted by name",
                    name
                );
            }
            by_name.insert(name.clone(), config.descriptor_for(name, entry));
        }

        let categories = config
            .categories
            .iter()
            .map(|(name, members)| (name.clone(), members.clone()))
            .collect();

        tracing::debug!(
            "Registered {} emojis in {} categories",
            by_name.len(),
            config.categories.len()
        );

        Self {
            by_name,
            categories,
            settings: config.settings.clone(),
        }
    }

    /// Build a registry directly from descriptors, with default settings
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = EmojiDescriptor>) -> Self {
        Self {
            by_name: descriptors
                .into_iter()
                .map(|d| (d.name.clone(), d))
                .collect(),
            categories: Vec::new(),
            settings: EmojiSettings::default(),
        }
    }

    /// Look up an emoji by name
    pub fn lookup(&self, name: &str) -> Option<&EmojiDescriptor> {
        self.by_name.get(name)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered emojis
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// All descriptors, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &EmojiDescriptor> {
        let mut all: Vec<_> = self.by_name.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all.into_iter()
    }

    /// Shortcode delimiters in effect
    pub fn syntax(&self) -> ShortcodeSyntax {
        self.settings.syntax
    }

    pub fn settings(&self) -> &EmojiSettings {
        &self.settings
    }

    /// Category names, sorted
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    /// Registered members of a category; unknown members are skipped
    pub fn emojis_in_category(&self, category: &str) -> Vec<&EmojiDescriptor> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, members)| members.iter().filter_map(|m| self.lookup(m)).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring search over names and descriptions
    pub fn search(&self, query: &str) -> Vec<&EmojiDescriptor> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&term) || d.description.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Sections for an emoji picker: every non-empty category, or a single
    /// "All" section when no category has registered members
    pub fn picker_sections(&self) -> Vec<PickerSection<'_>> {
        let sections: Vec<_> = self
            .categories
            .iter()
            .map(|(title, _)| PickerSection {
                title: title.as_str(),
                emojis: self.emojis_in_category(title),
            })
            .filter(|section| !section.emojis.is_empty())
            .collect();

        if sections.is_empty() {
            return vec![PickerSection {
                title: "All",
                emojis: self.iter().collect(),
            }];
        }
        sections
    }
}
