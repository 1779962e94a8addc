//! Asset resolution for rendering
//!
//! The editing core only carries [`AssetRef`]s. A renderer supplies an
//! [`AssetResolver`] and gets back segments paired with decoded assets.

use crate::{HostError, Result};
use emoji_model::{AssetRef, EmojiDescriptor, RichText, Segment};
use std::collections::HashMap;
use std::ops::Range;
use std::time::Duration;

/// One frame of an animated emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    pub data: Vec<u8>,
    pub delay: Duration,
}

/// Image data for an emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiAsset {
    Static(Vec<u8>),
    Animated(Vec<AnimationFrame>),
}

impl EmojiAsset {
    pub fn is_animated(&self) -> bool {
        matches!(self, EmojiAsset::Animated(_))
    }

    pub fn frame_count(&self) -> usize {
        match self {
            EmojiAsset::Static(_) => 1,
            EmojiAsset::Animated(frames) => frames.len(),
        }
    }

    /// Total playback time of one animation loop
    pub fn duration(&self) -> Duration {
        match self {
            EmojiAsset::Static(_) => Duration::ZERO,
            EmojiAsset::Animated(frames) => frames.iter().map(|f| f.delay).sum(),
        }
    }
}

/// Source of emoji image data
pub trait AssetResolver {
    fn resolve(&self, asset_ref: &AssetRef) -> Result<EmojiAsset>;
}

/// Resolver backed by an in-memory table
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetResolver {
    assets: HashMap<AssetRef, EmojiAsset>,
}

impl MemoryAssetResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset_ref: impl Into<AssetRef>, asset: EmojiAsset) {
        self.assets.insert(asset_ref.into(), asset);
    }

    pub fn with_asset(mut self, asset_ref: impl Into<AssetRef>, asset: EmojiAsset) -> Self {
        self.insert(asset_ref, asset);
        self
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl AssetResolver for MemoryAssetResolver {
    fn resolve(&self, asset_ref: &AssetRef) -> Result<EmojiAsset> {
        self.assets
            .get(asset_ref)
            .cloned()
            .ok_or_else(|| HostError::AssetNotFound(asset_ref.clone()))
    }
}

/// A segment ready for drawing
#[derive(Debug, Clone, PartialEq)]
pub enum RenderSegment<'a> {
    Text {
        content: String,
        units: Range<usize>,
    },
    /// An emoji with its asset, or `None` if the asset could not be
    /// resolved and a placeholder should be drawn
    Emoji {
        descriptor: &'a EmojiDescriptor,
        index: usize,
        asset: Option<EmojiAsset>,
    },
}

/// Pair each emoji segment of `text` with its resolved asset.
///
/// Each distinct asset is resolved at most once per call.
pub fn render_segments<'a>(
    text: &'a RichText,
    resolver: &dyn AssetResolver,
) -> Vec<RenderSegment<'a>> {
    let mut resolved: HashMap<&AssetRef, Option<EmojiAsset>> = HashMap::new();

    text.segments()
        .into_iter()
        .map(|segment| match segment {
            Segment::Text { content, units } => RenderSegment::Text { content, units },
            Segment::Emoji { descriptor, index } => {
                let asset = resolved
                    .entry(&descriptor.asset_ref)
                    .or_insert_with(|| match resolver.resolve(&descriptor.asset_ref) {
                        Ok(asset) => Some(asset),
                        Err(e) => {
                            tracing::warn!("Failed to resolve emoji {}: {}", descriptor.name, e);
                            None
                        }
                    })
                    .clone();
                RenderSegment::Emoji {
                    descriptor,
                    index,
                    asset,
                }
            }
        })
        .collect()
}
