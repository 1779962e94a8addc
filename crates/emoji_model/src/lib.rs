//! Emoji Model - registry, configuration, and rich-text units
//!
//! This crate provides the data model shared by the scanner, the edit engine
//! and the host adapter: immutable emoji registries built from host
//! configuration, and the unit-based rich text in which every emoji is a
//! single indivisible element.

mod error;
mod descriptor;
mod config;
mod registry;
mod unit;
mod rich_text;
mod selection;

pub use error::*;
pub use descriptor::*;
pub use config::*;
pub use registry::*;
pub use unit::*;
pub use rich_text::*;
pub use selection::*;
