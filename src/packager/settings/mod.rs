//! Configuration structures for packaging operations.
//!
//! This module provides the configuration object threaded through the
//! pipeline: caller-supplied package options, the resolved target directory,
//! and the extracted font metadata, plus the builder that assembles them.

#![allow(dead_code)] // Public API - Config accessors preserve all fields for external consumers

mod builder;
mod core;
mod meta;
mod options;

// Re-export all public types
pub use builder::ConfigBuilder;
pub use core::Config;
pub use meta::{FontInfo, MetaInfo};
pub use options::PackageOptions;
