//! Core Config struct and implementations.

use super::{MetaInfo, PackageOptions};
use std::path::{Path, PathBuf};

/// The configuration object threaded through every pipeline stage.
///
/// Constructed once per run via [`ConfigBuilder`], mutated in place by the
/// regular font resolver and the subset fan-out, and discarded after the
/// final stage. Exactly one stage borrows it at any instant.
///
/// [`ConfigBuilder`]: super::ConfigBuilder
#[derive(Debug, Clone)]
pub struct Config {
    /// Caller-supplied options, read-only after build.
    options: PackageOptions,

    /// Absolute path of the package output root. Set once, never changed.
    target_dir: PathBuf,

    /// Extracted font and subset metadata.
    meta_info: MetaInfo,
}

impl Config {
    /// Returns the caller-supplied package options.
    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    /// Returns the absolute package output root.
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Returns the font metadata block.
    pub fn meta_info(&self) -> &MetaInfo {
        &self.meta_info
    }

    /// Returns the font metadata block for in-place mutation.
    pub fn meta_info_mut(&mut self) -> &mut MetaInfo {
        &mut self.meta_info
    }

    /// Returns the shared font output directory, `<target>/fonts`.
    ///
    /// Subset directories are created directly under it, as siblings of
    /// the `default` directory.
    pub fn font_dir(&self) -> PathBuf {
        self.target_dir.join("fonts")
    }

    /// Returns the directory holding the primary (unsubset) font files.
    pub fn default_font_dir(&self) -> PathBuf {
        self.font_dir().join("default")
    }

    /// Creates a new Config instance (used by ConfigBuilder).
    pub(super) fn new(options: PackageOptions, target_dir: PathBuf, meta_info: MetaInfo) -> Self {
        Self {
            options,
            target_dir,
            meta_info,
        }
    }
}
