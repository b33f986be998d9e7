//! Extracted font metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata block for every font in the package.
///
/// `fonts` keys are unique font identifiers (normalized file stems).
/// Insertion order reflects discovery order from the metadata extractor and
/// is the only ordering guarantee later stages may rely on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaInfo {
    /// Font identifier to per-font metadata, in discovery order.
    pub fonts: IndexMap<String, FontInfo>,

    /// Subset identifiers requested for generation, shared across all fonts.
    pub subsets: Vec<String>,

    /// Alternate names for fonts, used by the generated index module.
    pub aliases: IndexMap<String, String>,
}

/// Metadata for a single font file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontInfo {
    /// Family name from the font's name table (file stem if absent).
    pub family: String,

    /// Path to the font's primary file.
    ///
    /// Updated in place when the regular font resolver renames the file.
    pub path: PathBuf,

    /// Normalized style tag: "normal" or "italic".
    pub style: String,

    /// OS/2 weight class (400 = regular, 700 = bold, ...).
    pub weight: u16,

    /// Output file paths, primary file first, then one entry per generated
    /// subset in subset-list order.
    ///
    /// None until the subset fan-out stage has run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<PathBuf>>,
}

impl FontInfo {
    /// Creates font metadata for a not-yet-subsetted font.
    pub fn new(family: impl Into<String>, path: PathBuf, style: impl Into<String>, weight: u16) -> Self {
        Self {
            family: family.into(),
            path,
            style: style.into(),
            weight,
            paths: None,
        }
    }
}
