//! Locale subset generation.
//!
//! The pipeline only drives subsetting; the heavy lifting is delegated to
//! an external subsetting tool behind the [`Subsetter`] trait.

mod ranges;
mod tool;

pub use ranges::{SUBSETS, is_known, ranges_for};
pub use tool::PyftSubset;

use crate::packager::error::Result;
use std::path::{Path, PathBuf};

/// Generates locale subsets of a single font file.
#[allow(async_fn_in_trait)]
pub trait Subsetter {
    /// Produces one subsetted copy of `font_path` per entry of `subsets`,
    /// under `out_dir/<subset>/`, returning the generated paths in
    /// subset-list order.
    ///
    /// With `recurse` set, missing per-subset directories are created;
    /// without it they are an error.
    async fn subset(
        &self,
        subsets: &[String],
        font_path: &Path,
        out_dir: &Path,
        recurse: bool,
    ) -> Result<Vec<PathBuf>>;
}
