//! Directory staging for the package working copy.

use crate::packager::error::{ErrorExt, Result};
use crate::packager::{normalize, utils::fs as fsutil};
use std::path::{Path, PathBuf};
use tokio::fs;

/// File extension of the fonts this pipeline packages.
pub const FONT_EXTENSION: &str = "ttf";

/// Stages a clean working copy of the input fonts.
///
/// Removes `font_target` if present, recreates it (with parents), copies
/// the `.ttf` files found at the top level of `source` into it, and
/// normalizes the resulting filenames. Everything that is not a `.ttf`
/// file is skipped with a warning. The source tree is never written to.
///
/// Returns the staged directory path.
pub async fn prepare_target(source: &Path, font_target: &Path) -> Result<PathBuf> {
    log::info!("preparing target {}", font_target.display());

    fsutil::create_dir_all(font_target, true).await?;

    let mut entries = fs::read_dir(source)
        .await
        .fs_context("reading source directory", source)?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading source directory", source)?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting source entry", &path)?;

        if !file_type.is_file() || !fsutil::has_extension(&path, FONT_EXTENSION) {
            log::warn!(
                "{} is not a .ttf, skipping",
                entry.file_name().to_string_lossy()
            );
            continue;
        }

        let dest = font_target.join(entry.file_name());
        fs::copy(&path, &dest)
            .await
            .fs_context("copying font", &path)?;
    }

    normalize::normalize_filenames(font_target).await?;

    Ok(font_target.to_path_buf())
}
