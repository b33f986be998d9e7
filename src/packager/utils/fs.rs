//! File system utilities for packaging.

use crate::packager::error::{ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    Ok(fs::create_dir_all(path).await?)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Checks whether a path carries the given extension, ASCII case-insensitive.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Lists the regular files in `dir` carrying the given extension, sorted by
/// file name so callers see a deterministic order.
pub async fn files_with_extension(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await.fs_context("reading directory", dir)?;

    let mut found = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory", dir)?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting entry", &path)?;
        if file_type.is_file() && has_extension(&path, ext) {
            found.push(path);
        }
    }

    found.sort();
    Ok(found)
}
