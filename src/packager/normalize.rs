//! Filename normalization for staged font files.
//!
//! Font drops arrive with names like `Open Sans_Bold.TTF`; everything
//! downstream (font identifiers, subset directories, generated metadata)
//! expects lowercase hyphenated names.

use crate::bail;
use crate::packager::error::{ErrorExt, Result};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").expect("static regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("static regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("static regex"));

/// Normalizes a file stem.
///
/// Lowercases, turns whitespace and underscore runs into single hyphens,
/// drops everything outside `[a-z0-9-]`, and collapses hyphen runs.
pub fn normalize_stem(stem: &str) -> String {
    let lowered = stem.to_lowercase();
    let hyphenated = SEPARATORS.replace_all(&lowered, "-");
    let filtered = DISALLOWED.replace_all(&hyphenated, "");
    HYPHEN_RUNS
        .replace_all(&filtered, "-")
        .trim_matches('-')
        .to_string()
}

/// Normalized file name for a path: normalized stem plus lowercased extension.
fn normalize_name(name: &str) -> String {
    let path = Path::new(name);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(name);
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", normalize_stem(stem), ext.to_lowercase()),
        None => normalize_stem(stem),
    }
}

/// Renames every file in `dir` to its normalized name.
///
/// Files whose name is already normalized are left alone. Two files that
/// normalize to the same name are an error.
pub async fn normalize_filenames(dir: &Path) -> Result<()> {
    // Collect names up front so renames cannot disturb the iteration.
    let mut entries = fs::read_dir(dir).await.fs_context("reading directory", dir)?;
    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .fs_context("reading directory", dir)?
    {
        let file_type = entry
            .file_type()
            .await
            .fs_context("inspecting entry", &entry.path())?;
        if file_type.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut seen = HashSet::new();
    for name in names {
        let normalized = normalize_name(&name);
        if !seen.insert(normalized.clone()) {
            bail!("filename collision after normalization: {normalized}");
        }
        if normalized != name {
            let from = dir.join(&name);
            let to = dir.join(&normalized);
            log::debug!("normalizing {name} to {normalized}");
            fs::rename(&from, &to)
                .await
                .fs_context("renaming font file", &from)?;
        }
    }

    Ok(())
}
