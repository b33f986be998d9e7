//! Subsetter backed by the fonttools `pyftsubset` CLI.

use super::{Subsetter, ranges};
use crate::bail;
use crate::packager::error::{Context, Error, ErrorExt, Result};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Location of pyftsubset, if installed.
///
/// Cached result to avoid repeated PATH lookups during the fan-out.
static PYFTSUBSET: LazyLock<Option<PathBuf>> = LazyLock::new(|| match which::which("pyftsubset") {
    Ok(path) => {
        log::debug!("Found pyftsubset at: {}", path.display());
        Some(path)
    }
    Err(e) => {
        log::debug!("pyftsubset not found in PATH: {e}");
        None
    }
});

/// [`Subsetter`] implementation driving `pyftsubset`.
#[derive(Debug, Default)]
pub struct PyftSubset;

impl PyftSubset {
    /// Creates a new pyftsubset-backed subsetter.
    pub fn new() -> Self {
        Self
    }

    fn tool() -> Result<&'static Path> {
        PYFTSUBSET.as_deref().ok_or(Error::ToolMissing {
            tool: "pyftsubset".to_string(),
        })
    }
}

impl Subsetter for PyftSubset {
    async fn subset(
        &self,
        subsets: &[String],
        font_path: &Path,
        out_dir: &Path,
        recurse: bool,
    ) -> Result<Vec<PathBuf>> {
        // Resolve every subset id before touching the filesystem, so an
        // unknown id fails the same way whether or not the tool exists.
        let resolved: Vec<(&String, &'static str)> = subsets
            .iter()
            .map(|id| {
                ranges::ranges_for(id)
                    .map(|r| (id, r))
                    .ok_or_else(|| Error::UnknownSubset(id.clone()))
            })
            .collect::<Result<_>>()?;

        let tool = Self::tool()?;
        let file_name = font_path
            .file_name()
            .context("font path has no file name")?;

        let mut generated = Vec::with_capacity(resolved.len());
        for (id, unicode_ranges) in resolved {
            let subset_dir = out_dir.join(id);
            if recurse {
                tokio::fs::create_dir_all(&subset_dir)
                    .await
                    .fs_context("creating subset directory", &subset_dir)?;
            } else if !subset_dir.is_dir() {
                bail!("subset directory {} does not exist", subset_dir.display());
            }

            let out_path = subset_dir.join(file_name);
            log::debug!(
                "subsetting {} to {}",
                font_path.display(),
                out_path.display()
            );

            let output = tokio::process::Command::new(tool)
                .arg(font_path)
                .arg(format!("--unicodes={unicode_ranges}"))
                .arg(format!("--output-file={}", out_path.display()))
                .output()
                .await
                .map_err(|e| Error::CommandFailed {
                    command: "pyftsubset".to_string(),
                    error: e,
                })?;

            if !output.status.success() {
                return Err(Error::SubsetFailed {
                    path: font_path.to_path_buf(),
                    reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                });
            }

            generated.push(out_path);
        }

        Ok(generated)
    }
}
