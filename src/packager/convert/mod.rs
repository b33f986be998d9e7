//! Web font format conversion.
//!
//! Browsers want compressed companions next to the raw TTFs. Conversion is
//! delegated to the reference encoders behind the [`WebFontConverter`]
//! trait: `sfnt2woff` for WOFF and `woff2_compress` for WOFF2.

use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::prepare::FONT_EXTENSION;
use crate::packager::utils::fs as fsutil;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Generates companion web font formats for a directory of fonts.
#[allow(async_fn_in_trait)]
pub trait WebFontConverter {
    /// Converts every font file in `source_dir`, writing the companion
    /// formats into `dest_dir` (the pipeline passes the same directory for
    /// both, so companions land next to the originals).
    async fn convert(&self, source_dir: &Path, dest_dir: &Path) -> Result<()>;
}

/// Location of sfnt2woff, if installed.
static SFNT2WOFF: LazyLock<Option<PathBuf>> = LazyLock::new(|| find_tool("sfnt2woff"));

/// Location of woff2_compress, if installed.
static WOFF2_COMPRESS: LazyLock<Option<PathBuf>> = LazyLock::new(|| find_tool("woff2_compress"));

fn find_tool(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => {
            log::debug!("Found {name} at: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::debug!("{name} not found in PATH: {e}");
            None
        }
    }
}

/// [`WebFontConverter`] implementation driving the reference encoders.
///
/// Both tools write their output next to the input file; when the
/// destination differs from the source the outputs are moved afterwards.
#[derive(Debug, Default)]
pub struct ToolConverter;

impl ToolConverter {
    /// Creates a new tool-backed converter.
    pub fn new() -> Self {
        Self
    }

    async fn run_tool(tool_name: &str, tool: &Path, font: &Path) -> Result<()> {
        let output = tokio::process::Command::new(tool)
            .arg(font)
            .output()
            .await
            .map_err(|e| Error::CommandFailed {
                command: tool_name.to_string(),
                error: e,
            })?;

        if !output.status.success() {
            return Err(Error::GenericError(format!(
                "{tool_name} failed for {}: {}",
                font.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }

    /// Moves a generated companion into the destination directory when the
    /// tool wrote it somewhere else.
    async fn relocate(generated: &Path, dest_dir: &Path) -> Result<()> {
        let Some(file_name) = generated.file_name() else {
            return Ok(());
        };
        let target = dest_dir.join(file_name);
        if target != generated {
            tokio::fs::rename(generated, &target)
                .await
                .fs_context("moving web font", generated)?;
        }
        Ok(())
    }
}

impl WebFontConverter for ToolConverter {
    async fn convert(&self, source_dir: &Path, dest_dir: &Path) -> Result<()> {
        let sfnt2woff = SFNT2WOFF.as_deref().ok_or(Error::ToolMissing {
            tool: "sfnt2woff".to_string(),
        })?;
        let woff2_compress = WOFF2_COMPRESS.as_deref().ok_or(Error::ToolMissing {
            tool: "woff2_compress".to_string(),
        })?;

        for font in fsutil::files_with_extension(source_dir, FONT_EXTENSION).await? {
            log::debug!("converting {}", font.display());

            Self::run_tool("sfnt2woff", sfnt2woff, &font).await?;
            Self::relocate(&font.with_extension("woff"), dest_dir).await?;

            Self::run_tool("woff2_compress", woff2_compress, &font).await?;
            Self::relocate(&font.with_extension("woff2"), dest_dir).await?;
        }

        Ok(())
    }
}
