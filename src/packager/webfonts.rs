//! Web font fan-out across the package's font directories.

use crate::bail;
use crate::packager::convert::WebFontConverter;
use crate::packager::error::Result;
use crate::packager::settings::Config;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Generates companion web font formats in every directory holding fonts.
///
/// The directory set is the deduplicated parents of every generated path
/// across every font; a directory shared by several fonts or subsets is
/// visited exactly once. Directories are converted sequentially in sorted
/// order and the first failure aborts the stage.
pub async fn generate_webfonts<C: WebFontConverter>(config: &Config, converter: &C) -> Result<()> {
    log::info!("generating webfonts");

    let mut dirs: BTreeSet<PathBuf> = BTreeSet::new();
    for (name, info) in &config.meta_info().fonts {
        // paths is this stage's input: the subset fan-out must have run.
        let Some(paths) = &info.paths else {
            bail!("font {name} has no generated paths; subset fan-out must run first");
        };
        for path in paths {
            if let Some(parent) = path.parent() {
                dirs.insert(parent.to_path_buf());
            }
        }
    }

    for dir in dirs {
        converter.convert(&dir, &dir).await?;
    }

    Ok(())
}
