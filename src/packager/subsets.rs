//! Subset fan-out across the package's fonts.

use crate::bail;
use crate::packager::error::{Error, Result};
use crate::packager::settings::Config;
use crate::packager::subset::Subsetter;

/// Generates locale subsets for every font, one font at a time.
///
/// Fonts are processed sequentially in mapping order; sequential on purpose,
/// to bound the load on the subsetting tool and keep output ordering
/// deterministic for later stages. After this stage every font's `paths`
/// holds the primary file first, then one entry per generated subset in
/// subset-list order. The first failure aborts the stage with an error
/// naming the failing font's path.
pub async fn generate_subsets<S: Subsetter>(config: &mut Config, subsetter: &S) -> Result<()> {
    log::info!("generating locale specific subsets");

    // paths must be unset here: it is this stage's output.
    if let Some((name, _)) = config
        .meta_info()
        .fonts
        .iter()
        .find(|(_, info)| info.paths.is_some())
    {
        bail!("font {name} already has generated paths; subset fan-out must run exactly once");
    }

    let font_dir = config.font_dir();
    let subsets = config.meta_info().subsets.clone();
    let names: Vec<String> = config.meta_info().fonts.keys().cloned().collect();

    for name in names {
        let primary = config.meta_info().fonts[&name].path.clone();

        let subset_paths = subsetter
            .subset(&subsets, &primary, &font_dir, true)
            .await
            .map_err(|e| match e {
                Error::SubsetFailed { .. } => e,
                other => Error::SubsetFailed {
                    path: primary.clone(),
                    reason: other.to_string(),
                },
            })?;

        let mut paths = Vec::with_capacity(subset_paths.len() + 1);
        paths.push(primary);
        paths.extend(subset_paths);

        if let Some(info) = config.meta_info_mut().fonts.get_mut(&name) {
            info.paths = Some(paths);
        }
    }

    Ok(())
}
