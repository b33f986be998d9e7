//! Pipeline orchestration.
//!
//! This module provides the [`Packager`] orchestrator that threads the
//! configuration object through the fixed stage sequence.

use crate::metadata;
use crate::packager::convert::{ToolConverter, WebFontConverter};
use crate::packager::error::Result;
use crate::packager::settings::{Config, ConfigBuilder, PackageOptions};
use crate::packager::subset::{PyftSubset, Subsetter};
use crate::packager::{generate, prepare, regular, subsets, webfonts};
use std::path::Path;

/// Font package pipeline orchestrator.
///
/// Runs a strict waterfall: prepare target → extract metadata → build
/// config → resolve regular font → subset fan-out → README → index.js →
/// LICENSE → package.json → web font fan-out. Stages run one at a time,
/// each borrowing the configuration only for the duration of its call;
/// the first failure stops the run with no retries and no rollback of
/// already-written output.
#[derive(Debug, Default)]
pub struct Packager<S, C> {
    subsetter: S,
    converter: C,
}

impl Packager<PyftSubset, ToolConverter> {
    /// Creates a packager with the default tool-backed collaborators.
    pub fn new() -> Self {
        Self::with_collaborators(PyftSubset::new(), ToolConverter::new())
    }
}

impl<S: Subsetter, C: WebFontConverter> Packager<S, C> {
    /// Creates a packager with specific collaborator implementations.
    pub fn with_collaborators(subsetter: S, converter: C) -> Self {
        Self {
            subsetter,
            converter,
        }
    }

    /// Processes a font drop into a distributable package.
    ///
    /// Stages `source`'s fonts under `<target>/fonts/default`, then runs
    /// the remaining stages against the resulting configuration.
    ///
    /// # Returns
    ///
    /// The final configuration on success, the first stage failure
    /// otherwise. A failed run may leave a partial target directory; a
    /// subsequent run replaces it wholesale.
    pub async fn process(
        &self,
        source: &Path,
        target: &Path,
        options: PackageOptions,
    ) -> Result<Config> {
        let font_target = target.join("fonts").join("default");

        let staged = prepare::prepare_target(source, &font_target).await?;
        let meta_info = metadata::extract(&staged).await?;

        let mut config = ConfigBuilder::new()
            .target_dir(target)
            .options(options)
            .meta_info(meta_info)
            .build()?;

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(rendered) = serde_json::to_string(config.meta_info()) {
                log::debug!("configuration: {rendered}");
            }
        }

        regular::ensure_regular_font(&mut config).await?;
        subsets::generate_subsets(&mut config, &self.subsetter).await?;

        generate::readme::write(&config).await?;
        generate::index_js::write(&config).await?;
        generate::license::write(&config).await?;
        generate::package_json::write(&config).await?;

        webfonts::generate_webfonts(&config, &self.converter).await?;

        Ok(config)
    }
}

/// Processes a font drop with the default tool-backed collaborators.
///
/// See [`Packager::process`].
pub async fn process(source: &Path, target: &Path, options: PackageOptions) -> Result<Config> {
    Packager::new().process(source, target, options).await
}
