//! Builder for constructing Config.

use super::{Config, MetaInfo, PackageOptions};
use crate::packager::error::{Context, Error, ErrorExt};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Config`].
///
/// Merges the caller-supplied options and the extracted metadata into the
/// single configuration object handed to the rest of the pipeline. The
/// target directory is absolutized exactly once here; the requested subset
/// list is copied into the metadata block so every later stage reads it
/// from one place.
#[derive(Default)]
pub struct ConfigBuilder {
    target_dir: Option<PathBuf>,
    options: Option<PackageOptions>,
    meta_info: Option<MetaInfo>,
}

impl ConfigBuilder {
    /// Creates a new config builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the package output root.
    ///
    /// Relative paths are resolved against the current directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn target_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.target_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the caller-supplied package options.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn options(mut self, options: PackageOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Sets the extracted font metadata.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn meta_info(mut self, meta_info: MetaInfo) -> Self {
        self.meta_info = Some(meta_info);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, if the package
    /// version is not valid semver, or if the target directory cannot be
    /// absolutized.
    pub fn build(self) -> crate::packager::Result<Config> {
        let options = self.options.context("options is required")?;

        semver::Version::parse(&options.version).map_err(|e| {
            Error::GenericError(format!("invalid package version {}: {}", options.version, e))
        })?;

        let target_dir = self.target_dir.context("target_dir is required")?;
        let target_dir = target_dir
            .absolutize()
            .fs_context("absolutizing target directory", &target_dir)?
            .into_owned();

        let mut meta_info = self.meta_info.context("meta_info is required")?;
        meta_info.subsets = options.subsets.clone();

        Ok(Config::new(options, target_dir, meta_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> PackageOptions {
        PackageOptions {
            name: "lato".to_string(),
            description: "Lato web fonts".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn build_requires_all_fields() {
        let err = ConfigBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("options is required"));

        let err = ConfigBuilder::new().options(options()).build().unwrap_err();
        assert!(err.to_string().contains("target_dir is required"));

        let err = ConfigBuilder::new()
            .options(options())
            .target_dir("/tmp/pkg")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("meta_info is required"));
    }

    #[test]
    fn build_absolutizes_target_dir() {
        let config = ConfigBuilder::new()
            .options(options())
            .target_dir("relative/pkg")
            .meta_info(MetaInfo::default())
            .build()
            .expect("build");

        assert!(config.target_dir().is_absolute());
        assert!(config.target_dir().ends_with("relative/pkg"));
        assert!(config.font_dir().ends_with("relative/pkg/fonts"));
        assert!(config.default_font_dir().ends_with("pkg/fonts/default"));
    }

    #[test]
    fn build_copies_subsets_into_meta_info() {
        let opts = PackageOptions {
            subsets: vec!["latin".to_string(), "cyrillic".to_string()],
            ..options()
        };

        let config = ConfigBuilder::new()
            .options(opts)
            .target_dir("/tmp/pkg")
            .meta_info(MetaInfo::default())
            .build()
            .expect("build");

        assert_eq!(config.meta_info().subsets, vec!["latin", "cyrillic"]);
    }

    #[test]
    fn build_rejects_bad_version() {
        let opts = PackageOptions {
            version: "not-a-version".to_string(),
            ..options()
        };

        let err = ConfigBuilder::new()
            .options(opts)
            .target_dir("/tmp/pkg")
            .meta_info(MetaInfo::default())
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("invalid package version"));
    }
}
