//! Command line argument parsing and validation.

use crate::packager::settings::PackageOptions;
use crate::packager::subset;
use clap::Parser;
use std::path::PathBuf;

/// Font package builder
#[derive(Parser, Debug)]
#[command(
    name = "fontpack",
    version,
    about = "Builds a distributable web font package from a directory of TTF fonts",
    long_about = "Builds a distributable web font package from a directory of TTF fonts.

Stages the fonts under <TARGET>/fonts/default, resolves the family's regular
font, generates per-locale subsets and web font formats, and writes README.md,
index.js, LICENSE, and package.json.

Usage:
  fontpack ./font-drop ./packages/lato --name lato --author \"Lukasz Dziedzic\"
  fontpack ./font-drop ./packages/lato --subsets latin,latin-ext,cyrillic

Exit code 0 = the package exists at the target path."
)]
pub struct Args {
    /// Directory containing the raw .ttf files
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory to write the generated package into (replaced wholesale)
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Package name; defaults to the target directory name
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Package version (semver)
    #[arg(long = "pack-version", value_name = "VERSION", default_value = "1.0.0")]
    pub pack_version: String,

    /// Package description
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub description: String,

    /// Author, as "Name <email@example.com>"
    #[arg(short, long, value_name = "AUTHOR")]
    pub author: Option<String>,

    /// SPDX license identifier for the generated LICENSE file
    #[arg(short, long, value_name = "ID", default_value = "OFL-1.1")]
    pub license: String,

    /// Homepage URL for package.json
    #[arg(long, value_name = "URL")]
    pub homepage: Option<String>,

    /// Comma separated subset ids to generate for every font
    #[arg(
        short,
        long,
        value_name = "IDS",
        value_delimiter = ',',
        default_value = "latin"
    )]
    pub subsets: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.source.is_dir() {
            return Err(format!(
                "Source is not a directory: {}",
                self.source.display()
            ));
        }

        let known: Vec<&str> = subset::SUBSETS.iter().map(|s| s.id).collect();
        for id in &self.subsets {
            if !subset::is_known(id) {
                return Err(format!(
                    "Unknown subset: {}. Known subsets: {}",
                    id,
                    known.join(", ")
                ));
            }
        }

        if let Err(e) = semver::Version::parse(&self.pack_version) {
            return Err(format!(
                "Invalid package version {}: {}",
                self.pack_version, e
            ));
        }

        Ok(())
    }

    /// Package options derived from the arguments
    pub fn package_options(&self) -> PackageOptions {
        let name = self.name.clone().unwrap_or_else(|| {
            self.target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "fontpack".to_string())
        });

        PackageOptions {
            name,
            version: self.pack_version.clone(),
            description: self.description.clone(),
            author: self.author.clone(),
            license: self.license.clone(),
            homepage: self.homepage.clone(),
            subsets: self.subsets.clone(),
        }
    }
}
