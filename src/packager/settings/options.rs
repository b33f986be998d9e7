//! Caller-supplied package options.

/// Package options supplied by the caller.
///
/// Passed through the pipeline unchanged; read-only after the configuration
/// is built. This typically maps from CLI arguments.
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Package name used in package.json and the README.
    ///
    /// Usually the font family in kebab case, e.g. "open-sans".
    pub name: String,

    /// Version string in semantic versioning format.
    ///
    /// Example: "1.0.0", "0.2.3-beta.1"
    pub version: String,

    /// Brief description of the package.
    pub description: String,

    /// Author line for package.json and the LICENSE copyright notice.
    ///
    /// Format: "Name <email@example.com>"
    ///
    /// Default: None
    pub author: Option<String>,

    /// SPDX license identifier (e.g., "OFL-1.1").
    pub license: String,

    /// Homepage URL for the package.
    ///
    /// Default: None
    pub homepage: Option<String>,

    /// Subset identifiers to generate for every font.
    pub subsets: Vec<String>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "1.0.0".to_string(),
            description: String::new(),
            author: None,
            license: "OFL-1.1".to_string(),
            homepage: None,
            subsets: vec!["latin".to_string()],
        }
    }
}
