//! package.json generation.

use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::settings::Config;
use serde_json::json;

/// Writes `package.json` into the package root.
pub async fn write(config: &Config) -> Result<()> {
    log::info!("generating package.json");

    let options = config.options();

    let mut manifest = json!({
        "name": options.name,
        "version": options.version,
        "description": options.description,
        "main": "index.js",
        "license": options.license,
        "keywords": ["fonts", "webfonts", options.name],
        "files": ["fonts", "index.js", "README.md"],
    });
    if let Some(author) = &options.author {
        manifest["author"] = json!(author);
    }
    if let Some(homepage) = &options.homepage {
        manifest["homepage"] = json!(homepage);
    }

    let rendered = serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::GenericError(format!("failed to render package.json: {e}")))?;

    let path = config.target_dir().join("package.json");
    tokio::fs::write(&path, rendered + "\n")
        .await
        .fs_context("writing package.json", &path)?;

    Ok(())
}
