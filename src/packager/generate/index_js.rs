//! index.js generation.
//!
//! The package ships a small JS module so web servers can discover the
//! enabled fonts, aliases, and subsets without parsing the directory tree.

use super::templates::INDEX_JS_TEMPLATE;
use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::settings::Config;
use handlebars::Handlebars;

/// Writes `index.js` into the package root.
pub async fn write(config: &Config) -> Result<()> {
    log::info!("generating index.js");

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("index.js", INDEX_JS_TEMPLATE)
        .map_err(|e| Error::GenericError(format!("failed to register index template: {e}")))?;

    let meta = config.meta_info();
    let fonts: Vec<&String> = meta.fonts.keys().collect();

    let data = serde_json::json!({
        "package_name": config.options().name,
        "version": config.options().version,
        "fonts": fonts,
        "aliases": meta.aliases,
        "subsets": meta.subsets,
    });

    let rendered = handlebars
        .render("index.js", &data)
        .map_err(|e| Error::GenericError(format!("failed to render index template: {e}")))?;

    let path = config.target_dir().join("index.js");
    tokio::fs::write(&path, rendered)
        .await
        .fs_context("writing index.js", &path)?;

    Ok(())
}
