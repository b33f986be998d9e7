//! README generation.

use super::templates::README_TEMPLATE;
use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::settings::Config;
use handlebars::Handlebars;

/// Writes `README.md` into the package root.
pub async fn write(config: &Config) -> Result<()> {
    log::info!("generating README.md");

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars
        .register_template_string("README.md", README_TEMPLATE)
        .map_err(|e| Error::GenericError(format!("failed to register README template: {e}")))?;

    let meta = config.meta_info();
    let options = config.options();

    let fonts: Vec<serde_json::Value> = meta
        .fonts
        .iter()
        .map(|(id, info)| {
            serde_json::json!({
                "id": id,
                "family": info.family,
                "style": info.style,
                "weight": info.weight,
            })
        })
        .collect();

    // The family shown in prose and the @font-face sample come from the
    // first discovered font; a package is one family by convention.
    let family = meta
        .fonts
        .values()
        .next()
        .map(|info| info.family.clone())
        .unwrap_or_else(|| options.name.clone());
    let sample_font = meta.fonts.keys().next().cloned().unwrap_or_default();

    let data = serde_json::json!({
        "package_name": options.name,
        "description": options.description,
        "family": family,
        "sample_font": sample_font,
        "fonts": fonts,
        "subsets": meta.subsets,
        "license": options.license,
    });

    let rendered = handlebars
        .render("README.md", &data)
        .map_err(|e| Error::GenericError(format!("failed to render README template: {e}")))?;

    let path = config.target_dir().join("README.md");
    tokio::fs::write(&path, rendered)
        .await
        .fs_context("writing README", &path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packager::settings::{ConfigBuilder, FontInfo, MetaInfo, PackageOptions};
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[tokio::test]
    async fn lists_every_font_and_subset() {
        let tmp = tempdir().expect("tempdir");

        let mut meta = MetaInfo::default();
        meta.fonts.insert(
            "lato-regular".to_string(),
            FontInfo::new("Lato", PathBuf::from("lato-regular.ttf"), "normal", 400),
        );
        meta.fonts.insert(
            "lato-bold".to_string(),
            FontInfo::new("Lato", PathBuf::from("lato-bold.ttf"), "normal", 700),
        );

        let config = ConfigBuilder::new()
            .options(PackageOptions {
                name: "lato".to_string(),
                description: "Lato web fonts".to_string(),
                subsets: vec!["latin".to_string(), "cyrillic".to_string()],
                ..Default::default()
            })
            .target_dir(tmp.path())
            .meta_info(meta)
            .build()
            .expect("build config");

        write(&config).await.expect("generate");

        let readme = std::fs::read_to_string(tmp.path().join("README.md")).expect("read");
        assert!(readme.starts_with("# lato"));
        assert!(readme.contains("Lato web fonts"));
        assert!(readme.contains("| lato-regular | Lato | normal | 400 |"));
        assert!(readme.contains("| lato-bold | Lato | normal | 700 |"));
        assert!(readme.contains("- `latin`"));
        assert!(readme.contains("- `cyrillic`"));
        assert!(readme.contains("fonts/default/lato-regular.woff2"));
        assert!(readme.contains("the OFL-1.1 license"));
    }
}
