//! Regular font resolution.
//!
//! Downstream generators (web index, README) need a canonical "default"
//! font to reference. Font drops rarely label one, so this stage infers it
//! from style and weight and renames the winner's file accordingly.

use crate::packager::error::{ErrorExt, Result};
use crate::packager::settings::Config;
use tokio::fs;

/// Marker carried by the identifier and file stem of the regular font.
const REGULAR_MARKER: &str = "-regular";

/// Weight classes the heuristic accepts as "regular".
const REGULAR_WEIGHTS: [u16; 2] = [400, 500];

/// Designates the font representing the family's default appearance.
///
/// With more than one font and no identifier already carrying the regular
/// marker, the first font in mapping order with style `"normal"` and a
/// weight of 400 or 500 wins (first-match-wins, not best-match). Its file
/// is renamed on disk with the marker inserted before the extension and
/// its mapping entry is re-keyed to match.
///
/// Finding no candidate is non-fatal and logged; a rename failure is fatal.
pub async fn ensure_regular_font(config: &mut Config) -> Result<()> {
    let fonts = &config.meta_info().fonts;

    // With at most one font, nobody cares which one is regular.
    if fonts.len() <= 1 {
        return Ok(());
    }

    if fonts.keys().any(|name| name.contains(REGULAR_MARKER)) {
        return Ok(());
    }

    let candidate = fonts.iter().find_map(|(name, info)| {
        (info.style == "normal" && REGULAR_WEIGHTS.contains(&info.weight))
            .then(|| name.clone())
    });

    let Some(font_name) = candidate else {
        log::warn!("could not find regular font, continuing anyways");
        return Ok(());
    };

    let old_path = fonts[&font_name].path.clone();
    let new_name = format!("{font_name}{REGULAR_MARKER}");
    let ext = old_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or(super::prepare::FONT_EXTENSION);
    let new_path = old_path.with_file_name(format!("{new_name}.{ext}"));

    log::info!(
        "renaming {} to {}",
        old_path.display(),
        new_path.display()
    );
    fs::rename(&old_path, &new_path)
        .await
        .fs_context("renaming regular font", &old_path)?;

    let fonts = &mut config.meta_info_mut().fonts;
    if let Some(mut info) = fonts.shift_remove(&font_name) {
        info.path = new_path;
        fonts.insert(new_name, info);
    }

    Ok(())
}
