//! Font metadata extraction from the staged directory.
//!
//! Reads each staged font's name and OS/2 tables to recover the family
//! name, style, and weight class that drive the rest of the pipeline.

use crate::packager::error::{Error, ErrorExt, Result};
use crate::packager::prepare::FONT_EXTENSION;
use crate::packager::settings::{FontInfo, MetaInfo};
use crate::packager::utils::fs as fsutil;
use read_fonts::tables::name::NameId;
use read_fonts::tables::os2::SelectionFlags;
use read_fonts::{FontRef, TableProvider};
use std::path::Path;

/// Weight class assumed for fonts without an OS/2 table.
const DEFAULT_WEIGHT: u16 = 400;

/// Scans `dir` for font files and extracts per-font attributes.
///
/// Files are visited in file-name order, so the mapping's insertion order
/// is deterministic. Identifiers are the (already normalized) file stems;
/// stems of files in one directory are unique by construction. An
/// unreadable font is a fatal error naming the file.
pub async fn extract(dir: &Path) -> Result<MetaInfo> {
    let mut meta_info = MetaInfo::default();

    for path in fsutil::files_with_extension(dir, FONT_EXTENSION).await? {
        let data = tokio::fs::read(&path)
            .await
            .fs_context("reading font", &path)?;
        let info = read_font_info(&path, &data)?;

        let id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| Error::BadFont {
                path: path.clone(),
                reason: "file has no stem".to_string(),
            })?;

        log::debug!(
            "found font {id}: family {:?}, style {}, weight {}",
            info.family,
            info.style,
            info.weight
        );
        meta_info.fonts.insert(id, info);
    }

    log::info!("extracted metadata for {} fonts", meta_info.fonts.len());
    Ok(meta_info)
}

fn read_font_info(path: &Path, data: &[u8]) -> Result<FontInfo> {
    let font = FontRef::new(data).map_err(|e| Error::BadFont {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let (weight, italic) = match font.os2() {
        Ok(os2) => (
            os2.us_weight_class(),
            os2.fs_selection().contains(SelectionFlags::ITALIC),
        ),
        Err(_) => (DEFAULT_WEIGHT, false),
    };
    let style = if italic { "italic" } else { "normal" };

    let family = family_name(&font).unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    Ok(FontInfo::new(family, path.to_path_buf(), style, weight))
}

/// Family name from the name table, preferring the typographic family.
fn family_name(font: &FontRef) -> Option<String> {
    let name_table = font.name().ok()?;
    let data = name_table.string_data();

    for wanted in [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME] {
        for record in name_table.name_record() {
            if record.name_id() != wanted || !record.is_unicode() {
                continue;
            }
            if let Ok(entry) = record.string(data) {
                let rendered = entry.to_string();
                if !rendered.trim().is_empty() {
                    return Some(rendered.trim().to_string());
                }
            }
        }
    }

    None
}
