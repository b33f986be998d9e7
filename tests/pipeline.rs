//! End-to-end pipeline tests with mock subsetting/conversion collaborators.

use fontpack::packager::error::{Error, Result};
use fontpack::packager::settings::PackageOptions;
use fontpack::packager::{Packager, Subsetter, WebFontConverter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::tempdir;

/// Smallest byte sequence the font parser accepts: an sfnt header with an
/// empty table directory. Metadata extraction falls back to defaults
/// (style "normal", weight 400, family = file stem) for such a font.
fn minimal_ttf() -> Vec<u8> {
    vec![0x00, 0x01, 0x00, 0x00, 0, 0, 0, 0, 0, 0, 0, 0]
}

/// Subsetter that copies the input into each subset directory.
struct CopySubsetter {
    fail: bool,
}

impl Subsetter for CopySubsetter {
    async fn subset(
        &self,
        subsets: &[String],
        font_path: &Path,
        out_dir: &Path,
        recurse: bool,
    ) -> Result<Vec<PathBuf>> {
        if self.fail {
            return Err(Error::GenericError("subsetter exploded".to_string()));
        }
        assert!(recurse);

        let file_name = font_path.file_name().expect("file name");
        let mut generated = Vec::new();
        for id in subsets {
            let dir = out_dir.join(id);
            std::fs::create_dir_all(&dir).expect("subset dir");
            let out = dir.join(file_name);
            std::fs::copy(font_path, &out).expect("copy subset");
            generated.push(out);
        }
        Ok(generated)
    }
}

/// Converter that records visited directories and drops a .woff per font.
struct RecordingConverter {
    calls: Mutex<Vec<PathBuf>>,
}

impl RecordingConverter {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl WebFontConverter for RecordingConverter {
    async fn convert(&self, source_dir: &Path, dest_dir: &Path) -> Result<()> {
        assert_eq!(source_dir, dest_dir);
        self.calls.lock().expect("lock").push(source_dir.to_path_buf());

        for entry in std::fs::read_dir(source_dir).expect("read dir") {
            let path = entry.expect("entry").path();
            if path.extension().is_some_and(|e| e == "ttf") {
                std::fs::write(path.with_extension("woff"), b"woff").expect("write woff");
            }
        }
        Ok(())
    }
}

fn options() -> PackageOptions {
    PackageOptions {
        name: "lato".to_string(),
        description: "Lato web fonts".to_string(),
        subsets: vec!["latin".to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn packages_a_font_drop_end_to_end() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("drop");
    std::fs::create_dir(&source).expect("mkdir");
    std::fs::write(source.join("Lato.ttf"), minimal_ttf()).expect("write");
    std::fs::write(source.join("Other Sans.ttf"), minimal_ttf()).expect("write");
    std::fs::write(source.join("notes.md"), b"skip me").expect("write");

    let target = tmp.path().join("packages/lato");
    let packager =
        Packager::with_collaborators(CopySubsetter { fail: false }, RecordingConverter::new());

    let config = packager
        .process(&source, &target, options())
        .await
        .expect("process");

    // staged, normalized, and with the regular font renamed on disk
    let default_dir = target.join("fonts/default");
    assert!(default_dir.join("lato-regular.ttf").exists());
    assert!(default_dir.join("other-sans.ttf").exists());
    assert!(!default_dir.join("lato.ttf").exists());
    assert!(!default_dir.join("notes.md").exists());

    // one subset directory per requested subset, holding both fonts
    let latin_dir = target.join("fonts/latin");
    assert!(latin_dir.join("lato-regular.ttf").exists());
    assert!(latin_dir.join("other-sans.ttf").exists());

    // converter visited each directory exactly once
    assert!(default_dir.join("lato-regular.woff").exists());
    assert!(latin_dir.join("other-sans.woff").exists());

    // generated metadata files
    for name in ["README.md", "index.js", "LICENSE", "package.json"] {
        assert!(target.join(name).exists(), "{name} missing");
    }

    // final configuration reflects the mutations
    let fonts = &config.meta_info().fonts;
    assert!(fonts.contains_key("lato-regular"));
    assert!(fonts.contains_key("other-sans"));
    let regular_paths = fonts["lato-regular"].paths.as_ref().expect("paths");
    assert_eq!(
        regular_paths,
        &vec![
            default_dir.join("lato-regular.ttf"),
            latin_dir.join("lato-regular.ttf"),
        ]
    );
}

#[tokio::test]
async fn first_failure_stops_the_waterfall() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("drop");
    std::fs::create_dir(&source).expect("mkdir");
    std::fs::write(source.join("lato.ttf"), minimal_ttf()).expect("write");

    let target = tmp.path().join("packages/lato");
    let packager =
        Packager::with_collaborators(CopySubsetter { fail: true }, RecordingConverter::new());

    let err = packager
        .process(&source, &target, options())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("subsetter exploded"));
    // staging ran, but no stage after the subset fan-out did
    assert!(target.join("fonts/default/lato.ttf").exists());
    assert!(!target.join("README.md").exists());
    assert!(!target.join("package.json").exists());
}

#[tokio::test]
async fn rerun_replaces_the_previous_package() {
    let tmp = tempdir().expect("tempdir");
    let source = tmp.path().join("drop");
    std::fs::create_dir(&source).expect("mkdir");
    std::fs::write(source.join("lato.ttf"), minimal_ttf()).expect("write");

    let target = tmp.path().join("packages/lato");
    let packager =
        Packager::with_collaborators(CopySubsetter { fail: false }, RecordingConverter::new());

    packager
        .process(&source, &target, options())
        .await
        .expect("first run");

    // a second run against the same target must not accumulate state
    let packager =
        Packager::with_collaborators(CopySubsetter { fail: false }, RecordingConverter::new());
    packager
        .process(&source, &target, options())
        .await
        .expect("second run");

    // a single font is never renamed, and the staged tree holds exactly
    // the fresh copy plus its companion
    let mut names: Vec<String> = std::fs::read_dir(target.join("fonts/default"))
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["lato.ttf", "lato.woff"]);
}
