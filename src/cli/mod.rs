//! Command line interface for fontpack.

mod args;

pub use args::Args;

use crate::error::{CliError, Result};
use crate::packager;
use std::path::Path;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    let options = args.package_options();
    let config = packager::process(&args.source, &args.target, options).await?;

    let (files, bytes) = package_summary(config.target_dir());
    println!(
        "Packaged {} fonts into {} ({} files, {} bytes)",
        config.meta_info().fonts.len(),
        config.target_dir().display(),
        files,
        bytes
    );

    Ok(0)
}

/// File count and total size of the generated package tree.
fn package_summary(target: &Path) -> (usize, u64) {
    walkdir::WalkDir::new(target)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .fold((0, 0), |(files, bytes), entry| {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            (files + 1, bytes + size)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn summary_counts_files_recursively() {
        let tmp = tempdir().expect("tempdir");
        std::fs::create_dir_all(tmp.path().join("fonts/default")).expect("mkdir");
        std::fs::write(tmp.path().join("fonts/default/a.ttf"), b"12345").expect("write");
        std::fs::write(tmp.path().join("README.md"), b"123").expect("write");

        let (files, bytes) = package_summary(tmp.path());
        assert_eq!(files, 2);
        assert_eq!(bytes, 8);
    }
}
