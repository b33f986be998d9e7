//! fontpack - font package builder.
//!
//! This binary converts a directory of TTF fonts into a distributable web
//! font package with per-locale subsets, web font formats, and generated
//! package metadata.

mod cli;
mod error;
mod metadata;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
