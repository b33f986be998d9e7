//! Font packaging pipeline.
//!
//! The pipeline stages a working copy of the input fonts, extracts their
//! metadata, resolves the family's regular font, generates per-locale
//! subsets and web font formats, and writes the package metadata files.
//! Stages run strictly in order and the first failure aborts the run.

pub mod convert;
pub mod error;
pub mod generate;
pub mod normalize;
pub mod pipeline;
pub mod prepare;
pub mod regular;
pub mod settings;
pub mod subset;
pub mod subsets;
pub(crate) mod utils;
pub mod webfonts;

// Re-export all public types
pub use convert::{ToolConverter, WebFontConverter};
pub use error::{Error, Result};
pub use pipeline::{Packager, process};
pub use settings::{Config, ConfigBuilder, FontInfo, MetaInfo, PackageOptions};
pub use subset::{PyftSubset, Subsetter};

/// Bail out of the current function with an [`Error::GenericError`].
///
/// Works in any function whose error type converts from [`Error`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::GenericError(format!($($arg)*)).into())
    };
}
