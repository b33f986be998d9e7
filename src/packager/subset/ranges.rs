//! Subset identifiers and their character ranges.

/// Character ranges for one named subset, in `U+XXXX-YYYY` list syntax as
/// consumed by the subsetting tool.
#[derive(Debug, Clone, Copy)]
pub struct SubsetRanges {
    /// Subset identifier (script/locale name).
    pub id: &'static str,
    /// Comma separated unicode ranges.
    pub ranges: &'static str,
}

/// The subsets this pipeline knows how to generate.
pub const SUBSETS: &[SubsetRanges] = &[
    SubsetRanges {
        id: "latin",
        ranges: "U+0000-00FF,U+0131,U+0152-0153,U+02BB-02BC,U+02C6,U+02DA,U+02DC,\
                 U+2000-206F,U+2074,U+20AC,U+2122,U+2191,U+2193,U+2212,U+2215,U+FEFF,U+FFFD",
    },
    SubsetRanges {
        id: "latin-ext",
        ranges: "U+0100-024F,U+0259,U+1E00-1EFF,U+2020,U+20A0-20AB,U+20AD-20CF,\
                 U+2113,U+2C60-2C7F,U+A720-A7FF",
    },
    SubsetRanges {
        id: "cyrillic",
        ranges: "U+0400-045F,U+0490-0491,U+04B0-04B1,U+2116",
    },
    SubsetRanges {
        id: "cyrillic-ext",
        ranges: "U+0460-052F,U+1C80-1C88,U+20B4,U+2DE0-2DFF,U+A640-A69F,U+FE2E-FE2F",
    },
    SubsetRanges {
        id: "greek",
        ranges: "U+0370-03FF",
    },
    SubsetRanges {
        id: "greek-ext",
        ranges: "U+1F00-1FFF",
    },
    SubsetRanges {
        id: "vietnamese",
        ranges: "U+0102-0103,U+0110-0111,U+0128-0129,U+0168-0169,U+01A0-01A1,\
                 U+01AF-01B0,U+1EA0-1EF9,U+20AB",
    },
];

/// Looks up the ranges for a subset id.
pub fn ranges_for(id: &str) -> Option<&'static str> {
    SUBSETS.iter().find(|s| s.id == id).map(|s| s.ranges)
}

/// Checks whether a subset id is known.
pub fn is_known(id: &str) -> bool {
    ranges_for(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_covers_basic_and_supplement() {
        let ranges = ranges_for("latin").expect("latin subset");
        assert!(ranges.starts_with("U+0000-00FF"));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert!(is_known("cyrillic"));
        assert!(!is_known("klingon"));
    }
}
