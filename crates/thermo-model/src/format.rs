//! Managed file formats.
//!
//! Every file the renamer touches belongs to exactly one [`Format`]. The set is
//! closed so that per-format behavior is matched exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// The three measurement output formats handled by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Tabular data exports (`.csv`).
    Tabular,
    /// Microscope images (`.tif`).
    Image,
    /// Surface-scan files (`.sur`).
    Surface,
}

impl Format {
    /// Processing order used by the pipeline.
    pub const ALL: [Format; 3] = [Format::Tabular, Format::Image, Format::Surface];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Tabular => "csv",
            Format::Image => "tif",
            Format::Surface => "sur",
        }
    }

    /// File extension including the leading dot, as used in generated names.
    pub fn dotted_extension(self) -> &'static str {
        match self {
            Format::Tabular => ".csv",
            Format::Image => ".tif",
            Format::Surface => ".sur",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::Tabular => "tabular",
            Format::Image => "image",
            Format::Surface => "surface",
        }
    }

    /// Whether renumbered files of this format receive thermal profile names.
    ///
    /// Surface scans stop at the positional `<n>.sur` name.
    pub fn applies_profile(self) -> bool {
        match self {
            Format::Tabular | Format::Image => true,
            Format::Surface => false,
        }
    }

    /// Returns true if the path carries this format's extension (case-insensitive).
    pub fn matches_path(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(self.extension()))
    }

    /// Builds the filename `<stem>.<ext>` for this format.
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}{}", self.dotted_extension())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(Format::Tabular.matches_path(&PathBuf::from("run_01.CSV")));
        assert!(Format::Image.matches_path(&PathBuf::from("acq_9.tif")));
        assert!(!Format::Image.matches_path(&PathBuf::from("acq_9.tiff")));
        assert!(!Format::Surface.matches_path(&PathBuf::from("sur")));
    }

    #[test]
    fn only_surface_skips_profile() {
        assert!(Format::Tabular.applies_profile());
        assert!(Format::Image.applies_profile());
        assert!(!Format::Surface.applies_profile());
    }
}
