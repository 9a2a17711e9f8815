//! Per-format grouping strategies.
//!
//! Each [`Format`] hands out one [`FormatClassifier`]. A classifier looks at the
//! working folder, moves the files it owns into their group subfolders and
//! returns the [`Scope`]s the pipeline renumbers next.
//!
//! | Format  | Strategy                                   | Profile mapped |
//! |---------|--------------------------------------------|----------------|
//! | tabular | everything into one folder                 | yes            |
//! | image   | one folder per acquisition / composite run | yes            |
//! | surface | consistency gate, then one folder          | no             |

mod image;
mod surface;
mod tabular;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thermo_ingest::list_records;
use thermo_model::{FileRecord, Format, FormatReport, Notice, PipelineOptions};
use tracing::{info, warn};

use crate::error::RenameError;
use crate::fs_ops::{ensure_dir, move_into};

pub use image::ImageClassifier;
pub use surface::SurfaceClassifier;
pub use tabular::TabularClassifier;

/// One folder the pipeline renumbers after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Short label for reporting, normally the folder name.
    pub label: String,
    pub folder: PathBuf,
    pub format: Format,
    /// Whether the renumbered files get thermal profile names.
    pub apply_profile: bool,
    /// Files moved into `folder` by this run; always treated as raw input.
    pub arrivals: BTreeSet<String>,
}

impl Scope {
    pub fn new(label: impl Into<String>, folder: PathBuf, format: Format) -> Self {
        Self {
            label: label.into(),
            folder,
            format,
            apply_profile: format.applies_profile(),
            arrivals: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_arrivals(mut self, arrivals: BTreeSet<String>) -> Self {
        self.arrivals = arrivals;
        self
    }
}

/// Grouping strategy for one format.
pub trait FormatClassifier: Send + Sync {
    /// The format this classifier handles.
    fn format(&self) -> Format;

    /// Returns a human-readable description of the strategy.
    fn description(&self) -> &'static str;

    /// Moves this format's files out of `root` into group folders.
    ///
    /// Moves and notices are recorded in `report`. Returns the scopes to
    /// renumber, in processing order.
    fn classify(
        &self,
        root: &Path,
        options: &PipelineOptions,
        report: &mut FormatReport,
    ) -> Vec<Scope>;
}

static TABULAR: TabularClassifier = TabularClassifier;
static IMAGE: ImageClassifier = ImageClassifier;
static SURFACE: SurfaceClassifier = SurfaceClassifier;

/// Returns the grouping strategy for `format`.
pub fn classifier_for(format: Format) -> &'static dyn FormatClassifier {
    match format {
        Format::Tabular => &TABULAR,
        Format::Image => &IMAGE,
        Format::Surface => &SURFACE,
    }
}

/// Lists `root` for `format`, recording a notice when the listing fails.
fn list_root(root: &Path, format: Format, report: &mut FormatReport) -> Option<Vec<FileRecord>> {
    match list_records(root, format) {
        Ok(records) => Some(records),
        Err(err) => {
            let err = RenameError::from(err);
            warn!(path = %root.display(), error = %err, "failed to list folder");
            report.notices.push(Notice::new(root, err.into_notice_kind()));
            None
        }
    }
}

/// Creates `dir` if needed, recording a notice on failure.
fn prepare_folder(dir: &Path, report: &mut FormatReport) -> bool {
    match ensure_dir(dir) {
        Ok(created) => {
            if created {
                info!(path = %dir.display(), "created group folder");
            }
            true
        }
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "failed to create group folder");
            report.notices.push(Notice::new(dir, err.into_notice_kind()));
            false
        }
    }
}

/// Moves the listed files from `root` into `dir`, recording each outcome.
///
/// Returns the names that arrived in `dir`.
fn move_records(
    root: &Path,
    dir: &Path,
    records: &[FileRecord],
    report: &mut FormatReport,
) -> BTreeSet<String> {
    let mut arrived = BTreeSet::new();
    for record in records {
        let source = root.join(&record.original_name);
        match move_into(&source, dir) {
            Ok(event) => {
                info!(from = %event.from.display(), to = %event.to.display(), "moved");
                report.moves.push(event);
                arrived.insert(record.original_name.clone());
            }
            Err(err) => {
                warn!(path = %source.display(), error = %err, "move failed");
                report.notices.push(Notice::new(source, err.into_notice_kind()));
            }
        }
    }
    arrived
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_format_has_a_classifier() {
        for format in Format::ALL {
            assert_eq!(classifier_for(format).format(), format);
            assert!(!classifier_for(format).description().is_empty());
        }
    }

    #[test]
    fn surface_scopes_skip_profile() {
        let scope = Scope::new("sur", PathBuf::from("run/sur"), Format::Surface);
        assert!(!scope.apply_profile);
        let scope = Scope::new("csv", PathBuf::from("run/csv"), Format::Tabular);
        assert!(scope.apply_profile);
    }
}
