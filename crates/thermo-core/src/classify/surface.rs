//! Surface-scan files: consistency gate, then one folder.

use std::collections::BTreeSet;
use std::path::Path;

use thermo_model::{FileRecord, Format, FormatReport, Notice, NoticeKind, PipelineOptions};
use tracing::{info, warn};

use super::{FormatClassifier, Scope, list_root, move_records, prepare_folder};

/// Outcome of the surface consistency gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceGate {
    /// Nothing left after composite files are set aside.
    Empty,
    /// A single file, nothing to reorder.
    Single,
    /// Some names carry a number and some do not.
    Inconsistent { numbered: usize, unnumbered: usize },
    /// Safe to move and renumber.
    Pass,
}

/// Checks that every candidate agrees on whether it carries a number.
pub fn check_gate(candidates: &[FileRecord]) -> SurfaceGate {
    match candidates.len() {
        0 => SurfaceGate::Empty,
        1 => SurfaceGate::Single,
        _ => {
            let shapes: BTreeSet<bool> = candidates.iter().map(FileRecord::has_number).collect();
            if shapes.len() > 1 {
                let numbered = candidates.iter().filter(|r| r.has_number()).count();
                SurfaceGate::Inconsistent {
                    numbered,
                    unnumbered: candidates.len() - numbered,
                }
            } else {
                SurfaceGate::Pass
            }
        }
    }
}

/// Gates surface scans before moving them into the surface folder.
///
/// Composite scans are always left alone. The remaining set is renumbered
/// only when it has more than one file and the names agree on carrying a
/// sequence number; otherwise every file stays where it is.
pub struct SurfaceClassifier;

impl FormatClassifier for SurfaceClassifier {
    fn format(&self) -> Format {
        Format::Surface
    }

    fn description(&self) -> &'static str {
        "Check surface scans for consistent numbering, then collect them"
    }

    fn classify(
        &self,
        root: &Path,
        options: &PipelineOptions,
        report: &mut FormatReport,
    ) -> Vec<Scope> {
        let Some(records) = list_root(root, Format::Surface, report) else {
            return Vec::new();
        };

        let (composite, candidates): (Vec<FileRecord>, Vec<FileRecord>) = records
            .into_iter()
            .partition(|record| record.original_name.starts_with(&options.composite_prefix));

        for record in &composite {
            let path = root.join(&record.original_name);
            info!(path = %path.display(), "composite surface file skipped");
            report
                .notices
                .push(Notice::new(path, NoticeKind::CompositeSurfaceSkipped));
        }

        match check_gate(&candidates) {
            SurfaceGate::Empty => {
                if composite.is_empty() {
                    report.notices.push(Notice::new(root, NoticeKind::NothingToDo));
                }
                Vec::new()
            }
            SurfaceGate::Single => {
                let path = root.join(&candidates[0].original_name);
                info!(path = %path.display(), "only one surface file, renaming skipped");
                report
                    .notices
                    .push(Notice::new(path, NoticeKind::SingleSurfaceFile));
                Vec::new()
            }
            SurfaceGate::Inconsistent {
                numbered,
                unnumbered,
            } => {
                warn!(
                    path = %root.display(),
                    numbered,
                    unnumbered,
                    "inconsistent surface file naming, renaming skipped"
                );
                report.notices.push(Notice::new(
                    root,
                    NoticeKind::InconsistentNaming {
                        numbered,
                        unnumbered,
                    },
                ));
                Vec::new()
            }
            SurfaceGate::Pass => {
                let folder = root.join(&options.surface_folder);
                if !prepare_folder(&folder, report) {
                    return Vec::new();
                }
                let arrivals = move_records(root, &folder, &candidates, report);
                vec![
                    Scope::new(options.surface_folder.clone(), folder, Format::Surface)
                        .with_arrivals(arrivals),
                ]
            }
        }
    }
}
