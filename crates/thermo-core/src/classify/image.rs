//! Image files: one folder per acquisition or composite run.

use std::collections::BTreeMap;
use std::path::Path;

use thermo_ingest::composite_run_id;
use thermo_model::{FileRecord, Format, FormatReport, GroupKey, Notice, NoticeKind, PipelineOptions};
use tracing::{debug, warn};

use super::{FormatClassifier, Scope, list_root, move_records, prepare_folder};

/// Splits images by filename prefix.
///
/// `acq*` files form the acquisition group; `comp<id>*` files form one group
/// per run id. Anything else stays in place.
pub struct ImageClassifier;

/// Group of an image filename, or `None` when it matches neither prefix.
pub fn group_of(name: &str, options: &PipelineOptions) -> Option<GroupKey> {
    if name.starts_with(&options.acquisition_prefix) {
        return Some(GroupKey::Acquisition);
    }
    composite_run_id(name, &options.composite_prefix).map(GroupKey::Composite)
}

impl FormatClassifier for ImageClassifier {
    fn format(&self) -> Format {
        Format::Image
    }

    fn description(&self) -> &'static str {
        "Split images into acquisition and composite-run folders"
    }

    fn classify(
        &self,
        root: &Path,
        options: &PipelineOptions,
        report: &mut FormatReport,
    ) -> Vec<Scope> {
        let Some(records) = list_root(root, Format::Image, report) else {
            return Vec::new();
        };
        if records.is_empty() {
            debug!(path = %root.display(), "no image files");
            report.notices.push(Notice::new(root, NoticeKind::NothingToDo));
            return Vec::new();
        }

        let mut groups: BTreeMap<GroupKey, Vec<FileRecord>> = BTreeMap::new();
        for record in records {
            match group_of(&record.original_name, options) {
                Some(key) => groups.entry(key).or_default().push(record),
                None => {
                    let path = root.join(&record.original_name);
                    warn!(path = %path.display(), "image matches no run prefix, ignored");
                    report.notices.push(Notice::new(path, NoticeKind::Unmatched));
                }
            }
        }

        let mut scopes = Vec::with_capacity(groups.len());
        for (key, members) in groups {
            let label = key.folder_name(options);
            let folder = root.join(&label);
            debug!(group = %key, files = members.len(), "image group");
            if !prepare_folder(&folder, report) {
                continue;
            }
            let arrivals = move_records(root, &folder, &members, report);
            scopes.push(Scope::new(label, folder, Format::Image).with_arrivals(arrivals));
        }
        scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefixes_pick_groups() {
        let options = PipelineOptions::default();
        assert_eq!(group_of("acq_9.tif", &options), Some(GroupKey::Acquisition));
        assert_eq!(group_of("comp3_0007.tif", &options), Some(GroupKey::Composite(3)));
        assert_eq!(group_of("comp_7.tif", &options), None);
        assert_eq!(group_of("overview_1.tif", &options), None);
    }

    #[test]
    fn splits_runs_into_folders() {
        let dir = TempDir::new().unwrap();
        for name in [
            "acq_9.tif",
            "acq_10.tif",
            "comp3_0007.tif",
            "comp3_0008.tif",
            "comp12_0001.tif",
            "overview.tif",
        ] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let mut report = FormatReport::new(Format::Image);

        let scopes = ImageClassifier.classify(dir.path(), &PipelineOptions::default(), &mut report);

        let labels: Vec<&str> = scopes.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["acq", "comp3", "comp12"]);
        assert!(dir.path().join("comp3/comp3_0007.tif").exists());
        assert!(dir.path().join("acq/acq_9.tif").exists());
        assert!(dir.path().join("comp12/comp12_0001.tif").exists());
        assert!(dir.path().join("overview.tif").exists());
        assert_eq!(report.moves.len(), 5);
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].kind, NoticeKind::Unmatched);
    }

    #[test]
    fn oversized_run_id_stays_unmatched() {
        let dir = TempDir::new().unwrap();
        for name in ["comp99999999999999999999_1.tif", "comp18446744073709551615_1.tif"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let mut report = FormatReport::new(Format::Image);

        let scopes = ImageClassifier.classify(dir.path(), &PipelineOptions::default(), &mut report);

        assert_eq!(scopes.len(), 1);
        assert!(
            dir.path()
                .join("comp18446744073709551615/comp18446744073709551615_1.tif")
                .exists()
        );
        assert!(dir.path().join("comp99999999999999999999_1.tif").exists());
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].kind, NoticeKind::Unmatched);
    }

    #[test]
    fn empty_folder_has_nothing_to_do() {
        let dir = TempDir::new().unwrap();
        let mut report = FormatReport::new(Format::Image);

        let scopes = ImageClassifier.classify(dir.path(), &PipelineOptions::default(), &mut report);

        assert!(scopes.is_empty());
        assert_eq!(report.notices[0].kind, NoticeKind::NothingToDo);
        assert!(!dir.path().join("acq").exists());
    }
}
