//! Tabular files: one folder for everything.

use std::path::Path;

use thermo_model::{Format, FormatReport, PipelineOptions};

use super::{FormatClassifier, Scope, list_root, move_records, prepare_folder};

/// Moves every tabular file into the tabular folder.
///
/// The folder is created even when no new files arrive, so it is always
/// renumbered.
pub struct TabularClassifier;

impl FormatClassifier for TabularClassifier {
    fn format(&self) -> Format {
        Format::Tabular
    }

    fn description(&self) -> &'static str {
        "Collect all tabular exports into one folder"
    }

    fn classify(
        &self,
        root: &Path,
        options: &PipelineOptions,
        report: &mut FormatReport,
    ) -> Vec<Scope> {
        let Some(records) = list_root(root, Format::Tabular, report) else {
            return Vec::new();
        };

        let folder = root.join(&options.tabular_folder);
        if !prepare_folder(&folder, report) {
            return Vec::new();
        }
        let arrivals = move_records(root, &folder, &records, report);

        vec![
            Scope::new(options.tabular_folder.clone(), folder, Format::Tabular)
                .with_arrivals(arrivals),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn moves_all_tabular_files() {
        let dir = TempDir::new().unwrap();
        for name in ["T_25.csv", "T_50.csv", "summary.csv", "acq_1.tif"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        let mut report = FormatReport::new(Format::Tabular);

        let scopes = TabularClassifier.classify(dir.path(), &PipelineOptions::default(), &mut report);

        assert_eq!(scopes.len(), 1);
        assert_eq!(scopes[0].folder, dir.path().join("csv"));
        assert_eq!(report.moves.len(), 3);
        assert!(dir.path().join("csv/summary.csv").exists());
        assert_eq!(scopes[0].arrivals.len(), 3);
        assert!(scopes[0].arrivals.contains("T_25.csv"));
        assert!(dir.path().join("acq_1.tif").exists());
    }

    #[test]
    fn creates_folder_without_files() {
        let dir = TempDir::new().unwrap();
        let mut report = FormatReport::new(Format::Tabular);

        let scopes = TabularClassifier.classify(dir.path(), &PipelineOptions::default(), &mut report);

        assert_eq!(scopes.len(), 1);
        assert!(dir.path().join("csv").is_dir());
        assert!(report.moves.is_empty());
    }
}
