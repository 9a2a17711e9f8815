//! Configuration options for the renaming pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or checking [`PipelineOptions`].
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse options file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A folder name or prefix is empty or contains a path separator.
    #[error("invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

/// Folder names and filename prefixes used to classify and regroup files.
///
/// Every field has a default, so a rules file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Destination folder for tabular files.
    pub tabular_folder: String,
    /// Destination folder for surface-scan files.
    pub surface_folder: String,
    /// Destination folder for acquisition images.
    pub acquisition_folder: String,
    /// Filename prefix marking acquisition files.
    pub acquisition_prefix: String,
    /// Filename prefix marking composite-run files; the run id follows it.
    pub composite_prefix: String,
    /// Folder prefix for composite runs (`<prefix><run id>`).
    pub composite_folder_prefix: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            tabular_folder: "csv".to_string(),
            surface_folder: "sur".to_string(),
            acquisition_folder: "acq".to_string(),
            acquisition_prefix: "acq".to_string(),
            composite_prefix: "comp".to_string(),
            composite_folder_prefix: "comp".to_string(),
        }
    }
}

impl PipelineOptions {
    /// Loads options from a JSON file and validates them.
    pub fn from_json_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let options: PipelineOptions =
            serde_json::from_str(&content).map_err(|source| OptionsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        options.validate()?;
        Ok(options)
    }

    /// Rejects empty values and folder names that would escape the working folder.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let fields = [
            ("tabular_folder", &self.tabular_folder),
            ("surface_folder", &self.surface_folder),
            ("acquisition_folder", &self.acquisition_folder),
            ("acquisition_prefix", &self.acquisition_prefix),
            ("composite_prefix", &self.composite_prefix),
            ("composite_folder_prefix", &self.composite_folder_prefix),
        ];
        for (field, value) in fields {
            let trimmed = value.trim();
            if trimmed.is_empty()
                || trimmed == "."
                || trimmed == ".."
                || trimmed.contains(['/', '\\'])
            {
                return Err(OptionsError::InvalidValue {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_folder_layout() {
        let options = PipelineOptions::default();
        assert_eq!(options.tabular_folder, "csv");
        assert_eq!(options.surface_folder, "sur");
        assert_eq!(options.acquisition_folder, "acq");
        assert_eq!(options.composite_prefix, "comp");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let options: PipelineOptions =
            serde_json::from_str(r#"{"tabular_folder": "tables"}"#).unwrap();
        assert_eq!(options.tabular_folder, "tables");
        assert_eq!(options.surface_folder, "sur");
    }

    #[test]
    fn rejects_nested_folder_names() {
        let options = PipelineOptions {
            surface_folder: "../out".to_string(),
            ..PipelineOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(
            err,
            OptionsError::InvalidValue {
                field: "surface_folder",
                ..
            }
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{"acquisition_prefix": "frame"}"#).unwrap();
        let options = PipelineOptions::from_json_file(&path).unwrap();
        assert_eq!(options.acquisition_prefix, "frame");

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            PipelineOptions::from_json_file(&path),
            Err(OptionsError::Parse { .. })
        ));
    }
}
