//! Error types for the renaming engine.

use std::path::PathBuf;

use thermo_ingest::IngestError;
use thermo_model::{NoticeKind, PlanError};
use thiserror::Error;

/// Errors raised by a single filesystem step.
///
/// Apart from a missing working folder these never abort a run; the pipeline
/// turns them into notices via [`RenameError::into_notice_kind`].
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to create folder {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} already exists")]
    TargetExists { path: PathBuf },
}

impl RenameError {
    /// Maps the error onto the notice taxonomy.
    pub fn into_notice_kind(self) -> NoticeKind {
        match self {
            RenameError::FolderNotFound { .. }
            | RenameError::Ingest(IngestError::DirectoryNotFound { .. }) => {
                NoticeKind::FolderNotFound
            }
            RenameError::TargetExists { path } => NoticeKind::TargetExists {
                target: path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            },
            other => NoticeKind::Unexpected {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, RenameError>;
