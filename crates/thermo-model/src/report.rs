//! Outcome reporting for a pipeline run.
//!
//! Nothing the pipeline skips is dropped silently: every skip, exclusion and
//! failure becomes a [`Notice`], and every completed rename a [`RenameEvent`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::format::Format;
use crate::profile::ProfileId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// What kind of condition a notice reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoticeKind {
    /// The scope folder does not exist.
    FolderNotFound,
    /// No files of the format were found.
    NothingToDo,
    /// File has no digits and keeps its name.
    Unnumbered,
    /// File already carries a final profile name and is left alone.
    Finalized,
    /// Surface files disagree on whether they carry a number.
    InconsistentNaming { numbered: usize, unnumbered: usize },
    /// Only one surface file; nothing to reorder.
    SingleSurfaceFile,
    /// Composite surface scans are never renamed.
    CompositeSurfaceSkipped,
    /// Image file matched neither the acquisition nor the composite prefix.
    Unmatched,
    /// Profile position has no renumbered file.
    PositionNotFound { position: usize },
    /// Rename target already exists; the source keeps its name.
    TargetExists { target: String },
    /// Renumbered file count differs from the profile length.
    ProfileLengthMismatch { expected: usize, found: usize },
    /// Any other filesystem failure.
    Unexpected { message: String },
}

impl NoticeKind {
    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::NothingToDo
            | NoticeKind::SingleSurfaceFile
            | NoticeKind::Finalized
            | NoticeKind::ProfileLengthMismatch { .. } => Severity::Info,
            NoticeKind::Unnumbered
            | NoticeKind::InconsistentNaming { .. }
            | NoticeKind::CompositeSurfaceSkipped
            | NoticeKind::Unmatched
            | NoticeKind::PositionNotFound { .. }
            | NoticeKind::TargetExists { .. } => Severity::Warning,
            NoticeKind::FolderNotFound | NoticeKind::Unexpected { .. } => Severity::Error,
        }
    }
}

/// A reported condition tied to a file or folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub path: PathBuf,
    #[serde(flatten)]
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(path: impl Into<PathBuf>, kind: NoticeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        match &self.kind {
            NoticeKind::FolderNotFound => write!(f, "{path}: folder not found"),
            NoticeKind::NothingToDo => write!(f, "{path}: nothing to do"),
            NoticeKind::Unnumbered => write!(f, "{path}: no sequence number, left unrenamed"),
            NoticeKind::Finalized => write!(f, "{path}: already has a final name"),
            NoticeKind::InconsistentNaming {
                numbered,
                unnumbered,
            } => write!(
                f,
                "{path}: inconsistent naming ({numbered} numbered, {unnumbered} unnumbered), renaming skipped"
            ),
            NoticeKind::SingleSurfaceFile => {
                write!(f, "{path}: only one surface file, renaming skipped")
            }
            NoticeKind::CompositeSurfaceSkipped => {
                write!(f, "{path}: composite surface file skipped")
            }
            NoticeKind::Unmatched => write!(f, "{path}: no run prefix, ignored"),
            NoticeKind::PositionNotFound { position } => {
                write!(f, "{path}: position {position} not found, skipping")
            }
            NoticeKind::TargetExists { target } => {
                write!(f, "{path}: target '{target}' already exists, skipping")
            }
            NoticeKind::ProfileLengthMismatch { expected, found } => write!(
                f,
                "{path}: profile has {expected} positions but {found} files were renumbered"
            ),
            NoticeKind::Unexpected { message } => write!(f, "{path}: {message}"),
        }
    }
}

/// Pipeline stage that performed a rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Moved into a group subfolder.
    Move,
    /// Renamed to its position.
    Renumber,
    /// Renamed to its profile label.
    Map,
}

/// A completed rename or move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEvent {
    pub stage: Stage,
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Result of renumbering (and possibly mapping) one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeReport {
    /// Short label, e.g. `csv`, `acq`, `comp3`.
    pub label: String,
    pub folder: PathBuf,
    pub format: Format,
    /// Files holding a position after renumbering.
    pub positions: usize,
    pub events: Vec<RenameEvent>,
    pub notices: Vec<Notice>,
}

impl ScopeReport {
    pub fn new(label: impl Into<String>, folder: impl Into<PathBuf>, format: Format) -> Self {
        Self {
            label: label.into(),
            folder: folder.into(),
            format,
            positions: 0,
            events: Vec::new(),
            notices: Vec::new(),
        }
    }

    pub fn count(&self, stage: Stage) -> usize {
        self.events.iter().filter(|event| event.stage == stage).count()
    }
}

/// Result of classifying one format in the working folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatReport {
    pub format: Format,
    /// Moves into subfolders.
    pub moves: Vec<RenameEvent>,
    /// Classification notices (skips, unmatched files, move failures).
    pub notices: Vec<Notice>,
    pub scopes: Vec<ScopeReport>,
}

impl FormatReport {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            moves: Vec::new(),
            notices: Vec::new(),
            scopes: Vec::new(),
        }
    }
}

/// Full outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub folder: PathBuf,
    pub profile: ProfileId,
    pub formats: Vec<FormatReport>,
}

impl RunReport {
    pub fn new(folder: impl Into<PathBuf>, profile: ProfileId) -> Self {
        Self {
            folder: folder.into(),
            profile,
            formats: Vec::new(),
        }
    }

    /// Every notice, classification notices first, in processing order.
    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.formats.iter().flat_map(|format| {
            format
                .notices
                .iter()
                .chain(format.scopes.iter().flat_map(|scope| scope.notices.iter()))
        })
    }

    /// Every completed move and rename in processing order.
    pub fn events(&self) -> impl Iterator<Item = &RenameEvent> {
        self.formats.iter().flat_map(|format| {
            format
                .moves
                .iter()
                .chain(format.scopes.iter().flat_map(|scope| scope.events.iter()))
        })
    }

    pub fn scopes(&self) -> impl Iterator<Item = &ScopeReport> {
        self.formats.iter().flat_map(|format| format.scopes.iter())
    }

    pub fn error_count(&self) -> usize {
        self.notices()
            .filter(|notice| notice.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.notices()
            .filter(|notice| notice.severity() == Severity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
