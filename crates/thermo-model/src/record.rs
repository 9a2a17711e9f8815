//! Listed files and run groups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::format::Format;
use crate::options::PipelineOptions;

/// A file observed in one directory listing.
///
/// Records are snapshots: once the file is renamed the record is stale and the
/// folder must be listed again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Filename as listed (no directory component).
    pub original_name: String,
    pub format: Format,
    /// First digit run in the filename, if any.
    pub extracted_number: Option<u64>,
}

impl FileRecord {
    pub fn has_number(&self) -> bool {
        self.extracted_number.is_some()
    }
}

/// Run identity of an image group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupKey {
    /// Plain acquisition frames.
    Acquisition,
    /// Frames of one composite run.
    Composite(u64),
}

impl GroupKey {
    /// Subfolder that owns the group's files.
    pub fn folder_name(&self, options: &PipelineOptions) -> String {
        match self {
            GroupKey::Acquisition => options.acquisition_folder.clone(),
            GroupKey::Composite(run_id) => format!("{}{run_id}", options.composite_folder_prefix),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Acquisition => write!(f, "acquisition"),
            GroupKey::Composite(run_id) => write!(f, "composite run {run_id}"),
        }
    }
}
