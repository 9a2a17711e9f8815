//! Data model for the thermal-cycle file renamer.
//!
//! Shared by the ingest, core and CLI crates:
//! - [`Format`]: the closed set of managed file kinds
//! - [`ThermalProfile`] / [`ProfileId`]: the predefined heating/cooling cycles
//! - [`FileRecord`] / [`GroupKey`]: listed files and their run groups
//! - [`RenamePlan`]: one-to-one rename mappings
//! - [`RunReport`]: per-file outcomes and notices of a run
//! - [`PipelineOptions`]: folder names and prefixes

pub mod format;
pub mod options;
pub mod plan;
pub mod profile;
pub mod record;
pub mod report;

pub use format::Format;
pub use options::{OptionsError, PipelineOptions};
pub use plan::{PlanError, RenameEntry, RenamePlan};
pub use profile::{Direction, ProfileId, ProfileParseError, ProfileStep, ThermalProfile};
pub use record::{FileRecord, GroupKey};
pub use report::{
    FormatReport, Notice, NoticeKind, RenameEvent, RunReport, ScopeReport, Severity, Stage,
};
