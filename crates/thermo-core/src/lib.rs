//! Classification and renaming engine.
//!
//! This crate turns a folder of raw measurement files into the canonical
//! thermal-cycle layout:
//!
//! - **Classify**: per-format grouping strategies ([`classify`])
//! - **Renumber**: sequential `1..N` naming by extracted number ([`renamer`])
//! - **Map**: `<direction>_<temperature>` naming from a profile ([`mapper`])
//! - **Pipeline**: the single entry point tying the stages together ([`pipeline`])
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use thermo_core::run;
//! use thermo_model::ProfileId;
//!
//! let report = run(Path::new("run_42"), ProfileId::Steps23)?;
//! for notice in report.notices() {
//!     println!("{notice}");
//! }
//! ```

pub mod classify;
pub mod error;
pub mod fs_ops;
pub mod mapper;
pub mod pipeline;
pub mod renamer;

pub use classify::{FormatClassifier, Scope, classifier_for};
pub use error::{RenameError, Result};
pub use mapper::{map_profile, plan_mapping};
pub use pipeline::{process_scope, run, run_with_options};
pub use renamer::{RenumberPlan, plan_renumber, renumber};
