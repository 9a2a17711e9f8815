//! Working-folder ingestion for the thermal-cycle renamer.
//!
//! This crate lists measurement files by [`Format`](thermo_model::Format) and
//! extracts the sequence number embedded in each filename.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use thermo_ingest::list_records;
//! use thermo_model::Format;
//!
//! let records = list_records(Path::new("run_42/csv"), Format::Tabular)?;
//! ```

mod discovery;
mod error;
mod extract;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{list_format_files, list_records, record_for};

// === Name Parsing ===
pub use extract::{composite_run_id, extract_number};
