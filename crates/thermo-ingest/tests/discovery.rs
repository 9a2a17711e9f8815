//! Tests for format discovery in a working folder.

use std::fs;
use std::path::{Path, PathBuf};

use thermo_ingest::{list_format_files, list_records};
use thermo_model::Format;

fn touch(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "x").expect("write file");
    path
}

#[test]
fn partitions_mixed_folder_by_format() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    touch(dir.path(), "T_25C_003.csv");
    touch(dir.path(), "T_50C_004.csv");
    touch(dir.path(), "acq_9.tif");
    touch(dir.path(), "comp3_0007.tif");
    touch(dir.path(), "overview.sur");
    touch(dir.path(), "readme.md");

    let csv = list_format_files(dir.path(), Format::Tabular).expect("list csv");
    let tif = list_format_files(dir.path(), Format::Image).expect("list tif");
    let sur = list_format_files(dir.path(), Format::Surface).expect("list sur");

    assert_eq!(csv.len(), 2);
    assert_eq!(tif.len(), 2);
    assert_eq!(sur.len(), 1);
}

#[test]
fn records_carry_first_digit_run() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    touch(dir.path(), "T_25C_003.csv");
    touch(dir.path(), "summary.csv");

    let records = list_records(dir.path(), Format::Tabular).expect("records");
    let numbers: Vec<(String, Option<u64>)> = records
        .into_iter()
        .map(|r| (r.original_name, r.extracted_number))
        .collect();
    assert_eq!(
        numbers,
        vec![
            ("T_25C_003.csv".to_string(), Some(25)),
            ("summary.csv".to_string(), None),
        ]
    );
}
