//! Sequence number extraction from filenames.

use std::sync::LazyLock;

use regex::Regex;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Returns the value of the first run of ASCII digits in `name`.
///
/// Runs too large for `u64` saturate to `u64::MAX`; the file still counts
/// as numbered.
pub fn extract_number(name: &str) -> Option<u64> {
    let digits = DIGIT_RUN.find(name)?.as_str();
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Returns the run id of a composite file: the digits directly after `prefix`.
///
/// `comp3_0007.tif` with prefix `comp` yields `Some(3)`; `comp_3.tif` and
/// `xcomp3.tif` yield `None`. Ids too large for `u64` yield `None` so that
/// distinct runs never share a folder.
pub fn composite_run_id(name: &str, prefix: &str) -> Option<u64> {
    let rest = name.strip_prefix(prefix)?;
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse::<u64>().ok()
}
