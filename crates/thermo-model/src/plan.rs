//! Rename plans for a single folder.

use std::collections::BTreeSet;
use thiserror::Error;

/// A plan entry that would break the one-to-one mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("'{name}' is already scheduled as a rename source")]
    DuplicateSource { name: String },
    #[error("'{name}' is already scheduled as a rename target")]
    DuplicateTarget { name: String },
}

/// One scheduled rename inside a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub from: String,
    pub to: String,
}

impl RenameEntry {
    /// True when the file already carries its target name.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Source-to-target filename mapping for one group.
///
/// Sources and targets are each unique, so applying the plan can never
/// produce two files with the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    entries: Vec<RenameEntry>,
    sources: BTreeSet<String>,
    targets: BTreeSet<String>,
}

impl RenamePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<(), PlanError> {
        let from = from.into();
        let to = to.into();
        if self.sources.contains(&from) {
            return Err(PlanError::DuplicateSource { name: from });
        }
        if self.targets.contains(&to) {
            return Err(PlanError::DuplicateTarget { name: to });
        }
        self.sources.insert(from.clone());
        self.targets.insert(to.clone());
        self.entries.push(RenameEntry { from, to });
        Ok(())
    }

    pub fn entries(&self) -> &[RenameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose file actually changes name.
    pub fn pending(&self) -> impl Iterator<Item = &RenameEntry> {
        self.entries.iter().filter(|entry| !entry.is_noop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_targets() {
        let mut plan = RenamePlan::new();
        plan.push("a_3.csv", "1.csv").unwrap();
        let err = plan.push("b_3.csv", "1.csv").unwrap_err();
        assert_eq!(
            err,
            PlanError::DuplicateTarget {
                name: "1.csv".to_string()
            }
        );
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn rejects_duplicate_sources() {
        let mut plan = RenamePlan::new();
        plan.push("a.csv", "1.csv").unwrap();
        assert!(matches!(
            plan.push("a.csv", "2.csv"),
            Err(PlanError::DuplicateSource { .. })
        ));
    }

    #[test]
    fn pending_skips_noops() {
        let mut plan = RenamePlan::new();
        plan.push("1.csv", "1.csv").unwrap();
        plan.push("7.csv", "2.csv").unwrap();
        let pending: Vec<_> = plan.pending().map(|entry| entry.from.as_str()).collect();
        assert_eq!(pending, vec!["7.csv"]);
        assert_eq!(plan.len(), 2);
    }
}
