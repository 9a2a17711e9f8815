//! Filesystem steps shared by the classifier, renamer and mapper.

use std::path::{Path, PathBuf};

use thermo_model::{Notice, NoticeKind, RenameEntry, RenameEvent, RenamePlan, Stage};
use tracing::{debug, error, info, warn};

use crate::error::{RenameError, Result};

/// Suffix of the hidden name a file holds between the two rename passes.
const PENDING_SUFFIX: &str = ".pending";

/// Creates `dir` if it does not exist yet. Returns true when it was created.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|source| RenameError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(path = %dir.display(), "created folder");
    Ok(true)
}

/// Moves `file` into `dir`, keeping its filename.
///
/// Refuses to replace an existing file of the same name.
pub fn move_into(file: &Path, dir: &Path) -> Result<RenameEvent> {
    let name = file.file_name().ok_or_else(|| RenameError::Rename {
        from: file.to_path_buf(),
        to: dir.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let destination = dir.join(name);
    if destination.exists() {
        return Err(RenameError::TargetExists { path: destination });
    }
    rename(file, &destination)?;
    Ok(RenameEvent {
        stage: Stage::Move,
        from: file.to_path_buf(),
        to: destination,
    })
}

fn rename(from: &Path, to: &Path) -> Result<()> {
    std::fs::rename(from, to).map_err(|source| RenameError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn pending_name(entry: &RenameEntry) -> String {
    format!(".{}{PENDING_SUFFIX}", entry.to)
}

/// True when `target` is taken by a file the plan does not move away.
fn target_blocked(folder: &Path, plan: &RenamePlan, entry: &RenameEntry) -> bool {
    if !folder.join(&entry.to).exists() {
        return false;
    }
    // Case-only renames see their own source on case-insensitive filesystems.
    !plan
        .entries()
        .iter()
        .any(|other| other.from.eq_ignore_ascii_case(&entry.to))
}

/// Applies `plan` inside `folder` in two passes.
///
/// Every changing file is first moved to a hidden pending name, then to its
/// target, so targets that are also sources never collide. Entries whose
/// target is held by an unrelated file are skipped. Failures are recorded as
/// notices and the remaining entries continue.
pub fn apply_plan(
    folder: &Path,
    plan: &RenamePlan,
    stage: Stage,
    events: &mut Vec<RenameEvent>,
    notices: &mut Vec<Notice>,
) -> usize {
    let mut staged: Vec<(&RenameEntry, PathBuf)> = Vec::new();

    for entry in plan.pending() {
        let source = folder.join(&entry.from);
        if target_blocked(folder, plan, entry) {
            warn!(path = %source.display(), target = %entry.to, "rename target already exists");
            notices.push(Notice::new(
                source,
                NoticeKind::TargetExists {
                    target: entry.to.clone(),
                },
            ));
            continue;
        }
        let pending = folder.join(pending_name(entry));
        if pending.exists() {
            let err = RenameError::TargetExists { path: pending };
            error!(path = %source.display(), error = %err, "pending name in use");
            notices.push(Notice::new(
                source,
                NoticeKind::Unexpected {
                    message: err.to_string(),
                },
            ));
            continue;
        }
        match rename(&source, &pending) {
            Ok(()) => staged.push((entry, pending)),
            Err(err) => {
                error!(path = %source.display(), error = %err, "rename failed");
                notices.push(Notice::new(source, err.into_notice_kind()));
            }
        }
    }

    let mut applied = 0;
    for (entry, pending) in staged {
        let source = folder.join(&entry.from);
        let target = folder.join(&entry.to);
        // The holder of `target` may have failed to stage in the first pass.
        if target.exists() {
            warn!(path = %source.display(), target = %entry.to, "rename target still occupied");
            if let Err(err) = rename(&pending, &source) {
                error!(path = %source.display(), error = %err, "restore failed, file left at pending name");
                notices.push(Notice::new(source.clone(), err.into_notice_kind()));
            }
            notices.push(Notice::new(
                source,
                NoticeKind::TargetExists {
                    target: entry.to.clone(),
                },
            ));
            continue;
        }
        match rename(&pending, &target) {
            Ok(()) => {
                info!(from = %source.display(), to = %target.display(), "renamed");
                events.push(RenameEvent {
                    stage,
                    from: source,
                    to: target,
                });
                applied += 1;
            }
            Err(err) => {
                error!(path = %source.display(), error = %err, "rename failed, file left at pending name");
                notices.push(Notice::new(source, err.into_notice_kind()));
            }
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn swaps_names_without_clobbering() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "1.csv", "first");
        touch(dir.path(), "2.csv", "second");

        let mut plan = RenamePlan::new();
        plan.push("1.csv", "2.csv").unwrap();
        plan.push("2.csv", "1.csv").unwrap();

        let mut events = Vec::new();
        let mut notices = Vec::new();
        let applied = apply_plan(dir.path(), &plan, Stage::Renumber, &mut events, &mut notices);

        assert_eq!(applied, 2);
        assert!(notices.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("1.csv")).unwrap(), "second");
        assert_eq!(fs::read_to_string(dir.path().join("2.csv")).unwrap(), "first");
    }

    #[test]
    fn skips_targets_held_by_other_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "1.csv", "source");
        touch(dir.path(), "0_25.csv", "existing");

        let mut plan = RenamePlan::new();
        plan.push("1.csv", "0_25.csv").unwrap();

        let mut events = Vec::new();
        let mut notices = Vec::new();
        let applied = apply_plan(dir.path(), &plan, Stage::Map, &mut events, &mut notices);

        assert_eq!(applied, 0);
        assert!(events.is_empty());
        assert!(matches!(notices[0].kind, NoticeKind::TargetExists { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("0_25.csv")).unwrap(), "existing");
        assert!(dir.path().join("1.csv").exists());
    }

    #[test]
    fn unstaged_holder_keeps_its_target() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "1.csv", "first");
        touch(dir.path(), "2.csv", "second");
        // Occupies the pending name of 2.csv so it cannot be staged.
        touch(dir.path(), ".3.csv.pending", "stale");

        let mut plan = RenamePlan::new();
        plan.push("1.csv", "2.csv").unwrap();
        plan.push("2.csv", "3.csv").unwrap();

        let mut events = Vec::new();
        let mut notices = Vec::new();
        let applied = apply_plan(dir.path(), &plan, Stage::Renumber, &mut events, &mut notices);

        assert_eq!(applied, 0);
        assert!(events.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("1.csv")).unwrap(), "first");
        assert_eq!(fs::read_to_string(dir.path().join("2.csv")).unwrap(), "second");
        assert!(!dir.path().join(".2.csv.pending").exists());
        assert!(notices.iter().any(|notice| {
            notice.path == dir.path().join("1.csv")
                && matches!(notice.kind, NoticeKind::TargetExists { .. })
        }));
    }

    #[test]
    fn missing_source_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut plan = RenamePlan::new();
        plan.push("ghost.csv", "1.csv").unwrap();

        let mut events = Vec::new();
        let mut notices = Vec::new();
        apply_plan(dir.path(), &plan, Stage::Renumber, &mut events, &mut notices);

        assert_eq!(notices.len(), 1);
        assert!(matches!(notices[0].kind, NoticeKind::Unexpected { .. }));
    }

    #[test]
    fn move_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("csv");
        ensure_dir(&sub).unwrap();
        touch(dir.path(), "a_1.csv", "new");
        touch(&sub, "a_1.csv", "old");

        let err = move_into(&dir.path().join("a_1.csv"), &sub).unwrap_err();
        assert!(matches!(err, RenameError::TargetExists { .. }));
        assert_eq!(fs::read_to_string(sub.join("a_1.csv")).unwrap(), "old");
    }

    #[test]
    fn ensure_dir_reports_creation() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("acq");
        assert!(ensure_dir(&sub).unwrap());
        assert!(!ensure_dir(&sub).unwrap());
    }
}
