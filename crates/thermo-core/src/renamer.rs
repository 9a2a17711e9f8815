//! Sequential renumbering of one folder.
//!
//! Files are ordered by their extracted sequence number and renamed to
//! `1<ext>`, `2<ext>`, ... Equal numbers are ordered by filename. Files
//! without a number keep their name and hold no position.

use std::path::Path;

use thermo_ingest::list_records;
use thermo_model::{FileRecord, Format, Notice, NoticeKind, RenamePlan, ScopeReport, Stage};
use tracing::{info, warn};

use crate::error::{RenameError, Result};
use crate::fs_ops::apply_plan;

/// Renumbering decision for one set of records.
#[derive(Debug, Clone, Default)]
pub struct RenumberPlan {
    /// Source name to positional name, in position order.
    pub plan: RenamePlan,
    /// Records left out because their names carry no digits.
    pub unnumbered: Vec<FileRecord>,
}

/// Orders `records` and assigns positions `1..=N`.
pub fn plan_renumber(records: &[FileRecord], format: Format) -> Result<RenumberPlan> {
    let (numbered, unnumbered): (Vec<&FileRecord>, Vec<&FileRecord>) =
        records.iter().partition(|record| record.has_number());

    let mut ordered = numbered;
    ordered.sort_by(|a, b| {
        a.extracted_number
            .cmp(&b.extracted_number)
            .then_with(|| a.original_name.cmp(&b.original_name))
    });

    let mut plan = RenamePlan::new();
    for (index, record) in ordered.iter().enumerate() {
        let target = format.file_name(&(index + 1).to_string());
        plan.push(record.original_name.clone(), target)?;
    }

    Ok(RenumberPlan {
        plan,
        unnumbered: unnumbered.into_iter().cloned().collect(),
    })
}

/// Renumbers the `format` files of `folder` and records the outcome in `scope`.
///
/// With `selection` set only those records are renumbered; otherwise the
/// folder is listed. Returns the number of files holding a position.
pub fn renumber(
    folder: &Path,
    format: Format,
    selection: Option<Vec<FileRecord>>,
    scope: &mut ScopeReport,
) -> usize {
    if !folder.is_dir() {
        warn!(path = %folder.display(), "folder not found");
        scope
            .notices
            .push(Notice::new(folder, NoticeKind::FolderNotFound));
        return 0;
    }

    let records = match selection {
        Some(records) => records,
        None => match list_records(folder, format) {
            Ok(records) => records,
            Err(err) => {
                let kind = RenameError::from(err).into_notice_kind();
                scope.notices.push(Notice::new(folder, kind));
                return 0;
            }
        },
    };

    if records.is_empty() {
        info!(path = %folder.display(), format = %format, "no files to renumber");
        scope.notices.push(Notice::new(folder, NoticeKind::NothingToDo));
        return 0;
    }

    let RenumberPlan { plan, unnumbered } = match plan_renumber(&records, format) {
        Ok(plan) => plan,
        Err(err) => {
            scope.notices.push(Notice::new(folder, err.into_notice_kind()));
            return 0;
        }
    };

    for record in &unnumbered {
        let path = folder.join(&record.original_name);
        warn!(path = %path.display(), "no sequence number, excluded from renumbering");
        scope.notices.push(Notice::new(path, NoticeKind::Unnumbered));
    }

    let unchanged = plan.len() - plan.pending().count();
    let applied = apply_plan(
        folder,
        &plan,
        Stage::Renumber,
        &mut scope.events,
        &mut scope.notices,
    );
    let positions = unchanged + applied;
    scope.positions = positions;
    info!(
        path = %folder.display(),
        format = %format,
        positions,
        renamed = applied,
        "renumbering complete"
    );
    positions
}
