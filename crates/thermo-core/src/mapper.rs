//! Thermal profile mapping of a renumbered folder.

use std::path::Path;

use thermo_model::{
    Format, Notice, NoticeKind, RenamePlan, ScopeReport, Stage, ThermalProfile,
};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::fs_ops::apply_plan;

/// Builds the position-to-label plan for the files present in `folder`.
///
/// Positions without a `<n><ext>` file are returned separately so the caller
/// can report them.
pub fn plan_mapping(
    folder: &Path,
    format: Format,
    profile: &ThermalProfile,
) -> Result<(RenamePlan, Vec<usize>)> {
    let mut plan = RenamePlan::new();
    let mut missing = Vec::new();
    for step in profile.steps() {
        let source = format.file_name(&step.position.to_string());
        if !folder.join(&source).is_file() {
            missing.push(step.position);
            continue;
        }
        plan.push(source, format.file_name(&step.stem()))?;
    }
    Ok((plan, missing))
}

/// Renames `<i><ext>` to `<direction>_<temperature><ext>` for every profile
/// position, recording outcomes in `scope`.
///
/// `positions` is the renumbered file count; a mismatch with the profile
/// length is reported but does not stop the mapping.
pub fn map_profile(
    folder: &Path,
    format: Format,
    profile: &ThermalProfile,
    positions: usize,
    scope: &mut ScopeReport,
) -> usize {
    if !folder.is_dir() {
        warn!(path = %folder.display(), "folder not found");
        scope
            .notices
            .push(Notice::new(folder, NoticeKind::FolderNotFound));
        return 0;
    }

    if positions != profile.len() {
        info!(
            path = %folder.display(),
            expected = profile.len(),
            found = positions,
            "file count differs from profile length"
        );
        scope.notices.push(Notice::new(
            folder,
            NoticeKind::ProfileLengthMismatch {
                expected: profile.len(),
                found: positions,
            },
        ));
    }

    let (plan, missing) = match plan_mapping(folder, format, profile) {
        Ok(planned) => planned,
        Err(err) => {
            scope.notices.push(Notice::new(folder, err.into_notice_kind()));
            return 0;
        }
    };

    for position in missing {
        let path = folder.join(format.file_name(&position.to_string()));
        debug!(path = %path.display(), position, "position not found, skipping");
        scope
            .notices
            .push(Notice::new(path, NoticeKind::PositionNotFound { position }));
    }

    let mapped = apply_plan(folder, &plan, Stage::Map, &mut scope.events, &mut scope.notices);
    info!(
        path = %folder.display(),
        profile = %profile.id,
        mapped,
        "profile mapping complete"
    );
    mapped
}
