//! Run pipeline with explicit stages.
//!
//! For each format, in order tabular, image, surface:
//! 1. **Classify**: move the format's files into their group folders
//! 2. **Renumber**: rename each group folder's files to `1..N`
//! 3. **Map**: rename positions to `<direction>_<temperature>` (not surface)
//!
//! Each stage lists the folder again instead of reusing an earlier listing.
//! A skipped or failed scope never stops the others.

use std::path::Path;

use thermo_ingest::list_records;
use thermo_model::{
    FileRecord, Format, FormatReport, Notice, NoticeKind, PipelineOptions, ProfileId, RunReport,
    ScopeReport, ThermalProfile,
};
use tracing::{info, info_span};

use crate::classify::{Scope, classifier_for};
use crate::error::{RenameError, Result};
use crate::mapper::map_profile;
use crate::renamer::renumber;

/// Runs the full pipeline on `folder` with default options.
pub fn run(folder: &Path, profile: ProfileId) -> Result<RunReport> {
    run_with_options(folder, profile, &PipelineOptions::default())
}

/// Runs the full pipeline on `folder`.
///
/// Fails only when `folder` itself is missing; everything else is reported
/// in the returned [`RunReport`].
pub fn run_with_options(
    folder: &Path,
    profile: ProfileId,
    options: &PipelineOptions,
) -> Result<RunReport> {
    if !folder.is_dir() {
        return Err(RenameError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }

    let run_span = info_span!("run", folder = %folder.display(), profile = %profile);
    let _run_guard = run_span.enter();

    let mut report = RunReport::new(folder, profile);
    for format in Format::ALL {
        let format_span = info_span!("format", format = %format);
        let format_report = format_span.in_scope(|| process_format(folder, format, profile, options));
        report.formats.push(format_report);
    }

    info!(
        renamed = report.events().count(),
        warnings = report.warning_count(),
        errors = report.error_count(),
        "run complete"
    );
    Ok(report)
}

fn process_format(
    root: &Path,
    format: Format,
    profile: ProfileId,
    options: &PipelineOptions,
) -> FormatReport {
    let classifier = classifier_for(format);
    let mut report = FormatReport::new(format);
    let scopes = classifier.classify(root, options, &mut report);
    info!(
        strategy = classifier.description(),
        moved = report.moves.len(),
        scopes = scopes.len(),
        "classification complete"
    );

    for scope in scopes {
        let scope_span = info_span!("scope", label = %scope.label);
        let scope_report = scope_span.in_scope(|| process_scope(&scope, profile));
        report.scopes.push(scope_report);
    }
    report
}

/// Renumbers one scope and maps it when its format carries profile names.
pub fn process_scope(scope: &Scope, profile: ProfileId) -> ScopeReport {
    let mut report = ScopeReport::new(scope.label.clone(), scope.folder.clone(), scope.format);

    let selection = if scope.apply_profile {
        match select_unfinished(scope, profile.profile(), &mut report) {
            Some(records) => Some(records),
            None => return report,
        }
    } else {
        None
    };

    let positions = renumber(&scope.folder, scope.format, selection, &mut report);
    if scope.apply_profile && positions > 0 {
        map_profile(
            &scope.folder,
            scope.format,
            profile.profile(),
            positions,
            &mut report,
        );
    }
    report
}

/// Lists the scope folder, setting aside files an earlier run already mapped.
///
/// A file counts as mapped only when it was in the folder before this run
/// and its stem is a label of `profile`. Files moved in by this run are raw
/// input whatever their name. Returns `None` (with a notice) when the folder
/// cannot be listed.
fn select_unfinished(
    scope: &Scope,
    profile: &ThermalProfile,
    report: &mut ScopeReport,
) -> Option<Vec<FileRecord>> {
    let folder = scope.folder.as_path();
    let records = match list_records(folder, scope.format) {
        Ok(records) => records,
        Err(err) => {
            let kind = RenameError::from(err).into_notice_kind();
            report.notices.push(Notice::new(folder, kind));
            return None;
        }
    };

    let (finished, pending): (Vec<FileRecord>, Vec<FileRecord>) =
        records.into_iter().partition(|record| {
            !scope.arrivals.contains(&record.original_name)
                && Path::new(&record.original_name)
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .is_some_and(|stem| profile.is_label(stem))
        });
    for record in finished {
        let path = folder.join(&record.original_name);
        info!(path = %path.display(), "already has a final name, left unchanged");
        report.notices.push(Notice::new(path, NoticeKind::Finalized));
    }
    Some(pending)
}
