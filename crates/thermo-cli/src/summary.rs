//! Terminal tables for run reports and the profile listing.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thermo_model::{
    FormatReport, ProfileId, RunReport, ScopeReport, Severity, Stage, ThermalProfile,
};

pub fn print_summary(report: &RunReport) {
    println!("Folder: {}", report.folder.display());
    println!(
        "Profile: {} ({}, {} positions)",
        report.profile,
        report.profile.peak_label(),
        report.profile.profile().len()
    );
    println!("{}", scope_table(report));
    if let Some(table) = notice_table(report) {
        println!();
        println!("Notices:");
        println!("{table}");
    }
    println!(
        "{} renamed, {} warnings, {} errors",
        report.events().count(),
        report.warning_count(),
        report.error_count()
    );
}

/// One row per renumbered folder plus a total row.
pub fn scope_table(report: &RunReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Scope"),
        header_cell("Format"),
        header_cell("Moved"),
        header_cell("Positions"),
        header_cell("Renumbered"),
        header_cell("Mapped"),
        header_cell("Notices"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = [0usize; 5];
    for format in &report.formats {
        for scope in &format.scopes {
            let row = [
                moved_into(format, scope),
                scope.positions,
                scope.count(Stage::Renumber),
                scope.count(Stage::Map),
                scope.notices.len(),
            ];
            for (total, value) in totals.iter_mut().zip(row) {
                *total += value;
            }
            let mut cells = vec![
                Cell::new(&scope.label)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(scope.format),
            ];
            cells.extend(row[..4].iter().map(|value| count_cell(*value, Color::Green)));
            cells.push(notice_count_cell(scope));
            table.add_row(cells);
        }
    }

    let mut total_row = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
    ];
    total_row.extend(
        totals
            .iter()
            .map(|value| Cell::new(value).add_attribute(Attribute::Bold)),
    );
    table.add_row(total_row);
    table
}

/// Every notice of the run, most severe first; `None` when there are none.
pub fn notice_table(report: &RunReport) -> Option<Table> {
    let mut notices: Vec<_> = report.notices().collect();
    if notices.is_empty() {
        return None;
    }
    notices.sort_by_key(|notice| std::cmp::Reverse(notice.severity()));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Severity"), header_cell("Notice")]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
    align_column(&mut table, 0, CellAlignment::Center);
    for notice in notices {
        table.add_row(vec![severity_cell(notice.severity()), Cell::new(notice)]);
    }
    Some(table)
}

/// Selector, name, peak and sequence of every predefined profile.
pub fn profile_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Selector"),
        header_cell("Profile"),
        header_cell("Peak"),
        header_cell("Positions"),
        header_cell("Sequence"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for id in ProfileId::ALL {
        let profile = id.profile();
        table.add_row(vec![
            Cell::new(id.selector()).add_attribute(Attribute::Bold),
            Cell::new(id),
            Cell::new(id.peak_label()),
            Cell::new(profile.len()),
            Cell::new(sequence_label(profile)),
        ]);
    }
    table
}

/// Temperatures of a profile in position order, comma separated.
pub fn sequence_label(profile: &ThermalProfile) -> String {
    profile
        .sequence
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn moved_into(format: &FormatReport, scope: &ScopeReport) -> usize {
    format
        .moves
        .iter()
        .filter(|event| event.to.parent() == Some(scope.folder.as_path()))
        .count()
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn notice_count_cell(scope: &ScopeReport) -> Cell {
    let worst = scope.notices.iter().map(|notice| notice.severity()).max();
    match worst {
        Some(severity) => Cell::new(scope.notices.len()).fg(severity_color(severity)),
        None => dim_cell(0),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => Cell::new("INFO").fg(Color::DarkGrey),
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Error => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::DarkGrey,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
