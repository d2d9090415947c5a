use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use riv_cli::pipeline::GenerateOutcome;
use riv_codegen::to_identifier;
use riv_container::ParsedRiv;
use riv_model::{Diagnostic, Severity};

pub fn print_generate_summary(outcome: &GenerateOutcome) {
    let resolution = &outcome.resolution;
    let artifacts = &outcome.artifacts;
    println!("Names from: {}", resolution.origin);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Artboard"),
        header_cell("Identifier"),
        header_cell("State machines"),
    ]);
    apply_summary_table_style(&mut table);
    for name in &resolution.result.artboards {
        let machines = resolution
            .result
            .state_machines
            .get(name)
            .filter(|machines| !machines.is_empty())
            .map_or_else(|| dim_cell("-"), |machines| Cell::new(machines.join(", ")));
        table.add_row(vec![
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(to_identifier(name)),
            machines,
        ]);
    }
    println!("{table}");

    let mut files = Table::new();
    files.set_header(vec![header_cell("File"), header_cell("Bytes")]);
    apply_table_style(&mut files);
    align_column(&mut files, 1, CellAlignment::Right);
    for (path, file) in outcome.written.iter().zip(&artifacts.files) {
        files.add_row(vec![
            Cell::new(path.display()),
            Cell::new(file.contents.len()),
        ]);
    }
    println!("{files}");

    if artifacts.has_state_machines() {
        println!(
            "State machines: {}",
            artifacts.state_machine_names.join(", ")
        );
    }
    print_diagnostics(&resolution.diagnostics);
    print_diagnostics(&artifacts.diagnostics);
}

pub fn print_inspect_summary(path: &Path, parsed: &ParsedRiv) {
    println!("File: {}", path.display());
    println!(
        "Version: {}.{} (file id {})",
        parsed.header.major_version, parsed.header.minor_version, parsed.header.file_id
    );

    let mut toc = Table::new();
    toc.set_header(vec![header_cell("Property key"), header_cell("Kind")]);
    apply_table_style(&mut toc);
    align_column(&mut toc, 0, CellAlignment::Right);
    for entry in parsed.toc.entries() {
        toc.add_row(vec![Cell::new(entry.key), Cell::new(entry.kind.label())]);
    }
    if !parsed.toc.is_empty() {
        println!("{toc}");
    }

    let mut artboards = Table::new();
    artboards.set_header(vec![header_cell("Offset"), header_cell("Artboard")]);
    apply_summary_table_style(&mut artboards);
    align_column(&mut artboards, 0, CellAlignment::Right);
    for record in &parsed.artboards {
        let name = if record.name.is_empty() {
            dim_cell("(anonymous)")
        } else {
            Cell::new(&record.name)
        };
        artboards.add_row(vec![Cell::new(record.offset), name]);
    }
    println!("{artboards}");
    println!("Other records skipped: {}", parsed.skipped_records);
    if let Some(error) = &parsed.interrupted {
        eprintln!("warning: decoding stopped early: {error}");
    }
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Source"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for diagnostic in diagnostics {
        table.add_row(vec![
            severity_cell(diagnostic.severity),
            Cell::new(diagnostic.source),
            Cell::new(&diagnostic.message),
        ]);
    }
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    let color = match severity {
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::DarkGrey,
    };
    Cell::new(severity.label()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
