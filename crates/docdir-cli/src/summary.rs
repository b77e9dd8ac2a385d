//! Table rendering for the filtered directory.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use docdir_core::FilterStore;
use docdir_model::{ConsultationMode, DoctorRecord};

pub fn print_directory(store: &FilterStore) {
    println!(
        "Doctors: {} of {} shown",
        store.visible().len(),
        store.records().len()
    );
    if store.query().is_empty() {
        println!("Filters: none (default view)");
    } else {
        println!("Share query: ?{}", store.query());
    }
    if store.visible().is_empty() {
        println!("No doctors match the current filters.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Specialties"),
        header_cell("Exp (yrs)"),
        header_cell("Fee"),
        header_cell("Mode"),
        header_cell("Locality"),
        header_cell("Clinic"),
    ]);
    apply_directory_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for doctor in store.visible() {
        table.add_row(vec![
            name_cell(&doctor.name),
            text_cell(&doctor.specialties.join(", ")),
            Cell::new(doctor.experience_years),
            Cell::new(doctor.fee),
            mode_cell(doctor.consultation_mode),
            text_cell(&doctor.locality),
            text_cell(&doctor.clinic_name),
        ]);
    }
    println!("{table}");
    print_qualifications(store.visible());
}

/// One line per doctor that has recognized qualifications; the table stays
/// narrow and the detail lives below it.
fn print_qualifications(visible: &[DoctorRecord]) {
    let with_qualifications: Vec<&DoctorRecord> = visible
        .iter()
        .filter(|doctor| !doctor.qualifications.is_empty())
        .collect();
    if with_qualifications.is_empty() {
        return;
    }
    println!();
    println!("Qualifications:");
    for doctor in with_qualifications {
        println!("- {}: {}", doctor.name, doctor.qualifications.join("; "));
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_directory_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn mode_cell(mode: ConsultationMode) -> Cell {
    match mode {
        ConsultationMode::VideoConsult => Cell::new(mode.as_str()).fg(Color::Green),
        ConsultationMode::InClinic => Cell::new(mode.as_str()).fg(Color::Yellow),
        ConsultationMode::Both => Cell::new(mode.as_str()).fg(Color::Cyan),
    }
}

fn text_cell(value: &str) -> Cell {
    if value.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(value)
    }
}
