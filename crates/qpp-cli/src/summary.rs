use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use qpp_cli::types::{DocumentResult, TemplateRow, ValidateResult};

pub fn print_summary(result: &ValidateResult) {
    println!("Measures: {}", result.measures_source.display());
    println!("Measures SHA-256: {}", result.measures_sha256);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Status"),
        header_cell("Single"),
        header_cell("Cross"),
        header_cell("Required"),
        header_cell("Errors"),
        header_cell("Report"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_errors = 0usize;
    for document in &result.documents {
        let counts = document.report.phase_counts;
        total_errors += document.report.error_count();
        table.add_row(vec![
            document_cell(document),
            status_cell(document.report.is_valid()),
            count_cell(counts.single_node, Color::Red),
            count_cell(counts.cross_node, Color::Red),
            count_cell(counts.missing_required, Color::Red),
            count_cell(document.report.error_count(), Color::Red).add_attribute(Attribute::Bold),
            match &document.report_path {
                Some(path) => Cell::new(path.display()),
                None => dim_cell("-"),
            },
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(total_errors, Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_error_table(result);
    if result.has_failures() {
        eprintln!("Not validated:");
        for failure in &result.failures {
            eprintln!("- {}: {:#}", failure.source.display(), failure.error);
        }
    }
}

fn print_error_table(result: &ValidateResult) {
    if !result.has_errors {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("Node"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for document in &result.documents {
        for error in document.report.iter() {
            table.add_row(vec![
                Cell::new(&document.metadata.file_name).fg(Color::Blue),
                Cell::new(error.path.as_str()).fg(Color::DarkGrey),
                Cell::new(&error.message),
            ]);
        }
    }
    println!();
    println!("Errors:");
    println!("{table}");
}

pub fn print_templates(rows: &[TemplateRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Label"),
        header_cell("Validator"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.template)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&row.label),
            match &row.validator {
                Some(name) => Cell::new(name),
                None => dim_cell("-"),
            },
            if row.required {
                Cell::new("✓")
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                dim_cell("-")
            },
        ]);
    }
    println!("{table}");
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn document_cell(document: &DocumentResult) -> Cell {
    Cell::new(&document.metadata.file_name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("VALID").fg(Color::Green)
    } else {
        Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
