use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use recast_model::{BatchReport, FillStrategy, TableOutcome, TransformPlan};

/// Per-table success/failure summary printed after a batch run.
pub fn print_summary(report: &BatchReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows In"),
        header_cell("Rows Out"),
        header_cell("Skipped"),
        header_cell("Missing"),
        header_cell("Status"),
        header_cell("Detail"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_read = 0usize;
    let mut total_written = 0usize;
    let mut total_skipped = 0usize;
    let mut total_missing = 0usize;
    for outcome in &report.outcomes {
        match outcome {
            TableOutcome::Converted(table_report) => {
                total_read += table_report.rows_read;
                total_written += table_report.rows_written;
                total_skipped += table_report.rows_skipped;
                total_missing += table_report.missing_fields;
                table.add_row(vec![
                    Cell::new(&table_report.table),
                    Cell::new(table_report.rows_read),
                    Cell::new(table_report.rows_written),
                    count_cell(table_report.rows_skipped, Color::Yellow),
                    count_cell(table_report.missing_fields, Color::Yellow),
                    Cell::new("OK")
                        .fg(Color::Green)
                        .add_attribute(Attribute::Bold),
                    Cell::new(table_report.output.display().to_string()),
                ]);
            }
            TableOutcome::Skipped { table: name, reason } => {
                table.add_row(vec![
                    Cell::new(name),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new("SKIP").fg(Color::Yellow),
                    Cell::new(reason),
                ]);
            }
            TableOutcome::Failed { table: name, error } => {
                table.add_row(vec![
                    Cell::new(name),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new("FAIL")
                        .fg(Color::Red)
                        .add_attribute(Attribute::Bold),
                    Cell::new(error),
                ]);
            }
        }
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_read).add_attribute(Attribute::Bold),
        Cell::new(total_written).add_attribute(Attribute::Bold),
        count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(total_missing, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(format!(
            "{} converted, {} skipped, {} failed",
            report.converted(),
            report.skipped(),
            report.failed()
        )),
    ]);
    println!("{table}");
}

/// Compiled plan rendered for `recast check`.
pub fn print_plan(plan: &TransformPlan) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Strategy"),
        header_cell("Source"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in plan.columns().iter().enumerate() {
        let (strategy, source, default) = match &column.fill {
            FillStrategy::Copy { source } => ("copy", Some(source.as_str()), None),
            FillStrategy::Constant { value } => ("constant", None, Some(value.as_str())),
            FillStrategy::CopyOrDefault { source, default } => {
                ("fallback", Some(source.as_str()), Some(default.as_str()))
            }
        };
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(strategy),
            text_or_dash(source),
            text_or_dash(default),
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

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color)
    } else {
        dim_cell(value)
    }
}

fn text_or_dash(value: Option<&str>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
