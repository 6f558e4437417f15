//! Terminal summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fixings_core::NormalizeReport;
use fixings_market::{Fixing, InterestRate};
use fixings_output::{format_date, format_rate};

pub fn print_normalize_summary(report: &NormalizeReport) {
    println!("Output: {}", report.output_path.display());
    println!("Series: {}", report.series);

    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Dropped (missing value)"),
        count_cell(stats.dropped_missing),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (out of range)"),
        count_cell(stats.dropped_out_of_range),
    ]);
    table.add_row(vec![
        Cell::new("Written").add_attribute(Attribute::Bold),
        Cell::new(stats.rows_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    match (report.first_date, report.last_date) {
        (Some(first), Some(last)) => {
            println!("Range: {} .. {}", format_date(first), format_date(last));
        }
        _ => println!("Range: (empty)"),
    }
}

pub fn print_fixings(fixings: &[Fixing], limit: usize) {
    if let Some(first) = fixings.first() {
        println!("Conventions: {}", conventions_label(&first.interest_rate));
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Date"),
        header_cell("Adjusted"),
        header_cell("Rate"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);

    for fixing in fixings.iter().take(limit) {
        let adjusted = if fixing.adjusted_date == fixing.date {
            dim_cell(format_date(fixing.adjusted_date))
        } else {
            Cell::new(format_date(fixing.adjusted_date)).fg(Color::Yellow)
        };
        table.add_row(vec![
            Cell::new(format_date(fixing.date)),
            adjusted,
            Cell::new(format_rate(fixing.rate)),
        ]);
    }
    println!("{table}");
    if fixings.len() > limit {
        println!("... {} more", fixings.len() - limit);
    }
}

/// One-line description of the conventions attached to a rate.
pub fn conventions_label(rate: &InterestRate) -> String {
    let conventions = rate.conventions();
    let periods = conventions.frequency.periods_per_year();
    format!(
        "{:?}, {:?}, {:?} ({periods}/year)",
        conventions.day_count, conventions.compounding, conventions.frequency
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
