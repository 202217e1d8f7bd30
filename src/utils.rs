use chrono::{Duration, NaiveDate};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::presenter::{TableSurface, COLUMNS};

/// Format a calendar date for display
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a cooldown as a whole number of days
pub fn format_cooldown(cooldown: Duration) -> String {
    match cooldown.num_days() {
        1 => "1 day".to_string(),
        days => format!("{} days", days),
    }
}

/// Pad a cell to a display width, counting wide characters correctly
pub fn pad_cell(value: &str, width: usize) -> String {
    let used = value.width();
    let mut cell = value.to_string();
    if used < width {
        cell.push_str(&" ".repeat(width - used));
    }
    cell
}

/// Print a formatted table border
pub fn print_table_border(width: usize) {
    println!("{}", "=".repeat(width));
}

/// Print a table row with columns
pub fn print_table_row(columns: &[&str], widths: &[usize]) {
    let mut row = String::new();
    for (col, width) in columns.iter().zip(widths) {
        row.push_str(&pad_cell(col, *width));
        row.push_str("  ");
    }
    println!("{}", row.trim_end());
}

/// Column widths that fit the header and every row of the table
pub fn column_widths(table: &TableSurface) -> [usize; 3] {
    let mut widths = COLUMNS.map(|header| header.width());
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

/// Print the donor table as aligned text
pub fn print_donor_table(table: &TableSurface) {
    let widths = column_widths(table);
    let total = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);

    print_table_border(total);
    println!(
        "{}",
        COLUMNS
            .iter()
            .zip(widths)
            .map(|(header, width)| pad_cell(header, width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .yellow()
    );
    print_table_border(total);
    for row in table.rows() {
        print_table_row(&row.cells(), &widths);
    }
    print_table_border(total);
}
