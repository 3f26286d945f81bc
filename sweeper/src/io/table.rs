//! Plain-text results table.

use crate::core::types::DrawResult;

const HEADERS: [&str; 2] = ["Entrant", "Pick"];

/// Render `result` as a boxed two-column table, rows sorted by entrant.
///
/// ```text
/// +---------+---------+
/// | Entrant | Pick    |
/// +---------+---------+
/// | Harold  | Bills   |
/// +---------+---------+
/// ```
pub fn render_table(result: &DrawResult) -> String {
    let rows: Vec<[&str; 2]> = result
        .sorted_by_entrant()
        .into_iter()
        .map(|pairing| [pairing.entrant.as_str(), pairing.pick.as_str()])
        .collect();

    let mut widths = HEADERS.map(width);
    for row in &rows {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(width(cell));
        }
    }

    let border = border(&widths);
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&line(&HEADERS, &widths));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&line(row, &widths));
    }
    out.push_str(&border);
    out
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize; 2]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');
    out
}

fn line(cells: &[&str; 2], widths: &[usize; 2]) -> String {
    let mut out = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width - self::width(cell);
        out.push(' ');
        out.push_str(cell);
        out.push_str(&" ".repeat(padding + 1));
        out.push('|');
    }
    out.push('\n');
    out
}
