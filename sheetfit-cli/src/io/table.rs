use std::fmt::Write;

use sheetfit::entities::LayoutStatus;
use sheetfit::io::ext_repr::{ExtLayoutRow, ExtReport};
use sheetfit::io::text;

const HEADER: [&str; 6] = ["", "#", "Format", "Orientation", "Pieces", "Layout"];
const EFFICIENCY_HEADER: &str = "Efficiency";
const RECOMMENDED_MARKER: &str = "★";

/// Renders the exported report as a plain text table, one line per format and orientation.
///
/// Recommended rows are marked with a star. Rotated rows identical to the normal ones are left out
/// unless `show_duplicates` is set, in which case they are flagged.
pub fn render_table(report: &ExtReport, show_duplicates: bool) -> String {
    let lines = report
        .rows
        .iter()
        .filter(|row| show_duplicates || !row.duplicate)
        .map(row_cells)
        .collect::<Vec<_>>();

    let mut header = HEADER.map(String::from).to_vec();
    header.push(EFFICIENCY_HEADER.to_string());

    let n_cols = header.len();
    let widths = (0..n_cols)
        .map(|c| {
            std::iter::once(&header)
                .chain(&lines)
                .map(|l| l[c].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let mut table = String::new();
    for line in std::iter::once(&header).chain(&lines) {
        let cells = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(cell, w))
            .collect::<Vec<_>>();
        let _ = writeln!(table, "{}", cells.join("  ").trim_end());
    }

    match report.n_recommended {
        0 => table.push_str("no format fits the product\n"),
        1 => {
            let _ = writeln!(table, "{RECOMMENDED_MARKER} recommended");
        }
        n => {
            let _ = writeln!(table, "{RECOMMENDED_MARKER} recommended, {n} equally good options");
        }
    }
    table
}

fn row_cells(row: &ExtLayoutRow) -> Vec<String> {
    let marker = match row.recommended {
        true => RECOMMENDED_MARKER,
        false => "",
    };
    let orientation = match row.duplicate {
        true => format!("{} (same as normal)", row.orientation.label()),
        false => row.orientation.label().to_string(),
    };
    let (pieces, layout, efficiency) = match row.status {
        LayoutStatus::Fits => (
            text::pieces_text(row.pieces, row.required_sheets),
            text::layout_text(row.columns, row.rows),
            text::format_percent(row.efficiency),
        ),
        LayoutStatus::NoFit => (
            "does not fit on the sheet".to_string(),
            "–".to_string(),
            "–".to_string(),
        ),
        LayoutStatus::InsufficientMargin => (
            "too much margin, no space".to_string(),
            "–".to_string(),
            "–".to_string(),
        ),
    };
    vec![
        marker.to_string(),
        (row.format_index + 1).to_string(),
        row.format.name.clone(),
        orientation,
        pieces,
        layout,
        efficiency,
    ]
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}
