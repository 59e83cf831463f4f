use thousands::Separable;

use crate::entities::{LayoutResult, LayoutStatus};

/// Percentage with at most one decimal and a decimal comma, `"–"` for missing, non-finite or negative values.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => {
            let rounded = (v * 10.0).round() / 10.0;
            let digits = match rounded.fract() == 0.0 {
                true => format!("{rounded:.0}"),
                false => format!("{rounded:.1}").replace('.', ","),
            };
            format!("{digits} %")
        }
        _ => "–".to_string(),
    }
}

/// `"81 pieces"`, extended with `" (≈ 7 sheets)"` when the required sheets are known
pub fn pieces_text(pieces: usize, required_sheets: Option<u64>) -> String {
    let mut text = format!("{} pieces", pieces.separate_with_dots());
    if let Some(sheets) = required_sheets {
        text.push_str(&format!(" (≈ {} sheets)", sheets.separate_with_dots()));
    }
    text
}

/// `"9 side-by-side × 9 rows"`
pub fn layout_text(columns: usize, rows: usize) -> String {
    format!("{columns} side-by-side × {rows} rows")
}

/// Text of the pieces column: the piece count if anything fits, otherwise why not
pub fn outcome_text(result: &LayoutResult) -> String {
    match result.status {
        LayoutStatus::Fits => pieces_text(result.pieces, result.required_sheets),
        LayoutStatus::NoFit => "does not fit on the sheet".to_string(),
        LayoutStatus::InsufficientMargin => "too much margin, no space".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Some(87.54), "87,5 %"; "one decimal")]
    #[test_case(Some(90.0), "90 %"; "no trailing zero")]
    #[test_case(Some(99.96), "100 %"; "rounds up")]
    #[test_case(Some(0.0), "0 %"; "zero")]
    #[test_case(None, "–"; "missing")]
    #[test_case(Some(-1.0), "–"; "negative")]
    #[test_case(Some(f64::NAN), "–"; "nan")]
    fn percent_formatting(value: Option<f64>, expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[test]
    fn pieces_with_and_without_quantity() {
        assert_eq!(pieces_text(81, None), "81 pieces");
        assert_eq!(pieces_text(81, Some(7)), "81 pieces (≈ 7 sheets)");
        assert_eq!(pieces_text(4, Some(12_500)), "4 pieces (≈ 12.500 sheets)");
        assert_eq!(layout_text(14, 6), "14 side-by-side × 6 rows");
    }
}
