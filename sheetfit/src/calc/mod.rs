mod layout;
mod ranking;
mod report;

#[doc(inline)]
pub use layout::grid_layout;

#[doc(inline)]
pub use ranking::{is_duplicate, recommend};

#[doc(inline)]
pub use report::{CandidateKey, FormatEvaluation, Report};

use log::{debug, info};

use crate::entities::{LayoutResult, MarginConfig, Orientation, Product, SheetFormat};
use crate::util::assertions;

/// Evaluates every format of `formats` in both orientations and ranks the outcomes.
///
/// Pure: no state is kept between calls and identical inputs produce identical reports.
/// Formats where the margins leave no usable area, or where the product does not fit, are reported
/// through their [`LayoutStatus`](crate::entities::LayoutStatus) and excluded from the ranking.
pub fn compute(
    product: &Product,
    formats: &[SheetFormat],
    margins: &MarginConfig,
    quantity: Option<u64>,
) -> Report {
    let evaluations = formats
        .iter()
        .enumerate()
        .map(|(i, format)| evaluate_format(i, format, product, margins, quantity))
        .collect::<Vec<_>>();

    let recommended = recommend(&evaluations);

    let report = Report {
        product: *product,
        margins: *margins,
        quantity,
        evaluations,
        recommended,
    };

    match report.best() {
        Some((key, best)) => info!(
            "[CALC] best: {} ({}), {} pieces, {} recommended",
            formats[key.format_index].name(),
            key.orientation,
            best.pieces,
            report.recommended.len()
        ),
        None => info!("[CALC] product does not fit on any of the {} formats", formats.len()),
    }

    debug_assert!(assertions::report_is_consistent(&report));

    report
}

/// Evaluates a single format in both orientations
pub fn evaluate_format(
    format_index: usize,
    format: &SheetFormat,
    product: &Product,
    margins: &MarginConfig,
    quantity: Option<u64>,
) -> FormatEvaluation {
    let Some(usable_size) = margins.usable_size(format) else {
        debug!("[CALC] {}: insufficient margin, no usable area", format.name());
        return FormatEvaluation {
            format_index,
            usable_size: None,
            normal: LayoutResult::insufficient_margin(Orientation::Normal),
            rotated: LayoutResult::insufficient_margin(Orientation::Rotated),
            rotated_is_duplicate: false,
        };
    };

    let normal = grid_layout(usable_size, product, Orientation::Normal, quantity);
    let rotated = grid_layout(usable_size, product, Orientation::Rotated, quantity);
    let rotated_is_duplicate = is_duplicate(&normal, &rotated);

    debug!(
        "[CALC] {}: usable {:.1} x {:.1}, normal {} pieces, rotated {} pieces{}",
        format.name(),
        usable_size.0,
        usable_size.1,
        normal.pieces,
        rotated.pieces,
        if rotated_is_duplicate { " (duplicate)" } else { "" }
    );

    FormatEvaluation {
        format_index,
        usable_size: Some(usable_size),
        normal,
        rotated,
        rotated_is_duplicate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Catalog, GripperSide, LayoutStatus};

    fn format(w: f64, h: f64) -> SheetFormat {
        SheetFormat::try_new(format!("{w} × {h} mm"), w, h).unwrap()
    }

    #[test]
    fn rotated_wins_on_reference_sheet() {
        let formats = [format(1000.0, 700.0)];
        let margins = MarginConfig::new(5.0, 10.0, GripperSide::Left);
        let product = Product::try_new(100.0, 70.0).unwrap();
        let report = compute(&product, &formats, &margins, Some(500));

        let eval = &report.evaluations[0];
        assert_eq!(eval.usable_size, Some((980.0, 690.0)));
        assert_eq!(eval.normal.pieces, 81);
        assert_eq!(eval.normal.required_sheets, Some(7));
        assert_eq!(eval.rotated.pieces, 84);
        assert_eq!(eval.rotated.required_sheets, Some(6));
        assert!(!eval.rotated_is_duplicate);

        let expected = CandidateKey {
            format_index: 0,
            orientation: Orientation::Rotated,
        };
        assert_eq!(report.recommended, vec![expected]);
    }

    #[test]
    fn square_product_suppresses_rotated() {
        let formats = [format(700.0, 500.0)];
        let margins = MarginConfig::new(3.0, 0.0, GripperSide::None);
        let product = Product::try_new(50.0, 50.0).unwrap();
        let report = compute(&product, &formats, &margins, None);

        let eval = &report.evaluations[0];
        assert_eq!((eval.normal.columns, eval.normal.rows), (13, 9));
        assert_eq!(
            eval.rotated,
            LayoutResult {
                orientation: Orientation::Rotated,
                ..eval.normal
            }
        );
        assert!(eval.rotated_is_duplicate);
        assert_eq!(report.candidates().count(), 1);
        assert_eq!(report.recommended.len(), 1);
        assert_eq!(report.recommended[0].orientation, Orientation::Normal);
    }

    #[test]
    fn nothing_fits_means_no_recommendation() {
        let formats = Catalog::builtin();
        let product = Product::try_new(2000.0, 1500.0).unwrap();
        let report = compute(&product, formats.formats(), &MarginConfig::none(), Some(100));
        assert!(report.recommended.is_empty());
        assert!(report.best().is_none());
        assert!(report
            .evaluations
            .iter()
            .all(|e| e.normal.status == LayoutStatus::NoFit && e.rotated.status == LayoutStatus::NoFit));
    }

    #[test]
    fn insufficient_margin_does_not_affect_other_formats() {
        let formats = [format(100.0, 100.0), format(1000.0, 700.0)];
        let margins = MarginConfig::new(60.0, 0.0, GripperSide::None);
        let product = Product::try_new(100.0, 70.0).unwrap();
        let report = compute(&product, &formats, &margins, None);

        let small = &report.evaluations[0];
        assert_eq!(small.usable_size, None);
        assert_eq!(small.normal.status, LayoutStatus::InsufficientMargin);
        assert_eq!(small.rotated.status, LayoutStatus::InsufficientMargin);
        assert!(report.recommended.iter().all(|k| k.format_index == 1));
        assert!(!report.recommended.is_empty());
    }
}
