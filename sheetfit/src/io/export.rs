use crate::calc::{CandidateKey, Report};
use crate::entities::{Orientation, SheetFormat};
use crate::io::ext_repr::{ExtLayoutRow, ExtMargins, ExtProduct, ExtReport, ExtSheetFormat};

pub fn export_format(format: &SheetFormat) -> ExtSheetFormat {
    ExtSheetFormat {
        name: format.name().to_string(),
        width: format.width(),
        height: format.height(),
    }
}

/// Exports a report computed over `formats` (the same slice that was passed to [`compute`](crate::calc::compute)).
///
/// # Panics
/// If `formats` does not hold one format per evaluation of `report`.
pub fn export_report(report: &Report, formats: &[SheetFormat]) -> ExtReport {
    assert_eq!(
        report.evaluations.len(),
        formats.len(),
        "report was computed over a different catalog"
    );

    let rows = report
        .evaluations
        .iter()
        .zip(formats)
        .flat_map(|(eval, format)| {
            Orientation::ALL.into_iter().map(move |orientation| {
                let result = eval.result(orientation);
                let key = CandidateKey {
                    format_index: eval.format_index,
                    orientation,
                };
                ExtLayoutRow {
                    format_index: eval.format_index,
                    format: export_format(format),
                    orientation,
                    status: result.status,
                    columns: result.columns,
                    rows: result.rows,
                    pieces: result.pieces,
                    efficiency: result.efficiency,
                    required_sheets: result.required_sheets,
                    duplicate: eval.is_duplicate(orientation),
                    recommended: report.is_recommended(key),
                }
            })
        })
        .collect();

    ExtReport {
        product: ExtProduct {
            width: report.product.width(),
            height: report.product.height(),
        },
        margins: ExtMargins {
            registration: report.margins.registration(),
            gripper_width: report.margins.gripper_width(),
            gripper_side: report.margins.gripper_side(),
        },
        quantity: report.quantity,
        rows,
        n_recommended: report.recommended.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::compute;
    use crate::entities::{Catalog, GripperSide, LayoutStatus, MarginConfig, Product};

    #[test]
    fn one_row_per_format_and_orientation() {
        let catalog = Catalog::builtin();
        let product = Product::try_new(100.0, 70.0).unwrap();
        let margins = MarginConfig::new(5.0, 10.0, GripperSide::Left);
        let report = compute(&product, catalog.formats(), &margins, Some(500));
        let ext = export_report(&report, catalog.formats());

        assert_eq!(ext.rows.len(), 16);
        assert_eq!(ext.rows[4].format.name, "1000 × 700 mm");
        assert_eq!(ext.rows[5].orientation, Orientation::Rotated);
        assert_eq!(ext.rows[5].pieces, 84);
        assert_eq!(ext.n_recommended, ext.rows.iter().filter(|r| r.recommended).count());
        assert_eq!(ext.margins.gripper_side, GripperSide::Left);

        let json = serde_json::to_value(&ext).unwrap();
        assert_eq!(json["rows"][5]["status"], "fits");
        assert_eq!(json["rows"][5]["recommended"], true);
        assert_eq!(json["quantity"], 500);
    }

    #[test]
    fn no_fit_rows_omit_efficiency() {
        let formats = [SheetFormat::try_new("small", 100.0, 100.0).unwrap()];
        let product = Product::try_new(200.0, 50.0).unwrap();
        let report = compute(&product, &formats, &MarginConfig::none(), None);
        let ext = export_report(&report, &formats);
        assert_eq!(ext.rows[0].status, LayoutStatus::NoFit);
        let json = serde_json::to_value(&ext.rows[0]).unwrap();
        assert!(json.get("efficiency").is_none());
        assert_eq!(ext.n_recommended, 0);
    }

    #[test]
    #[should_panic(expected = "report was computed over a different catalog")]
    fn mismatched_catalog_panics() {
        let catalog = Catalog::builtin();
        let product = Product::try_new(100.0, 70.0).unwrap();
        let report = compute(&product, catalog.formats(), &MarginConfig::none(), None);
        export_report(&report, &catalog.formats()[..3]);
    }
}
