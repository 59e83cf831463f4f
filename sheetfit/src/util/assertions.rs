use log::error;

use crate::calc::{FormatEvaluation, Report};
use crate::entities::{LayoutResult, LayoutStatus};
use crate::util::same_score;

//Various checks to verify correctness of the computed reports
//Used in debug_assert!() blocks

pub fn layout_result_is_consistent(result: &LayoutResult) -> bool {
    let pieces_match = result.pieces == result.columns.saturating_mul(result.rows);
    let status_matches = match result.status {
        LayoutStatus::Fits => result.pieces > 0 && result.efficiency.is_some(),
        LayoutStatus::NoFit | LayoutStatus::InsufficientMargin => {
            result.pieces == 0 && result.efficiency.is_none() && result.required_sheets.is_none()
        }
    };
    let efficiency_in_bounds = result
        .efficiency
        .is_none_or(|e| e.is_finite() && (0.0..=100.0 + 1e-9).contains(&e));

    if !(pieces_match && status_matches && efficiency_in_bounds) {
        error!("inconsistent layout result: {result:?}");
        return false;
    }
    true
}

pub fn evaluation_is_consistent(eval: &FormatEvaluation) -> bool {
    let margin_status_matches = match eval.usable_size {
        Some(_) => !matches!(eval.normal.status, LayoutStatus::InsufficientMargin),
        None => {
            eval.normal.status == LayoutStatus::InsufficientMargin
                && eval.rotated.status == LayoutStatus::InsufficientMargin
        }
    };
    layout_result_is_consistent(&eval.normal)
        && layout_result_is_consistent(&eval.rotated)
        && margin_status_matches
        && (!eval.rotated_is_duplicate || eval.normal.fits())
}

pub fn report_is_consistent(report: &Report) -> bool {
    if !report.evaluations.iter().all(evaluation_is_consistent) {
        return false;
    }
    let recommended_are_candidates = report
        .recommended
        .iter()
        .all(|key| report.candidates().any(|(k, _)| k == *key));

    let recommended_share_score = match report.best() {
        None => report.candidates().next().is_none(),
        Some((_, best)) => report.recommended.iter().all(|key| {
            report
                .result(*key)
                .is_some_and(|r| same_score((r.pieces, r.score_efficiency()), (best.pieces, best.score_efficiency())))
        }),
    };

    recommended_are_candidates && recommended_share_score
}
