use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::calc::report::{CandidateKey, FormatEvaluation};
use crate::entities::LayoutResult;
use crate::util::same_score;

/// Whether the rotated layout yields exactly what the normal one does,
/// which happens for (near-)square products.
pub fn is_duplicate(normal: &LayoutResult, rotated: &LayoutResult) -> bool {
    normal.fits()
        && rotated.fits()
        && same_score(score(normal), score(rotated))
}

/// Ranks all candidates by pieces, then efficiency (both descending) and returns every candidate
/// that ties with the best one. Ties keep catalog order.
pub fn recommend(evaluations: &[FormatEvaluation]) -> Vec<CandidateKey> {
    let ranked = evaluations
        .iter()
        .flat_map(|e| e.candidates())
        .sorted_by_key(|(_, r)| (Reverse(r.pieces), Reverse(OrderedFloat(r.score_efficiency()))))
        .collect_vec();

    let Some((_, best)) = ranked.first() else {
        return vec![];
    };
    let best_score = score(best);

    ranked
        .iter()
        .filter(|(_, r)| same_score(score(r), best_score))
        .map(|(key, _)| *key)
        .collect()
}

fn score(result: &LayoutResult) -> (usize, f64) {
    (result.pieces, result.score_efficiency())
}
