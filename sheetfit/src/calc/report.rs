use serde::Serialize;

use crate::entities::{LayoutResult, MarginConfig, Orientation, Product};

/// Identifies one row of a [`Report`]: a sheet format (by catalog index) in one orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CandidateKey {
    pub format_index: usize,
    pub orientation: Orientation,
}

/// Both orientations of a single sheet format
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormatEvaluation {
    /// Index of the format in the evaluated catalog
    pub format_index: usize,
    /// Usable `(width, height)` after margins, `None` if the margins leave nothing
    pub usable_size: Option<(f64, f64)>,
    pub normal: LayoutResult,
    pub rotated: LayoutResult,
    /// The rotated layout is identical to the normal one and is left out of the ranking
    pub rotated_is_duplicate: bool,
}

impl FormatEvaluation {
    pub fn result(&self, orientation: Orientation) -> &LayoutResult {
        match orientation {
            Orientation::Normal => &self.normal,
            Orientation::Rotated => &self.rotated,
        }
    }

    pub fn is_duplicate(&self, orientation: Orientation) -> bool {
        orientation == Orientation::Rotated && self.rotated_is_duplicate
    }

    /// Results that take part in the ranking: fitting and not a duplicate
    pub fn candidates(&self) -> impl Iterator<Item = (CandidateKey, &LayoutResult)> {
        Orientation::ALL
            .into_iter()
            .filter(|&o| self.result(o).fits() && !self.is_duplicate(o))
            .map(|o| {
                let key = CandidateKey {
                    format_index: self.format_index,
                    orientation: o,
                };
                (key, self.result(o))
            })
    }
}

/// Output of [`compute`](crate::calc::compute): every format in both orientations, plus the recommended subset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub product: Product,
    pub margins: MarginConfig,
    pub quantity: Option<u64>,
    /// One entry per format, in catalog order
    pub evaluations: Vec<FormatEvaluation>,
    /// All candidates sharing the best `(pieces, efficiency)`, best first.
    /// Empty if nothing fits on any format.
    pub recommended: Vec<CandidateKey>,
}

impl Report {
    pub fn result(&self, key: CandidateKey) -> Option<&LayoutResult> {
        self.evaluations
            .get(key.format_index)
            .map(|e| e.result(key.orientation))
    }

    pub fn is_recommended(&self, key: CandidateKey) -> bool {
        self.recommended.contains(&key)
    }

    pub fn best(&self) -> Option<(CandidateKey, &LayoutResult)> {
        let key = *self.recommended.first()?;
        self.result(key).map(|r| (key, r))
    }

    /// All ranking candidates, in catalog order
    pub fn candidates(&self) -> impl Iterator<Item = (CandidateKey, &LayoutResult)> {
        self.evaluations.iter().flat_map(|e| e.candidates())
    }
}
