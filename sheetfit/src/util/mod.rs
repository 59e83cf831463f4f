/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

/// Two efficiencies (in percentage points) closer than this are considered equal
pub const EFFICIENCY_TOLERANCE: f64 = 0.01;

/// Whether two `(pieces, efficiency)` scores are equal, efficiencies within [`EFFICIENCY_TOLERANCE`]
pub fn same_score(a: (usize, f64), b: (usize, f64)) -> bool {
    a.0 == b.0 && (a.1 - b.1).abs() < EFFICIENCY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_tolerance_is_strict() {
        assert!(same_score((10, 80.0), (10, 80.009)));
        assert!(!same_score((10, 80.0), (10, 80.02)));
        assert!(!same_score((10, 80.0), (11, 80.0)));
    }
}
