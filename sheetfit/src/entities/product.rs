use serde::Serialize;

use crate::entities::Orientation;
use crate::error::{CalcError, CalcResult};

/// The rectangular item to be cut, dimensions in mm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Product {
    width: f64,
    height: f64,
}

impl Product {
    pub fn try_new(width: f64, height: f64) -> CalcResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CalcError::invalid_product("width", width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(CalcError::invalid_product("height", height));
        }
        Ok(Product { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Footprint `(width, height)` along the sheet axes in the given orientation
    pub fn footprint(&self, orientation: Orientation) -> (f64, f64) {
        match orientation {
            Orientation::Normal => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_swaps_when_rotated() {
        let p = Product::try_new(100.0, 70.0).unwrap();
        assert_eq!(p.footprint(Orientation::Normal), (100.0, 70.0));
        assert_eq!(p.footprint(Orientation::Rotated), (70.0, 100.0));
        assert_eq!(p.area(), 7000.0);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            Product::try_new(0.0, 10.0),
            Err(CalcError::invalid_product("width", 0.0))
        );
        assert!(Product::try_new(10.0, -1.0).is_err());
        assert!(Product::try_new(f64::NAN, 1.0).is_err());
    }
}
