use serde::Serialize;

use crate::error::{CalcError, CalcResult};
use crate::geometry::Rect;

/// A stock sheet size from which products are cut.
/// Dimensions are the raw, untrimmed sheet size in mm.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SheetFormat {
    name: String,
    width: f64,
    height: f64,
}

impl SheetFormat {
    pub fn try_new(name: impl Into<String>, width: f64, height: f64) -> CalcResult<Self> {
        if !(width.is_finite() && width > 0.0) {
            return Err(CalcError::invalid_format("width", width));
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(CalcError::invalid_format("height", height));
        }
        Ok(SheetFormat {
            name: name.into(),
            width,
            height,
        })
    }

    /// A user defined format. The larger of both dimensions becomes the width,
    /// the label is generated from the rounded dimensions.
    pub fn custom(a: f64, b: f64) -> CalcResult<Self> {
        if !(a.is_finite() && a > 0.0) {
            return Err(CalcError::invalid_format("width", a));
        }
        if !(b.is_finite() && b > 0.0) {
            return Err(CalcError::invalid_format("height", b));
        }
        let (width, height) = (f64::max(a, b), f64::min(a, b));
        let name = format!("{} × {} mm (custom)", width.round(), height.round());
        SheetFormat::try_new(name, width, height)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Bounds of the full sheet, top left corner at the origin
    pub fn outline(&self) -> Rect {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: self.width,
            y_max: self.height,
        }
    }
}
