use anyhow::Result;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

///Axis-aligned rectangle in sheet coordinates (mm).
///The y-axis points down: `y_min` is the top edge of the sheet.
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Shrinks each edge by its own amount.
    /// Returns `None` if nothing (or a degenerate rectangle) remains.
    pub fn shrink(mut self, left: f64, top: f64, right: f64, bottom: f64) -> Option<Self> {
        self.x_min += left;
        self.y_min += top;
        self.x_max -= right;
        self.y_max -= bottom;

        if self.x_min < self.x_max && self.y_min < self.y_max {
            Some(self)
        } else {
            None
        }
    }

    /// Returns a new rectangle with the same centroid as `self` but expanded by `dx` in both x-directions and by `dy` in both y-directions.
    /// If the new rectangle is invalid (x_min >= x_max or y_min >= y_max), returns None.
    pub fn resize_by(self, dx: f64, dy: f64) -> Option<Self> {
        self.shrink(-dx, -dy, -dx, -dy)
    }

    /// Maps `self` into another frame: scaled by `factor` around the origin, then translated.
    pub fn project(&self, factor: f64, (tx, ty): (f64, f64)) -> Self {
        Rect {
            x_min: self.x_min * factor + tx,
            y_min: self.y_min * factor + ty,
            x_max: self.x_max * factor + tx,
            y_max: self.y_max * factor + ty,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rect_is_rejected() {
        assert!(Rect::try_new(10.0, 0.0, 10.0, 5.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, -1.0, 5.0).is_err());
    }

    #[test]
    fn shrink_per_edge() {
        let r = Rect::try_new(0.0, 0.0, 1000.0, 700.0).unwrap();
        let s = r.shrink(15.0, 5.0, 5.0, 5.0).unwrap();
        assert_eq!(s.width(), 980.0);
        assert_eq!(s.height(), 690.0);
        assert_eq!((s.x_min, s.y_min), (15.0, 5.0));
        assert!(r.shrink(500.0, 0.0, 500.0, 0.0).is_none());
    }

    #[test]
    fn project_scales_then_translates() {
        let r = Rect::try_new(10.0, 20.0, 30.0, 40.0).unwrap();
        let p = r.project(0.5, (100.0, 0.0));
        assert_eq!(p, Rect::try_new(105.0, 10.0, 115.0, 20.0).unwrap());
        let grown = r.resize_by(1.0, 1.0).unwrap();
        assert_eq!((grown.width(), grown.height()), (22.0, 22.0));
    }
}
