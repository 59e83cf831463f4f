use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::entities::SheetFormat;
use crate::geometry::Rect;

/// Edge of the sheet reserved for the press gripper
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GripperSide {
    #[default]
    None,
    Top,
    Bottom,
    Left,
    Right,
}

impl GripperSide {
    /// Whether the gripper band runs along the width (left/right edge) of the sheet
    pub fn is_vertical(&self) -> bool {
        matches!(self, GripperSide::Left | GripperSide::Right)
    }
}

impl Display for GripperSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GripperSide::None => "none",
            GripperSide::Top => "top",
            GripperSide::Bottom => "bottom",
            GripperSide::Left => "left",
            GripperSide::Right => "right",
        };
        f.write_str(s)
    }
}

impl FromStr for GripperSide {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(GripperSide::None),
            "top" => Ok(GripperSide::Top),
            "bottom" => Ok(GripperSide::Bottom),
            "left" => Ok(GripperSide::Left),
            "right" => Ok(GripperSide::Right),
            other => bail!("unknown gripper side: {other}"),
        }
    }
}

/// Margins reserved on every sheet.
///
/// * `registration` is reserved on all four edges.
/// * `gripper_width` is reserved once, on `gripper_side`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct MarginConfig {
    registration: f64,
    gripper_width: f64,
    gripper_side: GripperSide,
}

impl MarginConfig {
    /// Negative or non-finite widths are clamped to 0.
    pub fn new(registration: f64, gripper_width: f64, gripper_side: GripperSide) -> Self {
        MarginConfig {
            registration: clamp_margin(registration),
            gripper_width: clamp_margin(gripper_width),
            gripper_side,
        }
    }

    pub fn none() -> Self {
        MarginConfig::default()
    }

    pub fn registration(&self) -> f64 {
        self.registration
    }

    pub fn gripper_width(&self) -> f64 {
        self.gripper_width
    }

    pub fn gripper_side(&self) -> GripperSide {
        self.gripper_side
    }

    pub fn gripper_applies(&self) -> bool {
        self.gripper_width > 0.0 && self.gripper_side != GripperSide::None
    }

    /// Usable `(width, height)` of the sheet after subtracting all margins.
    /// Returns `None` if either dimension is not strictly positive.
    pub fn usable_size(&self, sheet: &SheetFormat) -> Option<(f64, f64)> {
        let mut usable_width = sheet.width();
        let mut usable_height = sheet.height();

        if self.gripper_applies() {
            match self.gripper_side.is_vertical() {
                true => usable_width -= self.gripper_width,
                false => usable_height -= self.gripper_width,
            }
        }

        usable_width -= 2.0 * self.registration;
        usable_height -= 2.0 * self.registration;

        match usable_width > 0.0 && usable_height > 0.0 {
            true => Some((usable_width, usable_height)),
            false => None,
        }
    }

    /// The usable region positioned on the sheet: offset by the gripper band (if on the top or left edge)
    /// and by the registration border. Width and height equal [`MarginConfig::usable_size`].
    pub fn usable_region(&self, sheet: &SheetFormat) -> Option<Rect> {
        let (usable_width, usable_height) = self.usable_size(sheet)?;
        let gripper = |side: GripperSide| match self.gripper_applies() && self.gripper_side == side {
            true => self.gripper_width,
            false => 0.0,
        };
        let x_min = self.registration + gripper(GripperSide::Left);
        let y_min = self.registration + gripper(GripperSide::Top);
        Some(Rect {
            x_min,
            y_min,
            x_max: x_min + usable_width,
            y_max: y_min + usable_height,
        })
    }

    /// The gripper band on the sheet, if any
    pub fn gripper_band(&self, sheet: &SheetFormat) -> Option<Rect> {
        if !self.gripper_applies() {
            return None;
        }
        let (w, h, g) = (sheet.width(), sheet.height(), self.gripper_width);
        let (x_min, y_min, x_max, y_max) = match self.gripper_side {
            GripperSide::Top => (0.0, 0.0, w, g.min(h)),
            GripperSide::Bottom => (0.0, (h - g).max(0.0), w, h),
            GripperSide::Left => (0.0, 0.0, g.min(w), h),
            GripperSide::Right => ((w - g).max(0.0), 0.0, w, h),
            GripperSide::None => unreachable!("gripper does not apply without a side"),
        };
        Rect::try_new(x_min, y_min, x_max, y_max).ok()
    }
}

fn clamp_margin(value: f64) -> f64 {
    match value.is_finite() && value > 0.0 {
        true => value,
        false => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet() -> SheetFormat {
        SheetFormat::try_new("1000 × 700 mm", 1000.0, 700.0).unwrap()
    }

    #[test]
    fn gripper_left_reduces_width() {
        let m = MarginConfig::new(5.0, 10.0, GripperSide::Left);
        assert_eq!(m.usable_size(&sheet()), Some((980.0, 690.0)));
        let region = m.usable_region(&sheet()).unwrap();
        assert_eq!((region.x_min, region.y_min), (15.0, 5.0));
        assert_eq!((region.x_max, region.y_max), (995.0, 695.0));
    }

    #[test]
    fn gripper_bottom_reduces_height() {
        let m = MarginConfig::new(0.0, 20.0, GripperSide::Bottom);
        assert_eq!(m.usable_size(&sheet()), Some((1000.0, 680.0)));
        let region = m.usable_region(&sheet()).unwrap();
        assert_eq!((region.x_min, region.y_min), (0.0, 0.0));
        let band = m.gripper_band(&sheet()).unwrap();
        assert_eq!((band.y_min, band.y_max), (680.0, 700.0));
    }

    #[test]
    fn gripper_without_side_is_ignored() {
        let m = MarginConfig::new(0.0, 20.0, GripperSide::None);
        assert!(!m.gripper_applies());
        assert_eq!(m.usable_size(&sheet()), Some((1000.0, 700.0)));
        assert!(m.gripper_band(&sheet()).is_none());
    }

    #[test]
    fn negative_and_nan_margins_are_clamped() {
        let m = MarginConfig::new(-5.0, f64::NAN, GripperSide::Top);
        assert_eq!(m.registration(), 0.0);
        assert_eq!(m.gripper_width(), 0.0);
        assert!(!m.gripper_applies());
    }

    #[test]
    fn excessive_margin_leaves_no_usable_area() {
        assert_eq!(MarginConfig::new(350.0, 0.0, GripperSide::None).usable_size(&sheet()), None);
        assert_eq!(MarginConfig::new(0.0, 700.0, GripperSide::Top).usable_size(&sheet()), None);
        assert!(MarginConfig::new(0.0, 700.0, GripperSide::Top).usable_region(&sheet()).is_none());
    }

    #[test]
    fn gripper_side_parsing() {
        assert_eq!("Left".parse::<GripperSide>().unwrap(), GripperSide::Left);
        assert_eq!("".parse::<GripperSide>().unwrap(), GripperSide::None);
        assert!("diagonal".parse::<GripperSide>().is_err());
    }
}
