use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use sheetfit::entities::GripperSide;
use sheetfit::io::svg::SvgDrawOptions;

/// Configuration of the command line front end.
/// Values given on the command line take precedence over the ones in here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SheetfitConfig {
    /// Registration margin in mm, reserved on all four edges of the sheet
    pub registration: f64,
    /// Gripper margin in mm, reserved once on `gripper_side`
    pub gripper_width: f64,
    pub gripper_side: GripperSide,
    /// Directory holding the custom formats and the theme
    pub store_dir: PathBuf,
    /// Optional SVG drawing options. The theme is taken from the store unless overridden.
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for SheetfitConfig {
    fn default() -> Self {
        Self {
            registration: 0.0,
            gripper_width: 0.0,
            gripper_side: GripperSide::None,
            store_dir: PathBuf::from(".sheetfit"),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
