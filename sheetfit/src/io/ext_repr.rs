use serde::{Deserialize, Serialize};

use crate::entities::{GripperSide, LayoutStatus, Orientation};

/// External representation of a [`SheetFormat`](crate::entities::SheetFormat).
/// This is also the record format of persisted custom formats.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSheetFormat {
    /// Label shown to the user
    pub name: String,
    /// Width of the raw sheet in mm
    pub width: f64,
    /// Height of the raw sheet in mm
    pub height: f64,
}

/// External representation of a [`Product`](crate::entities::Product).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtProduct {
    pub width: f64,
    pub height: f64,
}

/// External representation of a [`MarginConfig`](crate::entities::MarginConfig).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtMargins {
    /// Border reserved on all four edges, in mm
    pub registration: f64,
    /// Border reserved on `gripper_side`, in mm
    pub gripper_width: f64,
    pub gripper_side: GripperSide,
}

/// External representation of a [`Report`](crate::calc::Report).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtReport {
    pub product: ExtProduct,
    pub margins: ExtMargins,
    /// Requested production quantity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    /// One row per sheet format and orientation, in catalog order
    pub rows: Vec<ExtLayoutRow>,
    /// Number of recommended rows
    pub n_recommended: usize,
}

/// A single format/orientation row of an [`ExtReport`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLayoutRow {
    /// Index of the format in the evaluated catalog
    pub format_index: usize,
    pub format: ExtSheetFormat,
    pub orientation: Orientation,
    pub status: LayoutStatus,
    pub columns: usize,
    pub rows: usize,
    pub pieces: usize,
    /// Percentage of the usable area covered, absent when nothing fits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_sheets: Option<u64>,
    /// Identical to the normal orientation, left out of the ranking
    pub duplicate: bool,
    pub recommended: bool,
}
