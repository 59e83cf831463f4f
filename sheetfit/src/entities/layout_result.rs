use serde::{Deserialize, Serialize};

use crate::entities::{Orientation, Product};
use crate::geometry::Rect;

/// Outcome of laying out a product on one sheet format in one orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStatus {
    /// At least one piece fits
    Fits,
    /// The product is larger than the usable area in this orientation
    NoFit,
    /// The margins leave no usable area on the sheet
    InsufficientMargin,
}

/// Uniform grid layout of a product on the usable area of a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayoutResult {
    pub orientation: Orientation,
    /// Number of pieces side by side (along the sheet width)
    pub columns: usize,
    /// Number of rows (along the sheet height)
    pub rows: usize,
    /// `columns * rows`, saturated at `usize::MAX`
    pub pieces: usize,
    /// Percentage of the usable area covered by pieces, `None` if nothing fits
    pub efficiency: Option<f64>,
    pub status: LayoutStatus,
    /// Sheets needed to produce the requested quantity, if one was given and anything fits
    pub required_sheets: Option<u64>,
}

impl LayoutResult {
    /// Result for a sheet whose margins leave no usable area
    pub fn insufficient_margin(orientation: Orientation) -> Self {
        LayoutResult {
            orientation,
            columns: 0,
            rows: 0,
            pieces: 0,
            efficiency: None,
            status: LayoutStatus::InsufficientMargin,
            required_sheets: None,
        }
    }

    pub fn fits(&self) -> bool {
        self.status == LayoutStatus::Fits
    }

    /// Efficiency as used for ranking, 0 when nothing fits
    pub fn score_efficiency(&self) -> f64 {
        self.efficiency.unwrap_or(0.0)
    }

    /// Region covered by the whole grid, starting at the top left corner of `usable_region`.
    /// `None` if nothing fits.
    pub fn grid_extent(&self, usable_region: &Rect, product: &Product) -> Option<Rect> {
        if !self.fits() {
            return None;
        }
        let (p_width, p_height) = product.footprint(self.orientation);
        Some(Rect {
            x_min: usable_region.x_min,
            y_min: usable_region.y_min,
            x_max: usable_region.x_min + self.columns as f64 * p_width,
            y_max: usable_region.y_min + self.rows as f64 * p_height,
        })
    }

    /// Placement of every piece of the grid, starting at the top left corner of `usable_region`,
    /// column by column.
    pub fn cells<'a>(
        &'a self,
        usable_region: &'a Rect,
        product: &'a Product,
    ) -> impl Iterator<Item = Rect> + 'a {
        let (p_width, p_height) = product.footprint(self.orientation);
        (0..self.columns).flat_map(move |col| {
            (0..self.rows).map(move |row| {
                let x_min = usable_region.x_min + col as f64 * p_width;
                let y_min = usable_region.y_min + row as f64 * p_height;
                Rect {
                    x_min,
                    y_min,
                    x_max: x_min + p_width,
                    y_max: y_min + p_height,
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::grid_layout;

    #[test]
    fn cells_fill_the_grid_extent() {
        let product = Product::try_new(100.0, 70.0).unwrap();
        let region = Rect::try_new(15.0, 5.0, 995.0, 695.0).unwrap();
        let result = grid_layout((region.width(), region.height()), &product, Orientation::Rotated, None);
        let extent = result.grid_extent(&region, &product).unwrap();

        let cells = result.cells(&region, &product).collect::<Vec<_>>();
        assert_eq!(cells.len(), 84);
        assert_eq!((cells[0].x_min, cells[0].y_min), (15.0, 5.0));
        // column-major: the second cell sits below the first one
        assert_eq!((cells[1].x_min, cells[1].y_min), (15.0, 105.0));
        assert_eq!(extent, Rect::try_new(15.0, 5.0, 15.0 + 14.0 * 70.0, 5.0 + 6.0 * 100.0).unwrap());
        assert!(cells.iter().all(|c| c.x_max <= extent.x_max && c.y_max <= extent.y_max));
    }

    #[test]
    fn no_extent_without_fit() {
        let product = Product::try_new(10.0, 10.0).unwrap();
        let region = Rect::try_new(0.0, 0.0, 5.0, 5.0).unwrap();
        let result = LayoutResult::insufficient_margin(Orientation::Normal);
        assert_eq!(result.grid_extent(&region, &product), None);
        assert_eq!(result.cells(&region, &product).count(), 0);
    }
}
