use crate::entities::{LayoutResult, LayoutStatus, Orientation, Product};

/// Lays out `product` as a uniform grid on a usable area of `usable_width` × `usable_height`.
///
/// If `quantity` is given, the number of sheets required to produce it is included.
/// A usable area without positive width and height yields [`LayoutStatus::InsufficientMargin`].
/// Grids with more pieces than `usize` can hold report `pieces` saturated at `usize::MAX`,
/// the efficiency is still computed from the exact grid.
pub fn grid_layout(
    (usable_width, usable_height): (f64, f64),
    product: &Product,
    orientation: Orientation,
    quantity: Option<u64>,
) -> LayoutResult {
    if !(usable_width > 0.0 && usable_height > 0.0) {
        return LayoutResult::insufficient_margin(orientation);
    }

    let (p_width, p_height) = product.footprint(orientation);

    //both operands are positive, so the floor is never negative (casts saturate)
    let columns = (usable_width / p_width).floor() as usize;
    let rows = (usable_height / p_height).floor() as usize;
    let pieces = columns.saturating_mul(rows);

    if pieces == 0 {
        return LayoutResult {
            orientation,
            columns,
            rows,
            pieces,
            efficiency: None,
            status: LayoutStatus::NoFit,
            required_sheets: None,
        };
    }

    let used_area = columns as f64 * rows as f64 * product.area();
    let usable_area = usable_width * usable_height;
    let efficiency = f64::min(used_area / usable_area * 100.0, 100.0);

    let required_sheets = quantity
        .filter(|&q| q > 0)
        .map(|q| q.div_ceil(pieces as u64));

    LayoutResult {
        orientation,
        columns,
        rows,
        pieces,
        efficiency: Some(efficiency),
        status: LayoutStatus::Fits,
        required_sheets,
    }
}
