use log::{debug, warn};
use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::calc::{CandidateKey, Report};
use crate::entities::{LayoutResult, MarginConfig, Product, SheetFormat};
use crate::error::{CalcError, CalcResult};
use crate::io::svg::svg_util::{self, SvgDrawOptions, SvgLayoutTheme};
use crate::io::text;

const DETAILS_HEIGHT: f64 = 60.0;

/// Draws the row `key` of `report`, which has to be computed over `formats`.
pub fn report_row_to_svg(
    report: &Report,
    formats: &[SheetFormat],
    key: CandidateKey,
    options: SvgDrawOptions,
) -> CalcResult<Document> {
    let (format, result) = formats
        .get(key.format_index)
        .zip(report.result(key))
        .ok_or_else(|| CalcError::invalid_format("format_index", key.format_index))?;
    layout_to_svg(format, &report.margins, &report.product, result, options)
}

/// Draws a single layout: sheet bounds, gripper band, usable region and the product grid.
///
/// The grid is taken from `result` as computed by the engine.
/// Fails with [`CalcError::InsufficientMargin`] if the margins leave no usable area on `format`.
pub fn layout_to_svg(
    format: &SheetFormat,
    margins: &MarginConfig,
    product: &Product,
    result: &LayoutResult,
    options: SvgDrawOptions,
) -> CalcResult<Document> {
    let usable_region = margins
        .usable_region(format)
        .ok_or_else(|| CalcError::InsufficientMargin {
            format: format.name().to_string(),
        })?;

    let theme = SvgLayoutTheme::from(options.theme);

    //millimetres to px, sheet centered in the view box
    let scale = f64::min(
        (options.view_width - 2.0 * options.padding) / format.width(),
        (options.view_height - 2.0 * options.padding) / format.height(),
    );
    let offset = (
        (options.view_width - format.width() * scale) / 2.0,
        (options.view_height - format.height() * scale) / 2.0,
    );

    let sheet_group = {
        let sheet_px = format.outline().project(scale, offset);
        Group::new()
            .set("id", "sheet")
            .add(svg_util::rect_to_svg(
                &sheet_px,
                &[
                    ("fill", theme.sheet_fill),
                    ("stroke", theme.sheet_stroke),
                    ("stroke-width", "1.5"),
                ],
            ))
            .add(Title::new(format!(
                "sheet {}, {} x {} mm",
                format.name(),
                format.width(),
                format.height()
            )))
    };

    let gripper_group = margins.gripper_band(format).map(|band| {
        Group::new()
            .set("id", "gripper")
            .add(svg_util::rect_to_svg(
                &band.project(scale, offset),
                &[
                    ("fill", theme.gripper_fill),
                    ("fill-opacity", "0.7"),
                    ("stroke", theme.gripper_stroke),
                    ("stroke-width", "1"),
                ],
            ))
            .add(Title::new(format!(
                "gripper margin, {} mm on the {} edge",
                margins.gripper_width(),
                margins.gripper_side()
            )))
    });

    let usable_group = Group::new()
        .set("id", "usable_area")
        .add(svg_util::rect_to_svg(
            &usable_region.project(scale, offset),
            &[
                ("fill", theme.usable_fill),
                ("stroke", theme.usable_stroke),
                ("stroke-dasharray", "4 3"),
                ("stroke-width", "1"),
            ],
        ))
        .add(Title::new(format!(
            "usable area, {:.1} x {:.1} mm",
            usable_region.width(),
            usable_region.height()
        )));

    let items_group = {
        let item_opacity = theme.item_opacity.to_string();
        let item_style = [
            ("fill", theme.item_fill),
            ("fill-opacity", item_opacity.as_str()),
            ("stroke", theme.item_stroke),
            ("stroke-width", "0.5"),
        ];
        let group = Group::new().set("id", "items");
        match result.pieces <= options.max_drawn_cells {
            true => result
                .cells(&usable_region, product)
                .map(|cell| {
                    let cell_px = cell.project(scale, offset);
                    //keep a visible gap between neighbouring pieces
                    let inset = cell_px.resize_by(-0.5, -0.5).unwrap_or(cell_px);
                    svg_util::rect_to_svg(&inset, &item_style)
                })
                .fold(group, |g, r| g.add(r)),
            false => {
                warn!(
                    "[SVG] {} pieces exceed the limit of {}, drawing the grid as a single block",
                    result.pieces, options.max_drawn_cells
                );
                match result.grid_extent(&usable_region, product) {
                    Some(extent) => group
                        .add(svg_util::rect_to_svg(&extent.project(scale, offset), &item_style))
                        .add(Title::new(format!(
                            "{}, too many to draw individually",
                            text::layout_text(result.columns, result.rows)
                        ))),
                    None => group,
                }
            }
        }
    };

    debug!(
        "[SVG] {} ({}): {} pieces at scale {:.4}",
        format.name(),
        result.orientation,
        result.pieces,
        scale
    );

    let view_height = match options.details {
        true => options.view_height + DETAILS_HEIGHT,
        false => options.view_height,
    };

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, options.view_width, view_height))
        .set("width", "100%")
        .add(svg_util::rect_to_svg(
            &crate::geometry::Rect {
                x_min: 0.0,
                y_min: 0.0,
                x_max: options.view_width,
                y_max: view_height,
            },
            &[("fill", theme.background)],
        ))
        .add(sheet_group);

    if let Some(gripper_group) = gripper_group {
        document = document.add(gripper_group);
    }
    document = document.add(usable_group).add(items_group);

    if options.details {
        document = document.add(details_group(result, &theme, &options));
    }

    Ok(document)
}

fn details_group(result: &LayoutResult, theme: &SvgLayoutTheme, options: &SvgDrawOptions) -> Group {
    let x = options.view_width / 2.0;
    let y = options.view_height;
    let line = |dy: f64, content: String, fill: &str, weight: &str| {
        Text::new(content)
            .set("x", x)
            .set("y", y + dy)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 13)
            .set("font-weight", weight)
            .set("fill", fill)
    };
    Group::new()
        .set("id", "details")
        .add(line(
            16.0,
            text::outcome_text(result),
            theme.text_fill,
            "600",
        ))
        .add(line(
            34.0,
            text::layout_text(result.columns, result.rows),
            theme.text_muted,
            "400",
        ))
        .add(line(
            52.0,
            format!("efficiency: {}", text::format_percent(result.efficiency)),
            theme.text_fill,
            "400",
        ))
}
