use log::debug;

use crate::entities::{GripperSide, MarginConfig, Product, SheetFormat};
use crate::error::{CalcError, CalcResult};
use crate::io::ext_repr::ExtSheetFormat;

/// Parses a decimal number as typed by the user, accepting a comma as decimal separator (`"12,5"`).
/// Returns `None` for empty, unparsable or non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a production quantity. Only the integer part counts, anything below 1 is no quantity.
pub fn parse_quantity(raw: &str) -> Option<u64> {
    parse_decimal(raw)
        .map(f64::trunc)
        .filter(|&q| q >= 1.0)
        .map(|q| q as u64)
}

/// Converts the raw product dimensions into a [`Product`].
///
/// Both inputs empty means nothing was entered yet: `Ok(None)`.
/// Otherwise both have to be numbers > 0, or [`CalcError::InvalidProductDimension`] is returned.
pub fn import_product(width: &str, height: &str) -> CalcResult<Option<Product>> {
    if width.trim().is_empty() && height.trim().is_empty() {
        return Ok(None);
    }
    let width = parse_decimal(width).ok_or_else(|| CalcError::invalid_product("width", width))?;
    let height = parse_decimal(height).ok_or_else(|| CalcError::invalid_product("height", height))?;
    Product::try_new(width, height).map(Some)
}

/// Converts the raw margin inputs into a [`MarginConfig`].
/// Missing, unparsable or negative widths count as 0.
pub fn import_margins(registration: &str, gripper_width: &str, gripper_side: GripperSide) -> MarginConfig {
    let parse_or_zero = |field: &str, raw: &str| {
        parse_decimal(raw).unwrap_or_else(|| {
            if !raw.trim().is_empty() {
                debug!("[IMPORT] unparsable {field} '{raw}', using 0");
            }
            0.0
        })
    };
    MarginConfig::new(
        parse_or_zero("registration", registration),
        parse_or_zero("gripper width", gripper_width),
        gripper_side,
    )
}

/// Converts two raw dimensions into a custom [`SheetFormat`], see [`SheetFormat::custom`].
pub fn import_custom_format(a: &str, b: &str) -> CalcResult<SheetFormat> {
    let a_val = parse_decimal(a).ok_or_else(|| CalcError::invalid_format("width", a))?;
    let b_val = parse_decimal(b).ok_or_else(|| CalcError::invalid_format("height", b))?;
    SheetFormat::custom(a_val, b_val)
}

pub fn import_format(ext_format: &ExtSheetFormat) -> CalcResult<SheetFormat> {
    SheetFormat::try_new(ext_format.name.clone(), ext_format.width, ext_format.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("12,5", Some(12.5); "comma separator")]
    #[test_case(" 100.25 ", Some(100.25); "dot separator with whitespace")]
    #[test_case("7", Some(7.0); "integer")]
    #[test_case("-3,0", Some(-3.0); "negative")]
    #[test_case("", None; "empty")]
    #[test_case("abc", None; "text")]
    #[test_case("inf", None; "infinite")]
    #[test_case("NaN", None; "nan")]
    fn decimal_parsing(raw: &str, expected: Option<f64>) {
        assert_eq!(parse_decimal(raw), expected);
    }

    #[test_case("500", Some(500); "integer")]
    #[test_case("12,7", Some(12); "truncated")]
    #[test_case("0", None; "zero")]
    #[test_case("-4", None; "negative")]
    #[test_case("", None; "empty")]
    fn quantity_parsing(raw: &str, expected: Option<u64>) {
        assert_eq!(parse_quantity(raw), expected);
    }

    #[test]
    fn empty_product_is_idle() {
        assert_eq!(import_product("", "  "), Ok(None));
    }

    #[test]
    fn product_needs_both_positive_dimensions() {
        let p = import_product("100", "70,5").unwrap().unwrap();
        assert_eq!((p.width(), p.height()), (100.0, 70.5));
        assert_eq!(
            import_product("100", ""),
            Err(CalcError::invalid_product("height", ""))
        );
        assert!(matches!(
            import_product("0", "10"),
            Err(CalcError::InvalidProductDimension { .. })
        ));
        assert!(import_product("x", "10").is_err());
    }

    #[test]
    fn margins_clamp_invalid_input() {
        let m = import_margins("-2", "abc", GripperSide::Top);
        assert_eq!(m.registration(), 0.0);
        assert_eq!(m.gripper_width(), 0.0);
        let m = import_margins("2,5", "12", GripperSide::Right);
        assert_eq!(m.registration(), 2.5);
        assert_eq!(m.gripper_width(), 12.0);
        assert_eq!(m.gripper_side(), GripperSide::Right);
    }

    #[test]
    fn custom_format_from_input() {
        let f = import_custom_format("320", "450,0").unwrap();
        assert_eq!((f.width(), f.height()), (450.0, 320.0));
        assert!(import_custom_format("320", "").is_err());
    }
}
