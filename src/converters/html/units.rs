//! Pure numeric mappings between the source document's length units and the
//! rendering target: EMU to pixels, points to pixels, and pixels to
//! percentages of a slide axis.
//!
//! Absent input yields absent output throughout; callers treat `None` as
//! "omit this style property".

use crate::models::common::Emu;

use super::constants::{EMU_PER_PX, PX_PER_PT};

/// Converts an EMU length to whole pixels at 96 DPI.
pub fn emu_to_px(emu: Emu) -> i64 {
    (emu as f64 / EMU_PER_PX).round() as i64
}

/// `emu_to_px` lifted over optional input.
pub fn emu_to_px_opt(emu: Option<Emu>) -> Option<i64> {
    emu.map(emu_to_px)
}

/// Converts a point size to pixels.
pub fn pt_to_px(pt: f64) -> f64 {
    pt * PX_PER_PT
}

/// Converts a point size to whole pixels, rounding to the nearest pixel.
pub fn pt_to_px_opt(pt: Option<f64>) -> Option<i64> {
    pt.map(|v| pt_to_px(v).round() as i64)
}

/// Expresses a pixel length as a percentage of a slide axis, formatted with
/// exactly three decimal digits (e.g. `"12.500%"`). A degenerate axis yields
/// `"0.000%"` rather than a division error.
pub fn percent_of(px: i64, axis_px: i64) -> String {
    if axis_px <= 0 {
        return "0.000%".to_string();
    }
    format!("{:.3}%", px as f64 / axis_px as f64 * 100.0)
}

/// The raw percentage value behind [`percent_of`], for callers that need to
/// compare against thresholds rather than emit a style string.
pub fn percent_value(px: i64, axis_px: i64) -> f64 {
    if axis_px <= 0 {
        return 0.0;
    }
    px as f64 / axis_px as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emu_conversion_uses_fixed_divisor() {
        assert_eq!(emu_to_px(9525), 1);
        assert_eq!(emu_to_px(914400), 96); // one inch
        assert_eq!(emu_to_px(0), 0);
    }

    #[test]
    fn pt_conversion_uses_fixed_multiplier() {
        assert_eq!(pt_to_px(72.0), 96.0);
        assert_eq!(pt_to_px_opt(Some(12.0)), Some(16));
        assert_eq!(pt_to_px_opt(None), None);
    }

    #[test]
    fn percent_has_three_decimals() {
        assert_eq!(percent_of(250, 1000), "25.000%");
        assert_eq!(percent_of(1, 3), "33.333%");
    }

    #[test]
    fn percent_of_zero_axis_is_zero() {
        assert_eq!(percent_of(100, 0), "0.000%");
        assert_eq!(percent_value(100, 0), 0.0);
    }
}
