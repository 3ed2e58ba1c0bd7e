//! Resolves color references (direct RGB or theme-indexed) to concrete hex
//! strings, and derives the legible default text color from the current
//! slide background's luminance.

use log::debug;

use crate::models::colors::{ColorRef, ColorScheme, RgbColor, ThemeSlot};

use super::constants::{DEFAULT_TEXT_DARK, DEFAULT_TEXT_LIGHT};

/// Encodes an RGB triple as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(color: RgbColor) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Static fallbacks for theme slots whose concrete value the source does not
/// expose. Only the well-known slots have documented defaults; anything else
/// resolves to nothing and the caller omits the property.
fn theme_fallback(slot: ThemeSlot) -> Option<RgbColor> {
    match slot {
        ThemeSlot::Background1 => Some(RgbColor::new(0xff, 0xff, 0xff)),
        ThemeSlot::Text1 => Some(RgbColor::new(0x00, 0x00, 0x00)),
        ThemeSlot::Accent1 => Some(RgbColor::new(0x1f, 0x49, 0x7d)),
        ThemeSlot::Accent2 => Some(RgbColor::new(0xc0, 0x50, 0x4d)),
        _ => None,
    }
}

/// Resolves a color reference to a hex string.
///
/// Concrete RGB encodes directly. Theme slots are looked up in the deck's
/// scheme first and fall back to [`theme_fallback`]. Resolution failure is
/// never an error: the result is `None` and the caller inherits or defaults.
pub fn resolve_color(color: &ColorRef, scheme: Option<&ColorScheme>) -> Option<String> {
    match color {
        ColorRef::Rgb(rgb) => Some(rgb_to_hex(*rgb)),
        ColorRef::Theme(slot) => {
            if let Some(rgb) = scheme.and_then(|s| s.lookup(*slot)) {
                return Some(rgb_to_hex(rgb));
            }
            let fallback = theme_fallback(*slot);
            if fallback.is_none() {
                debug!("theme slot {:?} has no scheme entry and no fallback", slot);
            }
            fallback.map(rgb_to_hex)
        }
    }
}

/// Parses a `#rrggbb` string back into channels. Tolerant of garbage input
/// since background colors may originate outside this crate.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Perceptual brightness of a hex color, 0.0 (black) to 1.0 (white), using
/// the standard luma weights on normalized channels.
pub fn luminance(hex: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(hex)?;
    Some(
        0.299 * (r as f64 / 255.0) + 0.587 * (g as f64 / 255.0) + 0.114 * (b as f64 / 255.0),
    )
}

/// Picks the default text color for runs without an explicit one, from the
/// resolved slide background: dark backgrounds get white text, light (and
/// unknown) backgrounds get black. The 0.5 boundary deterministically takes
/// the light branch.
///
/// Recomputed once per slide, since the background varies per slide; the
/// result is threaded through flattening as a plain parameter.
pub fn default_text_color(background: Option<&str>) -> &'static str {
    match background.and_then(luminance) {
        Some(luma) if luma < 0.5 => DEFAULT_TEXT_LIGHT,
        _ => DEFAULT_TEXT_DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::colors::ThemeColorPair;

    #[test]
    fn rgb_encodes_directly() {
        let c = ColorRef::Rgb(RgbColor::new(0x1a, 0x2b, 0x3c));
        assert_eq!(resolve_color(&c, None).as_deref(), Some("#1a2b3c"));
    }

    #[test]
    fn theme_prefers_scheme_over_fallback() {
        let scheme = ColorScheme {
            colors: vec![ThemeColorPair {
                slot: ThemeSlot::Accent1,
                color: RgbColor::new(0x12, 0x34, 0x56),
            }],
        };
        let c = ColorRef::Theme(ThemeSlot::Accent1);
        assert_eq!(
            resolve_color(&c, Some(&scheme)).as_deref(),
            Some("#123456")
        );
        assert_eq!(resolve_color(&c, None).as_deref(), Some("#1f497d"));
    }

    #[test]
    fn unknown_theme_slot_resolves_to_none() {
        let c = ColorRef::Theme(ThemeSlot::Accent5);
        assert_eq!(resolve_color(&c, None), None);
    }

    #[test]
    fn luminance_rule_picks_legible_text() {
        assert_eq!(default_text_color(Some("#000000")), "#ffffff");
        assert_eq!(default_text_color(Some("#ffffff")), "#000000");
        // L(#808080) = 0.502 -> light branch -> black text
        assert_eq!(default_text_color(Some("#808080")), "#000000");
        // no background known -> assume light
        assert_eq!(default_text_color(None), "#000000");
        // unparsable input is swallowed, not an error
        assert_eq!(default_text_color(Some("not-a-color")), "#000000");
    }
}
