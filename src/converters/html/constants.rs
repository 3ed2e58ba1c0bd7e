//! Defines constants used throughout the HTML conversion process.

// Conversion factors (96 DPI target; the source measures in EMU and points)
pub const EMU_PER_PX: f64 = 9525.0;
pub const PX_PER_PT: f64 = 96.0 / 72.0;

// Default values used when specific properties are missing or cannot be resolved.
pub const DEFAULT_TEXT_DARK: &str = "#000000";
pub const DEFAULT_TEXT_LIGHT: &str = "#ffffff";

// Border/shadow suppression thresholds
pub const MIN_BORDER_PX: i64 = 1;
pub const MIN_SHADOW_ALPHA: f64 = 0.1;

// Background detection heuristics
/// Slide-area share above which a picture shape is a background candidate.
pub const BG_PICTURE_MIN_AREA_PCT: f64 = 40.0;
/// Anchor limit (percent from origin) for slide-level background pictures.
pub const BG_PICTURE_ANCHOR_PCT: f64 = 30.0;
/// Slide-area share above which a freeform counts as a synthetic background.
pub const BG_FREEFORM_MIN_AREA_PCT: f64 = 95.0;
/// Anchor limit (percent from origin) for synthetic background freeforms.
pub const BG_FREEFORM_ANCHOR_PCT: f64 = 5.0;
/// Layout/master picture shapes covering more than this are backgrounds.
pub const BG_INHERITED_MIN_AREA_PCT: f64 = 30.0;

// Image role classifier thresholds
pub const QR_MIN_SIZE: u32 = 20;
pub const QR_MAX_SIZE: u32 = 100;
pub const QR_ASPECT_MIN: f64 = 0.85;
pub const QR_ASPECT_MAX: f64 = 1.15;
pub const QR_CONTRAST_THRESHOLD: f64 = 0.6;
pub const ICON_MAX_SIZE: u32 = 150;
pub const LOGO_MAX_SIZE: u32 = 400;
pub const DIAGRAM_DIVERSITY_THRESHOLD: f64 = 0.3;
/// Decoded images smaller than this on both axes render at native pixel size.
pub const SMALL_IMAGE_PX: u32 = 100;

// Composite-glyph detection (a QR code assembled from a grid of shapes)
pub const COMPOSITE_MAX_SIZE_PX: i64 = 150;
pub const COMPOSITE_ASPECT_MIN: f64 = 0.7;
pub const COMPOSITE_ASPECT_MAX: f64 = 1.3;
pub const COMPOSITE_MIN_CHILDREN: usize = 10;
pub const COMPOSITE_MIN_PART_SHARE: f64 = 0.8;

/// Indentation applied per paragraph nesting level, in pixels.
pub const INDENT_PX_PER_LEVEL: u32 = 20;
