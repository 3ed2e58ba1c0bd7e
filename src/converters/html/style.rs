//! Per-shape visual style resolution: the percentage layout box plus fill,
//! border, shadow and 2D-transform CSS properties.
//!
//! Every property is extracted independently and best-effort: a failure to
//! resolve one (an unknown theme color, a malformed gradient) omits that
//! property and never disturbs the rest of the shape.

use indexmap::IndexMap;
use log::debug;

use crate::models::{
    colors::ColorScheme,
    common::Frame,
    fill::{Fill, GradientAxis, GradientFill, SolidFill},
    line::{DashStyle, Line},
    shadow::Shadow,
    shape::Shape,
};

use super::{
    color::resolve_color,
    constants::{MIN_BORDER_PX, MIN_SHADOW_ALPHA},
    item::LayoutBox,
    units::{emu_to_px, percent_of},
};

/// Computes the percentage layout box for a frame and assigns the stacking
/// index handed down by the flattener's traversal counter. Values are
/// clamped to the slide so the emitted percentages stay within [0, 100].
pub(crate) fn resolve_box(
    frame: &Frame,
    slide_width_px: i64,
    slide_height_px: i64,
    z_index: u32,
) -> LayoutBox {
    let clamp = |px: i64, axis: i64| px.clamp(0, axis.max(0));
    let left = clamp(emu_to_px(frame.left), slide_width_px);
    let top = clamp(emu_to_px(frame.top), slide_height_px);
    let width = clamp(emu_to_px(frame.width), slide_width_px);
    let height = clamp(emu_to_px(frame.height), slide_height_px);
    LayoutBox {
        left: percent_of(left, slide_width_px),
        top: percent_of(top, slide_height_px),
        width: percent_of(width, slide_width_px),
        height: percent_of(height, slide_height_px),
        z_index,
    }
}

fn solid_fill_style(solid: &SolidFill, scheme: Option<&ColorScheme>, style: &mut IndexMap<String, String>) {
    let Some(hex) = resolve_color(&solid.color, scheme) else {
        debug!("solid fill color did not resolve, omitting background-color");
        return;
    };
    style.insert("background-color".to_string(), hex);
    if solid.transparency > 0.0 {
        let opacity = (1.0 - solid.transparency).clamp(0.0, 1.0);
        style.insert("opacity".to_string(), format!("{:.2}", opacity));
    }
}

/// Builds a CSS gradient expression. Linear angles convert from the source
/// convention (0 = right, clockwise) to CSS (0 = up, clockwise) via
/// `(angle + 90) mod 360`. Stops are emitted sorted by position.
pub(crate) fn gradient_css(gradient: &GradientFill, scheme: Option<&ColorScheme>) -> Option<String> {
    if gradient.stops.is_empty() {
        return None;
    }
    let mut stops: Vec<(f64, String)> = gradient
        .stops
        .iter()
        .map(|stop| {
            // Unresolvable stop colors degrade to gray rather than dropping
            // the stop and skewing the ramp.
            let hex = resolve_color(&stop.color, scheme).unwrap_or_else(|| "#808080".to_string());
            (stop.position, hex)
        })
        .collect();
    stops.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    let stop_list = stops
        .iter()
        .map(|(pos, hex)| format!("{} {:.1}%", hex, pos))
        .collect::<Vec<_>>()
        .join(", ");

    Some(match gradient.axis {
        GradientAxis::Linear { angle_deg } => {
            let css_angle = (angle_deg + 90.0).rem_euclid(360.0);
            format!("linear-gradient({}deg, {})", css_angle, stop_list)
        }
        GradientAxis::Radial { circular: true } => format!("radial-gradient(circle, {})", stop_list),
        GradientAxis::Radial { circular: false } => {
            format!("radial-gradient(ellipse, {})", stop_list)
        }
    })
}

/// Maps a dash pattern to its closest CSS border style. Dash-dot variants
/// have no CSS equivalent and collapse to `dashed` (documented lossy mapping).
fn dash_to_css(dash: DashStyle) -> &'static str {
    match dash {
        DashStyle::Solid => "solid",
        DashStyle::Dash | DashStyle::DashDot | DashStyle::LongDash => "dashed",
        DashStyle::Dot => "dotted",
    }
}

/// Resolves a border. Suppressed entirely unless the line carries a fill and
/// its width converts to at least one pixel; a zero-width or colorless
/// border is never emitted.
pub(crate) fn line_style(line: &Line, scheme: Option<&ColorScheme>, style: &mut IndexMap<String, String>) {
    let Some(fill) = &line.fill else {
        return;
    };
    let width_px = emu_to_px(line.width);
    if width_px < MIN_BORDER_PX {
        return;
    }
    style.insert("border-width".to_string(), format!("{}px", width_px));
    style.insert("border-style".to_string(), dash_to_css(line.dash).to_string());
    if let Some(hex) = resolve_color(&fill.color, scheme) {
        style.insert("border-color".to_string(), hex);
    }
}

/// Resolves a drop shadow. Suppressed when both blur and distance are zero
/// or the color is effectively transparent. The polar offset uses the
/// source's angle convention directly (unlike gradients, no axis correction;
/// this asymmetry matches the shipped behavior of the original renderer).
pub(crate) fn shadow_style(shadow: &Shadow, scheme: Option<&ColorScheme>, style: &mut IndexMap<String, String>) {
    let blur_px = emu_to_px(shadow.blur);
    let dist_px = emu_to_px(shadow.distance);
    if blur_px == 0 && dist_px == 0 {
        return;
    }
    if shadow.alpha < MIN_SHADOW_ALPHA {
        return;
    }
    let angle_rad = shadow.direction_deg.to_radians();
    let offset_x = (dist_px as f64 * angle_rad.cos()).round() as i64;
    let offset_y = (dist_px as f64 * angle_rad.sin()).round() as i64;
    let hex = resolve_color(&shadow.color, scheme).unwrap_or_else(|| "#333333".to_string());
    style.insert(
        "box-shadow".to_string(),
        format!("{}px {}px {}px {}", offset_x, offset_y, blur_px, hex),
    );
}

fn transform_style(shape: &Shape, style: &mut IndexMap<String, String>) {
    let mut transforms = Vec::new();
    if shape.rotation_deg != 0.0 {
        transforms.push(format!("rotate({}deg)", shape.rotation_deg));
    }
    if shape.flip_h {
        transforms.push("scaleX(-1)".to_string());
    }
    if shape.flip_v {
        transforms.push("scaleY(-1)".to_string());
    }
    if !transforms.is_empty() {
        style.insert("transform".to_string(), transforms.join(" "));
        style.insert("transform-origin".to_string(), "center center".to_string());
    }
}

/// Resolves a shape's full visual style map: fill (solid and gradient;
/// picture fills are flagged and handled by the flattener's binary
/// extraction), border, shadow and transform.
pub(crate) fn resolve_style(shape: &Shape, scheme: Option<&ColorScheme>) -> IndexMap<String, String> {
    let mut style = IndexMap::new();

    match &shape.fill {
        Some(Fill::Solid(solid)) => solid_fill_style(solid, scheme, &mut style),
        Some(Fill::Gradient(gradient)) => {
            if let Some(css) = gradient_css(gradient, scheme) {
                style.insert("background".to_string(), css);
            }
        }
        // Picture fills become image render items; no CSS here.
        Some(Fill::Picture(_)) | Some(Fill::None) | None => {}
    }

    if let Some(line) = &shape.line {
        line_style(line, scheme, &mut style);
    }
    if let Some(shadow) = &shape.shadow {
        shadow_style(shadow, scheme, &mut style);
    }
    transform_style(shape, &mut style);

    style
}
