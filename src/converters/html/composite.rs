//! Detects composite glyphs: dense clusters of tiny filled primitives that
//! together form one visual mark (hand-drawn QR codes, pixel-art icons,
//! mosaic logos). Emitting each cell as its own absolutely positioned box
//! would bloat the output and break the visual unit, so a qualifying group
//! collapses into a single render item whose parts are positioned relative
//! to the group's own box.

use log::debug;

use crate::models::{
    colors::ColorScheme,
    fill::{Fill, ImageBlob},
    shape::{Shape, ShapeKind},
};

use super::{
    color::resolve_color,
    constants::{
        COMPOSITE_ASPECT_MAX, COMPOSITE_ASPECT_MIN, COMPOSITE_MAX_SIZE_PX,
        COMPOSITE_MIN_CHILDREN, COMPOSITE_MIN_PART_SHARE,
    },
    item::{CompositePaint, CompositePart},
    units::emu_to_px,
};

/// True for a child that can serve as one cell of the glyph: a solidly
/// filled freeform or an embedded picture.
fn is_cell(shape: &Shape) -> bool {
    match &shape.kind {
        ShapeKind::Freeform => matches!(shape.fill, Some(Fill::Solid(_))),
        ShapeKind::Picture => shape.image.as_ref().is_some_and(|b| !b.bytes.is_empty()),
        _ => false,
    }
}

/// Checks whether a group qualifies as a composite glyph and, if so, builds
/// its proportional parts. `extract_asset` registers a picture cell's bytes
/// and returns the asset name to reference.
///
/// Qualification is conjunctive: compact box (at most 150px on both axes),
/// near-square aspect, at least 10 children, and at least 80% of them
/// usable cells. A group failing any criterion is flattened normally by the
/// caller.
pub(crate) fn detect(
    shape: &Shape,
    scheme: Option<&ColorScheme>,
    mut extract_asset: impl FnMut(&ImageBlob) -> String,
) -> Option<Vec<CompositePart>> {
    let ShapeKind::Group(children) = &shape.kind else {
        return None;
    };

    let width_px = emu_to_px(shape.frame.width);
    let height_px = emu_to_px(shape.frame.height);
    if width_px <= 0 || height_px <= 0 {
        return None;
    }
    if width_px > COMPOSITE_MAX_SIZE_PX || height_px > COMPOSITE_MAX_SIZE_PX {
        return None;
    }
    let aspect = width_px as f64 / height_px as f64;
    if !(COMPOSITE_ASPECT_MIN..=COMPOSITE_ASPECT_MAX).contains(&aspect) {
        return None;
    }
    if children.len() < COMPOSITE_MIN_CHILDREN {
        return None;
    }
    let cells = children.iter().filter(|c| is_cell(c)).count();
    if (cells as f64) < COMPOSITE_MIN_PART_SHARE * children.len() as f64 {
        return None;
    }

    debug!(
        "composite glyph: {}x{}px group with {}/{} cells",
        width_px,
        height_px,
        cells,
        children.len()
    );

    let group_w = shape.frame.width as f64;
    let group_h = shape.frame.height as f64;
    let parts = children
        .iter()
        .filter(|c| is_cell(c))
        .map(|child| {
            let paint = match (&child.fill, &child.image) {
                (Some(Fill::Solid(solid)), _) if child.kind == ShapeKind::Freeform => {
                    CompositePaint::Color(
                        resolve_color(&solid.color, scheme)
                            .unwrap_or_else(|| "#808080".to_string()),
                    )
                }
                (_, Some(blob)) => CompositePaint::Asset(extract_asset(blob)),
                // unreachable given is_cell, but harmless
                _ => CompositePaint::Color("#808080".to_string()),
            };
            CompositePart {
                left_pct: (child.frame.left - shape.frame.left) as f64 / group_w * 100.0,
                top_pct: (child.frame.top - shape.frame.top) as f64 / group_h * 100.0,
                width_pct: child.frame.width as f64 / group_w * 100.0,
                height_pct: child.frame.height as f64 / group_h * 100.0,
                paint,
            }
        })
        .collect();

    Some(parts)
}
