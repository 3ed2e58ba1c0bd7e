//! Resolves the slide background through an ordered fallback chain:
//! slide-declared fill, shape-as-background, layout, then master. The first
//! step that yields anything wins; a later source never overwrites an
//! earlier success. Resolution happens before the shape tree is flattened
//! because the default text color depends on the background's luminance.

use log::{debug, warn};

use crate::models::{
    fill::{Fill, ImageBlob},
    shape::{Shape, ShapeKind},
    slide::{Deck, InheritedPage, PageFill, Slide},
};

use super::{
    color::resolve_color,
    constants::{
        BG_FREEFORM_ANCHOR_PCT, BG_FREEFORM_MIN_AREA_PCT, BG_INHERITED_MIN_AREA_PCT,
        BG_PICTURE_ANCHOR_PCT, BG_PICTURE_MIN_AREA_PCT,
    },
    item::{Asset, ResolvedBackground},
    units::{emu_to_px, percent_value},
};

/// Registers a background image blob as a named asset and returns its name.
fn push_asset(assets: &mut Vec<Asset>, stem: String, blob: &ImageBlob) -> String {
    let name = format!("{}.{}", stem, blob.extension);
    assets.push(Asset {
        name: name.clone(),
        bytes: blob.bytes.clone(),
    });
    name
}

/// Recursively collects picture shapes, descending through groups.
fn collect_pictures<'a>(shapes: &'a [Shape], out: &mut Vec<&'a Shape>) {
    for shape in shapes {
        match &shape.kind {
            ShapeKind::Picture => out.push(shape),
            ShapeKind::Group(children) => collect_pictures(children, out),
            _ => {}
        }
    }
}

/// The largest picture covering more than 40% of the slide and anchored near
/// the top-left corner. Decks frequently fake a background with a big photo.
fn largest_cover_picture<'a>(slide: &'a Slide, deck: &Deck) -> Option<&'a ImageBlob> {
    let slide_w = emu_to_px(deck.slide_width);
    let slide_h = emu_to_px(deck.slide_height);
    let slide_area = (slide_w * slide_h) as f64;
    if slide_area <= 0.0 {
        return None;
    }

    let mut pictures = Vec::new();
    collect_pictures(&slide.shapes, &mut pictures);
    pictures.sort_by_key(|s| std::cmp::Reverse(s.frame.area()));

    for shape in pictures {
        let area_px = (emu_to_px(shape.frame.width) * emu_to_px(shape.frame.height)) as f64;
        let area_pct = area_px / slide_area * 100.0;
        if area_pct <= BG_PICTURE_MIN_AREA_PCT {
            break; // sorted descending; nothing further qualifies
        }
        let left_pct = percent_value(emu_to_px(shape.frame.left), slide_w);
        let top_pct = percent_value(emu_to_px(shape.frame.top), slide_h);
        if left_pct < BG_PICTURE_ANCHOR_PCT && top_pct < BG_PICTURE_ANCHOR_PCT {
            debug!(
                "background candidate: picture covering {:.1}% at ({:.1}%, {:.1}%)",
                area_pct, left_pct, top_pct
            );
            return shape.image.as_ref().filter(|blob| !blob.bytes.is_empty());
        }
    }
    None
}

/// A relationship-referenced image no visible picture shape uses, matched by
/// payload length. Backgrounds declared only in the part's relationship
/// table surface this way.
fn unused_relationship_image<'a>(slide: &'a Slide) -> Option<&'a ImageBlob> {
    let mut pictures = Vec::new();
    collect_pictures(&slide.shapes, &mut pictures);
    let used: Vec<usize> = pictures
        .iter()
        .filter_map(|s| s.image.as_ref())
        .map(|blob| blob.bytes.len())
        .collect();

    slide
        .relationships
        .iter()
        .map(|rel| &rel.image)
        .find(|blob| !blob.bytes.is_empty() && !used.contains(&blob.bytes.len()))
}

/// Step 1: the slide's own declared fill.
fn declared_slide_fill(
    slide: &Slide,
    deck: &Deck,
    slide_number: usize,
    assets: &mut Vec<Asset>,
) -> Option<ResolvedBackground> {
    let PageFill::Declared(fill) = &slide.background else {
        return None;
    };
    match fill {
        Fill::Solid(solid) => {
            let color = resolve_color(&solid.color, deck.theme.as_ref())?;
            Some(ResolvedBackground {
                color: Some(color),
                image: None,
            })
        }
        Fill::Picture(blob) => {
            let stem = format!("slide{}_background", slide_number);
            let blob = if !blob.bytes.is_empty() {
                blob
            } else if let Some(found) = largest_cover_picture(slide, deck) {
                found
            } else if let Some(found) = unused_relationship_image(slide) {
                found
            } else {
                warn!(
                    "slide {}: picture background declared but no image payload found",
                    slide_number
                );
                return None;
            };
            Some(ResolvedBackground {
                color: None,
                image: Some(push_asset(assets, stem, blob)),
            })
        }
        Fill::Gradient(_) | Fill::None => None,
    }
}

/// Step 2: a full-bleed solid freeform acting as a synthetic background
/// rectangle. It outranks layout/master inheritance because it is visually
/// authoritative on the slide itself.
fn full_bleed_freeform(slide: &Slide, deck: &Deck) -> Option<ResolvedBackground> {
    let shape = find_background_freeform(slide, deck)?;
    let Some(Fill::Solid(solid)) = &shape.fill else {
        return None;
    };
    let color = resolve_color(&solid.color, deck.theme.as_ref())?;
    debug!("background resolved from full-bleed freeform: {}", color);
    Some(ResolvedBackground {
        color: Some(color),
        image: None,
    })
}

/// The top-level freeform the flattener must later suppress, if any: area
/// above 95% of the slide, anchored within 5% of the origin, solidly filled.
pub(crate) fn find_background_freeform<'a>(slide: &'a Slide, deck: &Deck) -> Option<&'a Shape> {
    let slide_w = emu_to_px(deck.slide_width);
    let slide_h = emu_to_px(deck.slide_height);
    let slide_area = (slide_w * slide_h) as f64;
    if slide_area <= 0.0 {
        return None;
    }
    slide.shapes.iter().find(|shape| {
        if shape.kind != ShapeKind::Freeform {
            return false;
        }
        if !matches!(shape.fill, Some(Fill::Solid(_))) {
            return false;
        }
        let area_px = (emu_to_px(shape.frame.width) * emu_to_px(shape.frame.height)) as f64;
        let area_pct = area_px / slide_area * 100.0;
        let left_pct = percent_value(emu_to_px(shape.frame.left), slide_w);
        let top_pct = percent_value(emu_to_px(shape.frame.top), slide_h);
        area_pct > BG_FREEFORM_MIN_AREA_PCT
            && left_pct < BG_FREEFORM_ANCHOR_PCT
            && top_pct < BG_FREEFORM_ANCHOR_PCT
    })
}

/// Steps 3 and 4: a layout or master page. First a full-bleed picture among
/// its shapes, then its declared fill.
fn inherited_page_background(
    page: &InheritedPage,
    deck: &Deck,
    stem: String,
    assets: &mut Vec<Asset>,
) -> Option<ResolvedBackground> {
    let slide_w = emu_to_px(deck.slide_width);
    let slide_h = emu_to_px(deck.slide_height);
    let slide_area = (slide_w * slide_h) as f64;

    if slide_area > 0.0 {
        let mut pictures = Vec::new();
        collect_pictures(&page.shapes, &mut pictures);
        for shape in pictures {
            let area_px = (emu_to_px(shape.frame.width) * emu_to_px(shape.frame.height)) as f64;
            if area_px / slide_area * 100.0 > BG_INHERITED_MIN_AREA_PCT {
                if let Some(blob) = shape.image.as_ref().filter(|b| !b.bytes.is_empty()) {
                    return Some(ResolvedBackground {
                        color: None,
                        image: Some(push_asset(assets, stem, blob)),
                    });
                }
            }
        }
    }

    match &page.background {
        PageFill::Declared(Fill::Solid(solid)) => {
            let color = resolve_color(&solid.color, deck.theme.as_ref())?;
            Some(ResolvedBackground {
                color: Some(color),
                image: None,
            })
        }
        PageFill::Declared(Fill::Picture(blob)) if !blob.bytes.is_empty() => {
            Some(ResolvedBackground {
                color: None,
                image: Some(push_asset(assets, stem, blob)),
            })
        }
        _ => None,
    }
}

/// Resolves a slide's background through the full fallback chain. An
/// exhausted chain yields the default (no color, no image) and the slide
/// still renders; this is a per-slide recoverable condition.
pub(crate) fn resolve_background(
    slide: &Slide,
    deck: &Deck,
    slide_number: usize,
    assets: &mut Vec<Asset>,
) -> ResolvedBackground {
    if let Some(bg) = declared_slide_fill(slide, deck, slide_number, assets) {
        return bg;
    }
    if let Some(bg) = full_bleed_freeform(slide, deck) {
        return bg;
    }

    // Layout and master are consulted only when the slide explicitly defers
    // to them; a slide that declared its own (even unresolvable) fill never
    // inherits.
    if slide.background == PageFill::Inherit {
        if let Some(layout) = &slide.layout {
            let stem = format!("slide{}_layout_bg", slide_number);
            if let Some(bg) = inherited_page_background(layout, deck, stem, assets) {
                return bg;
            }
        }
        if let Some(master) = &slide.master {
            let stem = format!("slide{}_master_bg", slide_number);
            if let Some(bg) = inherited_page_background(master, deck, stem, assets) {
                return bg;
            }
        }
    }

    debug!("slide {}: background chain exhausted", slide_number);
    ResolvedBackground::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        colors::{ColorRef, RgbColor},
        common::Frame,
        fill::SolidFill,
    };

    const PX: i64 = 9525;

    fn deck_with(slide: Slide) -> Deck {
        Deck {
            slide_width: 960 * PX,
            slide_height: 540 * PX,
            theme: None,
            slides: vec![slide],
        }
    }

    fn solid(r: u8, g: u8, b: u8) -> Fill {
        Fill::Solid(SolidFill::opaque(ColorRef::Rgb(RgbColor::new(r, g, b))))
    }

    fn full_bleed_freeform_shape(fill: Fill) -> Shape {
        let mut shape = Shape::new(
            ShapeKind::Freeform,
            Frame::new(0, 0, 960 * PX, 540 * PX),
        );
        shape.fill = Some(fill);
        shape
    }

    #[test]
    fn declared_solid_fill_wins() {
        let mut slide = Slide::with_shapes(vec![]);
        slide.background = PageFill::Declared(solid(0x10, 0x20, 0x30));
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 1, &mut assets);
        assert_eq!(bg.color.as_deref(), Some("#102030"));
        assert!(assets.is_empty());
    }

    #[test]
    fn slide_fill_is_never_overwritten_by_master() {
        let mut master = InheritedPage::default();
        master.background = PageFill::Declared(solid(0xff, 0x00, 0x00));
        let mut slide = Slide::with_shapes(vec![]);
        slide.background = PageFill::Declared(solid(0x00, 0x00, 0xff));
        slide.master = Some(master);
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 1, &mut assets);
        assert_eq!(bg.color.as_deref(), Some("#0000ff"));
    }

    #[test]
    fn full_bleed_freeform_beats_master() {
        let mut master = InheritedPage::default();
        master.background = PageFill::Declared(solid(0xff, 0x00, 0x00));
        let mut slide = Slide::with_shapes(vec![full_bleed_freeform_shape(solid(0x22, 0x22, 0x22))]);
        slide.master = Some(master);
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 1, &mut assets);
        assert_eq!(bg.color.as_deref(), Some("#222222"));
    }

    #[test]
    fn inherit_falls_through_layout_then_master() {
        let mut layout = InheritedPage::default();
        layout.background = PageFill::Inherit;
        let mut master = InheritedPage::default();
        master.background = PageFill::Declared(solid(0xab, 0xcd, 0xef));
        let mut slide = Slide::with_shapes(vec![]);
        slide.layout = Some(layout);
        slide.master = Some(master);
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 1, &mut assets);
        assert_eq!(bg.color.as_deref(), Some("#abcdef"));
    }

    #[test]
    fn picture_background_falls_back_to_cover_picture_shape() {
        let mut picture = Shape::new(
            ShapeKind::Picture,
            Frame::new(0, 0, 900 * PX, 500 * PX), // ~87% of the slide
        );
        picture.image = Some(ImageBlob::new(vec![1, 2, 3], "png"));
        let mut slide = Slide::with_shapes(vec![picture]);
        slide.background = PageFill::Declared(Fill::Picture(ImageBlob::new(vec![], "png")));
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 2, &mut assets);
        assert_eq!(bg.image.as_deref(), Some("slide2_background.png"));
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].bytes, vec![1, 2, 3]);
    }

    #[test]
    fn exhausted_chain_yields_default() {
        let slide = Slide::with_shapes(vec![]);
        let deck = deck_with(slide);
        let mut assets = Vec::new();
        let bg = resolve_background(&deck.slides[0], &deck, 1, &mut assets);
        assert_eq!(bg, ResolvedBackground::default());
    }
}
