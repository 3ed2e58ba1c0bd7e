//! Flattens a slide's nested shape tree into the ordered render list.
//!
//! Traversal is depth-first in document order. A single monotonically
//! increasing counter assigns stacking indices as items are emitted, so
//! children hoisted out of groups keep their paint order relative to
//! everything around them; the groups themselves are transparent containers
//! and consume no index. The one exception is a qualifying composite glyph,
//! which is emitted as a single item in the group's place.

use log::{debug, warn};

use crate::models::{
    colors::ColorScheme,
    fill::{Fill, ImageBlob},
    shape::{Shape, ShapeKind},
    slide::{Deck, Slide},
};

use super::{
    background::find_background_freeform,
    classify::classify,
    composite,
    error::Result,
    item::{RenderItem, RenderItemKind, ResolvedBackground},
    style::{resolve_box, resolve_style},
    text::{table_to_html, text_body_to_html},
    units::{emu_to_px, percent_value},
};

struct Flattener<'a> {
    scheme: Option<&'a ColorScheme>,
    slide_number: usize,
    slide_w_px: i64,
    slide_h_px: i64,
    default_text_color: &'a str,
    z: u32,
    image_ordinal: usize,
    items: Vec<RenderItem>,
    assets: &'a mut Vec<super::item::Asset>,
}

impl<'a> Flattener<'a> {
    fn next_z(&mut self) -> u32 {
        self.z += 1;
        self.z
    }

    /// Registers an image payload under the slide's next ordinal asset name.
    fn extract_image(&mut self, blob: &ImageBlob) -> String {
        self.image_ordinal += 1;
        let name = format!(
            "slide{}_img{}.{}",
            self.slide_number, self.image_ordinal, blob.extension
        );
        self.assets.push(super::item::Asset {
            name: name.clone(),
            bytes: blob.bytes.clone(),
        });
        name
    }

    fn push(&mut self, shape: &Shape, kind: RenderItemKind, classification: Option<super::item::Classification>) {
        let z = self.next_z();
        self.items.push(RenderItem {
            kind,
            item_box: resolve_box(&shape.frame, self.slide_w_px, self.slide_h_px, z),
            style: resolve_style(shape, self.scheme),
            classification,
        });
    }

    fn visit_picture(&mut self, shape: &Shape) -> Result<()> {
        let Some(blob) = shape.image.as_ref().filter(|b| !b.bytes.is_empty()) else {
            warn!(
                "slide {}: picture shape without image payload, suppressed",
                self.slide_number
            );
            return Ok(());
        };
        let position = (
            percent_value(emu_to_px(shape.frame.left), self.slide_w_px),
            percent_value(emu_to_px(shape.frame.top), self.slide_h_px),
        );
        // Decode failure classifies as unknown; the image is still emitted
        // and the browser gets its own chance at the bytes.
        let classification = classify(&blob.bytes, position);
        let asset = self.extract_image(blob);
        self.push(shape, RenderItemKind::Image { asset }, Some(classification));
        Ok(())
    }

    fn visit_table(&mut self, shape: &Shape) -> Result<()> {
        let Some(grid) = &shape.table else {
            debug!("table shape without grid data, suppressed");
            return Ok(());
        };
        let html = table_to_html(grid, self.scheme)?;
        self.push(shape, RenderItemKind::Table { html }, None);
        Ok(())
    }

    /// Non-container, non-picture, non-table shapes: text wins, then a
    /// picture fill, then a bare styled box if there is anything to see.
    fn visit_basic(&mut self, shape: &Shape) -> Result<()> {
        if let Some(body) = shape.text.as_ref().filter(|b| !b.is_blank()) {
            let html = text_body_to_html(body, self.scheme, self.default_text_color)?;
            self.push(shape, RenderItemKind::Text { html }, None);
            return Ok(());
        }

        if let Some(Fill::Picture(blob)) = &shape.fill {
            if !blob.bytes.is_empty() {
                let asset = self.extract_image(blob);
                self.push(shape, RenderItemKind::Image { asset }, None);
            } else {
                warn!(
                    "slide {}: picture fill without image payload, suppressed",
                    self.slide_number
                );
            }
            return Ok(());
        }

        // A shape with neither text nor visible styling contributes nothing;
        // empty placeholders in particular are dropped here.
        let style = resolve_style(shape, self.scheme);
        let visible = style.contains_key("background-color")
            || style.contains_key("background")
            || style.contains_key("border-width");
        if visible {
            self.push(shape, RenderItemKind::Shape, None);
        } else {
            debug!("invisible {:?} shape suppressed", shape.kind);
        }
        Ok(())
    }

    fn visit(&mut self, shape: &Shape) -> Result<()> {
        match &shape.kind {
            ShapeKind::Group(children) => {
                let scheme = self.scheme;
                if let Some(parts) = composite::detect(shape, scheme, |blob| self.extract_image(blob)) {
                    self.push(shape, RenderItemKind::CompositeGlyph { parts }, None);
                    return Ok(());
                }
                for child in children {
                    self.visit(child)?;
                }
                Ok(())
            }
            ShapeKind::Picture => self.visit_picture(shape),
            ShapeKind::Table => self.visit_table(shape),
            ShapeKind::Text
            | ShapeKind::AutoShape
            | ShapeKind::Freeform
            | ShapeKind::Line
            | ShapeKind::Placeholder => self.visit_basic(shape),
        }
    }
}

/// Flattens one slide into its ordered render list. The already-resolved
/// background is consulted to suppress the full-bleed freeform that produced
/// it, so the same rectangle is not painted twice.
pub(crate) fn flatten_slide<'a>(
    slide: &Slide,
    deck: &Deck,
    slide_number: usize,
    background: &ResolvedBackground,
    default_text_color: &'a str,
    assets: &mut Vec<super::item::Asset>,
) -> Result<Vec<RenderItem>> {
    let suppressed = if background.color.is_some() {
        find_background_freeform(slide, deck)
    } else {
        None
    };

    let mut flattener = Flattener {
        scheme: deck.theme.as_ref(),
        slide_number,
        slide_w_px: emu_to_px(deck.slide_width),
        slide_h_px: emu_to_px(deck.slide_height),
        default_text_color,
        z: 0,
        image_ordinal: 0,
        items: Vec::new(),
        assets,
    };

    for shape in &slide.shapes {
        if let Some(bg) = suppressed {
            if std::ptr::eq(shape, bg) {
                debug!("slide {}: background freeform suppressed", slide_number);
                continue;
            }
        }
        flattener.visit(shape)?;
    }
    Ok(flattener.items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::html::{
        background::resolve_background,
        color::default_text_color,
        item::{Asset, ImageRole},
    };
    use crate::models::{
        colors::{ColorRef, RgbColor},
        common::Frame,
        fill::SolidFill,
        text::{Paragraph, Run, TextBody},
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

    fn text_shape(text: &str) -> Shape {
        let mut shape = Shape::new(
            ShapeKind::Text,
            Frame::new(100 * PX, 100 * PX, 400 * PX, 80 * PX),
        );
        shape.text = Some(TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![Run::plain(text)])],
        });
        shape
    }

    fn flatten(
        deck: &Deck,
        background: &ResolvedBackground,
    ) -> (Vec<RenderItem>, Vec<Asset>) {
        let mut assets = Vec::new();
        let color = default_text_color(background.color.as_deref());
        let items =
            flatten_slide(&deck.slides[0], deck, 1, background, color, &mut assets).unwrap();
        (items, assets)
    }

    #[test]
    fn dark_background_slide_yields_one_white_text_item() {
        // Full-bleed dark blue freeform plus a colorless "Hello" text box.
        let mut bg_shape = Shape::new(
            ShapeKind::Freeform,
            Frame::new(0, 0, 960 * PX, 540 * PX),
        );
        bg_shape.fill = Some(solid(0x1f, 0x38, 0x64));
        let slide = Slide::with_shapes(vec![bg_shape, text_shape("Hello")]);
        let deck = deck_with(slide);

        let mut bg_assets = Vec::new();
        let background = resolve_background(&deck.slides[0], &deck, 1, &mut bg_assets);
        assert_eq!(background.color.as_deref(), Some("#1f3864"));

        let (items, _) = flatten(&deck, &background);
        assert_eq!(items.len(), 1, "the freeform must not become an item");
        match &items[0].kind {
            RenderItemKind::Text { html } => {
                assert!(html.contains("color: #ffffff;"));
                assert!(html.contains("Hello"));
            }
            other => panic!("expected text item, got {:?}", other),
        }
    }

    #[test]
    fn stacking_indices_increase_through_groups() {
        let mut a = Shape::new(ShapeKind::AutoShape, Frame::new(0, 0, 50 * PX, 50 * PX));
        a.fill = Some(solid(1, 1, 1));
        let mut b = Shape::new(
            ShapeKind::AutoShape,
            Frame::new(60 * PX, 0, 50 * PX, 50 * PX),
        );
        b.fill = Some(solid(2, 2, 2));
        // Large non-square group: never a composite glyph.
        let group = Shape::new(
            ShapeKind::Group(vec![a, b]),
            Frame::new(0, 0, 600 * PX, 100 * PX),
        );
        let mut after = Shape::new(
            ShapeKind::AutoShape,
            Frame::new(0, 200 * PX, 50 * PX, 50 * PX),
        );
        after.fill = Some(solid(3, 3, 3));

        let deck = deck_with(Slide::with_shapes(vec![group, after]));
        let (items, _) = flatten(&deck, &ResolvedBackground::default());
        let zs: Vec<u32> = items.iter().map(|i| i.item_box.z_index).collect();
        assert_eq!(zs, vec![1, 2, 3], "group consumes no index of its own");
    }

    #[test]
    fn blank_text_shape_is_suppressed() {
        let deck = deck_with(Slide::with_shapes(vec![text_shape("   ")]));
        let (items, _) = flatten(&deck, &ResolvedBackground::default());
        assert!(items.is_empty());
    }

    #[test]
    fn empty_placeholder_is_suppressed_but_styled_one_survives() {
        let bare = Shape::new(
            ShapeKind::Placeholder,
            Frame::new(0, 0, 100 * PX, 100 * PX),
        );
        let mut styled = Shape::new(
            ShapeKind::Placeholder,
            Frame::new(0, 0, 100 * PX, 100 * PX),
        );
        styled.fill = Some(solid(9, 9, 9));
        let deck = deck_with(Slide::with_shapes(vec![bare, styled]));
        let (items, _) = flatten(&deck, &ResolvedBackground::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, RenderItemKind::Shape);
    }

    #[test]
    fn picture_without_payload_is_suppressed() {
        let mut picture = Shape::new(
            ShapeKind::Picture,
            Frame::new(0, 0, 100 * PX, 100 * PX),
        );
        picture.image = Some(ImageBlob::new(vec![], "png"));
        let deck = deck_with(Slide::with_shapes(vec![picture]));
        let (items, assets) = flatten(&deck, &ResolvedBackground::default());
        assert!(items.is_empty());
        assert!(assets.is_empty());
    }

    #[test]
    fn undecodable_picture_is_still_emitted_as_unknown() {
        let mut picture = Shape::new(
            ShapeKind::Picture,
            Frame::new(0, 0, 100 * PX, 100 * PX),
        );
        picture.image = Some(ImageBlob::new(vec![1, 2, 3], "png"));
        let deck = deck_with(Slide::with_shapes(vec![picture]));
        let (items, assets) = flatten(&deck, &ResolvedBackground::default());
        assert_eq!(items.len(), 1);
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].name, "slide1_img1.png");
        let c = items[0].classification.as_ref().unwrap();
        assert_eq!(c.role, ImageRole::Unknown);
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn image_assets_are_numbered_per_slide() {
        let mut p1 = Shape::new(ShapeKind::Picture, Frame::new(0, 0, 50 * PX, 50 * PX));
        p1.image = Some(ImageBlob::new(vec![1], "png"));
        let mut p2 = Shape::new(
            ShapeKind::Picture,
            Frame::new(60 * PX, 0, 50 * PX, 50 * PX),
        );
        p2.image = Some(ImageBlob::new(vec![2], "jpeg"));
        let deck = deck_with(Slide::with_shapes(vec![p1, p2]));
        let (_, assets) = flatten(&deck, &ResolvedBackground::default());
        let names: Vec<&str> = assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["slide1_img1.png", "slide1_img2.jpeg"]);
    }

    #[test]
    fn full_bleed_freeform_survives_when_background_came_from_elsewhere() {
        let mut bg_shape = Shape::new(
            ShapeKind::Freeform,
            Frame::new(0, 0, 960 * PX, 540 * PX),
        );
        bg_shape.fill = Some(solid(0x1f, 0x38, 0x64));
        let deck = deck_with(Slide::with_shapes(vec![bg_shape]));
        // No resolved background color: nothing to suppress against.
        let (items, _) = flatten(&deck, &ResolvedBackground::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, RenderItemKind::Shape);
    }
}
