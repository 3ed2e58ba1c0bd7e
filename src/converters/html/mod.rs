//! Deck to static HTML conversion.
//!
//! The pipeline per slide: resolve the background (and from it the default
//! text color), flatten the shape tree into an ordered render list, then
//! serialize all pages into the output documents. Failures below the
//! document level degrade the output instead of aborting it.

pub mod background;
pub mod classify;
pub mod color;
pub mod composite;
pub mod constants;
pub mod error;
pub mod flatten;
pub mod item;
pub mod render;
pub mod style;
pub mod text;
pub mod units;

use log::{debug, warn};

pub use error::HtmlConversionError;
pub use item::{
    Asset, Classification, CompositePaint, CompositePart, HtmlOutput, ImageRole, LayoutBox,
    RenderItem, RenderItemKind, ResolvedBackground, SlidePage,
};

use crate::errors::{DeckError, Result};
use crate::models::slide::Deck;

/// Converts a deck into its complete HTML rendering: structured pages,
/// extracted binary assets, and the three output documents.
///
/// A slide whose flattening fails is emitted as an empty page so slide
/// numbering stays intact for the rest of the deck.
pub fn convert_deck_to_html(deck: &Deck) -> Result<HtmlOutput> {
    if deck.slide_width <= 0 || deck.slide_height <= 0 {
        return Err(DeckError::InvalidInput(format!(
            "non-positive slide dimensions: {}x{} EMU",
            deck.slide_width, deck.slide_height
        )));
    }

    let width_px = units::emu_to_px(deck.slide_width);
    let height_px = units::emu_to_px(deck.slide_height);
    let aspect_ratio = width_px as f64 / height_px as f64;

    let mut pages = Vec::with_capacity(deck.slides.len());
    let mut assets = Vec::new();

    for (index, slide) in deck.slides.iter().enumerate() {
        let number = index + 1;
        debug!("converting slide {} of {}", number, deck.slides.len());

        let background = background::resolve_background(slide, deck, number, &mut assets);
        let text_color = color::default_text_color(background.color.as_deref());

        let items = match flatten::flatten_slide(
            slide,
            deck,
            number,
            &background,
            text_color,
            &mut assets,
        ) {
            Ok(items) => items,
            Err(e) => {
                warn!("slide {}: flattening failed, emitting empty page: {}", number, e);
                Vec::new()
            }
        };

        pages.push(SlidePage {
            number,
            width_px,
            height_px,
            aspect_ratio,
            background,
            items,
        });
    }

    let index_html = render::index_html(&pages).map_err(DeckError::from)?;
    let style_css = render::style_css(&pages);
    let metadata_json = render::metadata_json(&pages).map_err(DeckError::from)?;

    Ok(HtmlOutput {
        pages,
        assets,
        index_html,
        style_css,
        metadata_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        colors::{ColorRef, RgbColor},
        common::Frame,
        fill::{Fill, SolidFill},
        shape::{Shape, ShapeKind},
        slide::Slide,
        text::{Paragraph, Run, TextBody},
    };

    const PX: i64 = 9525;

    #[test]
    fn converts_a_dark_slide_end_to_end() {
        let mut bg = Shape::new(ShapeKind::Freeform, Frame::new(0, 0, 960 * PX, 540 * PX));
        bg.fill = Some(Fill::Solid(SolidFill::opaque(ColorRef::Rgb(RgbColor::new(
            0x1f, 0x38, 0x64,
        )))));
        let mut text = Shape::new(
            ShapeKind::Text,
            Frame::new(100 * PX, 100 * PX, 400 * PX, 80 * PX),
        );
        text.text = Some(TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![Run::plain("Hello")])],
        });

        let deck = Deck {
            slide_width: 960 * PX,
            slide_height: 540 * PX,
            theme: None,
            slides: vec![Slide::with_shapes(vec![bg, text])],
        };

        let out = convert_deck_to_html(&deck).unwrap();
        assert_eq!(out.pages.len(), 1);
        assert_eq!(out.pages[0].items.len(), 1);
        assert_eq!(
            out.pages[0].background.color.as_deref(),
            Some("#1f3864")
        );
        assert!(out.index_html.contains("Hello"));
        assert!(out.index_html.contains("color: #ffffff;"));
        assert!(out.index_html.contains("background-color: #1f3864;"));
        assert!(out.style_css.contains("aspect-ratio"));
        assert!(out.metadata_json.contains("\"totalSlides\": 1"));
        assert!(out.assets.is_empty());
    }

    #[test]
    fn rejects_degenerate_slide_dimensions() {
        let deck = Deck {
            slide_width: 0,
            slide_height: 540 * PX,
            theme: None,
            slides: vec![],
        };
        assert!(matches!(
            convert_deck_to_html(&deck),
            Err(DeckError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_deck_converts_to_empty_document() {
        let deck = Deck {
            slide_width: 960 * PX,
            slide_height: 540 * PX,
            theme: None,
            slides: vec![],
        };
        let out = convert_deck_to_html(&deck).unwrap();
        assert!(out.pages.is_empty());
        assert!(out.index_html.contains("</html>"));
        assert!(out.metadata_json.contains("\"totalSlides\": 0"));
    }
}
