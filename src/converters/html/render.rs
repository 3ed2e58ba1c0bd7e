//! Serializes processed pages into the three output documents: the
//! presentation HTML, its stylesheet, and a machine-readable metadata
//! summary.

use std::fmt::Write;

use indexmap::IndexMap;
use serde_json::json;

use super::{
    error::Result,
    item::{CompositePaint, RenderItem, RenderItemKind, SlidePage},
};

fn inline_style(style: &IndexMap<String, String>) -> String {
    style
        .iter()
        .map(|(k, v)| format!("{}: {};", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

fn item_class(kind: &RenderItemKind) -> &'static str {
    match kind {
        RenderItemKind::Text { .. } => "item item-text",
        RenderItemKind::Image { .. } => "item item-image",
        RenderItemKind::Table { .. } => "item item-table",
        RenderItemKind::Shape => "item item-shape",
        RenderItemKind::CompositeGlyph { .. } => "item item-composite",
    }
}

fn write_item(out: &mut String, item: &RenderItem) -> Result<()> {
    let b = &item.item_box;
    let mut style = format!(
        "left: {}; top: {}; width: {}; height: {}; z-index: {};",
        b.left, b.top, b.width, b.height, b.z_index
    );
    let extra = inline_style(&item.style);
    if !extra.is_empty() {
        style.push(' ');
        style.push_str(&extra);
    }

    write!(out, "<div class=\"{}\" style=\"{}\">", item_class(&item.kind), style)?;
    match &item.kind {
        RenderItemKind::Text { html } | RenderItemKind::Table { html } => out.push_str(html),
        RenderItemKind::Image { asset } => {
            // Small decoded images (QR codes especially) render at native
            // pixel size so they stay scannable; everything else scales to
            // its box.
            let fit = if item.classification.as_ref().is_some_and(|c| c.is_small()) {
                "object-fit: none; object-position: center;"
            } else {
                "object-fit: contain;"
            };
            write!(
                out,
                "<img src=\"{}\" alt=\"\" style=\"width: 100%; height: 100%; {}\">",
                asset, fit
            )?;
        }
        RenderItemKind::Shape => {}
        RenderItemKind::CompositeGlyph { parts } => {
            for part in parts {
                let paint = match &part.paint {
                    CompositePaint::Color(hex) => format!("background-color: {};", hex),
                    CompositePaint::Asset(name) => format!(
                        "background-image: url('{}'); background-size: cover;",
                        name
                    ),
                };
                write!(
                    out,
                    "<div style=\"position: absolute; left: {:.3}%; top: {:.3}%; width: {:.3}%; height: {:.3}%; {}\"></div>",
                    part.left_pct, part.top_pct, part.width_pct, part.height_pct, paint
                )?;
            }
        }
    }
    out.push_str("</div>");
    Ok(())
}

fn write_page(out: &mut String, page: &SlidePage) -> Result<()> {
    let mut style = String::new();
    if let Some(color) = &page.background.color {
        write!(style, "background-color: {};", color)?;
    }
    if let Some(image) = &page.background.image {
        write!(
            style,
            " background-image: url('{}'); background-size: cover; background-position: center;",
            image
        )?;
    }

    write!(
        out,
        "<div class=\"slide\" id=\"slide-{}\" style=\"{}\">",
        page.number,
        style.trim()
    )?;
    for item in &page.items {
        write_item(out, item)?;
    }
    out.push_str("</div>\n");
    Ok(())
}

/// Renders the full presentation document. Slides stack vertically; each is
/// a positioned container its items are laid out in by percentage.
pub(crate) fn index_html(pages: &[SlidePage]) -> Result<String> {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Presentation</title>\n<link rel=\"stylesheet\" href=\"style.css\">\n\
         </head>\n<body>\n<div class=\"presentation\">\n",
    );
    for page in pages {
        write_page(&mut out, page)?;
    }
    out.push_str("</div>\n</body>\n</html>\n");
    Ok(out)
}

/// Generates the stylesheet. Slides keep their aspect ratio responsively;
/// the ratio comes from the pages themselves (the mean, in case a deck mixes
/// sizes).
pub(crate) fn style_css(pages: &[SlidePage]) -> String {
    let aspect = if pages.is_empty() {
        16.0 / 9.0
    } else {
        pages.iter().map(|p| p.aspect_ratio).sum::<f64>() / pages.len() as f64
    };

    format!(
        "* {{ margin: 0; padding: 0; box-sizing: border-box; }}\n\
         body {{ background: #222; font-family: sans-serif; }}\n\
         .presentation {{ max-width: 1280px; margin: 0 auto; padding: 20px 0; }}\n\
         .slide {{ position: relative; width: 100%; aspect-ratio: {:.4}; \
         margin-bottom: 20px; background-color: #ffffff; overflow: hidden; }}\n\
         .item {{ position: absolute; }}\n\
         .item-text {{ overflow: hidden; }}\n\
         .item-table table {{ font-size: 14px; }}\n",
        aspect
    )
}

/// Serializes the per-deck summary consumed by downstream tooling.
pub(crate) fn metadata_json(pages: &[SlidePage]) -> serde_json::Result<String> {
    let slides: Vec<_> = pages
        .iter()
        .map(|p| {
            json!({
                "number": p.number,
                "widthPx": p.width_px,
                "heightPx": p.height_px,
                "itemCount": p.items.len(),
                "background": p.background,
            })
        })
        .collect();
    serde_json::to_string_pretty(&json!({
        "totalSlides": pages.len(),
        "slides": slides,
    }))
}
