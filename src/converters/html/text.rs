//! Renders text bodies and table grids to inline-styled HTML fragments.
//!
//! Fragments are built with `write!` into a `String`; the formatter error is
//! carried through the module's `Result` alias rather than unwrapped.

use std::fmt::Write;

use crate::models::{
    colors::ColorScheme,
    fill::Fill,
    table::TableGrid,
    text::{Alignment, Paragraph, Run, TextBody},
};

use super::{
    color::resolve_color,
    constants::INDENT_PX_PER_LEVEL,
    error::Result,
    units::pt_to_px,
};

/// Escapes the three characters that would change the markup's structure.
/// Quotes are left alone: run text is only ever emitted as element content.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn alignment_css(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "justify",
    }
}

fn write_run(out: &mut String, run: &Run, scheme: Option<&ColorScheme>, default_color: &str) -> Result<()> {
    let mut style = String::new();
    if let Some(family) = &run.font_family {
        write!(style, "font-family: '{}'; ", family)?;
    }
    if let Some(size_pt) = run.size_pt {
        write!(style, "font-size: {:.1}px; ", pt_to_px(size_pt))?;
    }
    let color = run
        .color
        .as_ref()
        .and_then(|c| resolve_color(c, scheme))
        .unwrap_or_else(|| default_color.to_string());
    write!(style, "color: {};", color)?;
    if run.bold {
        style.push_str(" font-weight: bold;");
    }
    if run.italic {
        style.push_str(" font-style: italic;");
    }
    if run.underline {
        style.push_str(" text-decoration: underline;");
    }

    let text = escape_html(&run.text).replace('\n', "<br>");
    write!(out, "<span style=\"{}\">{}</span>", style, text)?;
    Ok(())
}

fn write_paragraph(
    out: &mut String,
    paragraph: &Paragraph,
    scheme: Option<&ColorScheme>,
    default_color: &str,
) -> Result<()> {
    let mut style = String::from("margin: 0;");
    if let Some(alignment) = paragraph.alignment {
        write!(style, " text-align: {};", alignment_css(alignment))?;
    }
    if paragraph.level > 0 {
        write!(
            style,
            " margin-left: {}px;",
            paragraph.level as u32 * INDENT_PX_PER_LEVEL
        )?;
    }
    if let Some(spacing) = paragraph.line_spacing {
        write!(style, " line-height: {:.2};", spacing)?;
    }
    if let Some(before) = paragraph.space_before_pt {
        write!(style, " margin-top: {:.1}px;", pt_to_px(before))?;
    }
    if let Some(after) = paragraph.space_after_pt {
        write!(style, " margin-bottom: {:.1}px;", pt_to_px(after))?;
    }

    write!(out, "<p style=\"{}\">", style)?;
    for run in &paragraph.runs {
        write_run(out, run, scheme, default_color)?;
    }
    out.push_str("</p>");
    Ok(())
}

/// Renders a text body as a sequence of `<p>` elements. Paragraphs with no
/// visible characters are dropped; runs without an explicit color inherit
/// `default_color`, which the caller derives from the slide background.
pub(crate) fn text_body_to_html(
    body: &TextBody,
    scheme: Option<&ColorScheme>,
    default_color: &str,
) -> Result<String> {
    let mut out = String::new();
    for paragraph in &body.paragraphs {
        if paragraph.runs.iter().all(|r| r.text.trim().is_empty()) {
            continue;
        }
        write_paragraph(&mut out, paragraph, scheme, default_color)?;
    }
    Ok(out)
}

/// Renders a table grid as plain `<table>` markup with a fixed light border.
/// Only cell text and solid cell fills survive; richer per-cell formatting is
/// out of this pipeline's scope.
pub(crate) fn table_to_html(grid: &TableGrid, scheme: Option<&ColorScheme>) -> Result<String> {
    let mut out = String::from(
        "<table style=\"border-collapse: collapse; width: 100%; height: 100%;\">",
    );
    for row in &grid.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            let mut style = String::from("border: 1px solid #ccc; padding: 8px;");
            if let Some(Fill::Solid(solid)) = &cell.fill {
                if let Some(color) = resolve_color(&solid.color, scheme) {
                    write!(style, " background-color: {};", color)?;
                }
            }
            write!(out, "<td style=\"{}\">{}</td>", style, escape_html(&cell.text))?;
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        colors::{ColorRef, RgbColor},
        fill::SolidFill,
        table::{TableCell, TableRow},
    };

    #[test]
    fn markup_characters_are_escaped() {
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }

    #[test]
    fn run_without_color_uses_default() {
        let body = TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![Run::plain("Hello")])],
        };
        let html = text_body_to_html(&body, None, "#ffffff").unwrap();
        assert!(html.contains("color: #ffffff;"));
        assert!(html.contains(">Hello</span>"));
    }

    #[test]
    fn explicit_run_color_wins_over_default() {
        let mut run = Run::plain("x");
        run.color = Some(ColorRef::Rgb(RgbColor::new(0x12, 0x34, 0x56)));
        let body = TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![run])],
        };
        let html = text_body_to_html(&body, None, "#000000").unwrap();
        assert!(html.contains("color: #123456;"));
        assert!(!html.contains("#000000"));
    }

    #[test]
    fn emphasis_and_size_map_to_inline_styles() {
        let mut run = Run::plain("big");
        run.bold = true;
        run.italic = true;
        run.underline = true;
        run.size_pt = Some(24.0);
        run.font_family = Some("Arial".to_string());
        let body = TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![run])],
        };
        let html = text_body_to_html(&body, None, "#000000").unwrap();
        assert!(html.contains("font-weight: bold;"));
        assert!(html.contains("font-style: italic;"));
        assert!(html.contains("text-decoration: underline;"));
        assert!(html.contains("font-size: 32.0px;"));
        assert!(html.contains("font-family: 'Arial';"));
    }

    #[test]
    fn paragraph_level_indents_and_alignment() {
        let mut p = Paragraph::from_runs(vec![Run::plain("item")]);
        p.level = 2;
        p.alignment = Some(Alignment::Center);
        let body = TextBody { paragraphs: vec![p] };
        let html = text_body_to_html(&body, None, "#000000").unwrap();
        assert!(html.contains("margin-left: 40px;"));
        assert!(html.contains("text-align: center;"));
    }

    #[test]
    fn blank_paragraphs_are_dropped() {
        let body = TextBody {
            paragraphs: vec![
                Paragraph::from_runs(vec![Run::plain("  \n ")]),
                Paragraph::from_runs(vec![Run::plain("kept")]),
            ],
        };
        let html = text_body_to_html(&body, None, "#000000").unwrap();
        assert_eq!(html.matches("<p ").count(), 1);
        assert!(html.contains("kept"));
    }

    #[test]
    fn newlines_become_breaks() {
        let body = TextBody {
            paragraphs: vec![Paragraph::from_runs(vec![Run::plain("a\nb")])],
        };
        let html = text_body_to_html(&body, None, "#000000").unwrap();
        assert!(html.contains("a<br>b"));
    }

    #[test]
    fn table_cells_carry_fill_and_escaped_text() {
        let grid = TableGrid {
            rows: vec![TableRow {
                cells: vec![
                    TableCell {
                        text: "a<b".to_string(),
                        fill: Some(Fill::Solid(SolidFill::opaque(ColorRef::Rgb(
                            RgbColor::new(0xee, 0xee, 0xee),
                        )))),
                    },
                    TableCell {
                        text: "plain".to_string(),
                        fill: None,
                    },
                ],
            }],
        };
        let html = table_to_html(&grid, None).unwrap();
        assert!(html.contains("background-color: #eeeeee;"));
        assert!(html.contains(">a&lt;b</td>"));
        assert!(html.contains(">plain</td>"));
    }
}
