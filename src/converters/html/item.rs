//! Output types of the flattening pipeline: the per-slide render list and
//! the surrounding page/asset/document containers handed to the renderer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The flattened position of a render item: four percentage strings relative
/// to the slide plus an integer stacking index. Stacking indices are assigned
/// in traversal order and are strictly increasing across a whole slide,
/// including elements pulled out of groups, reproducing the source document's
/// paint order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBox {
    pub left: String,
    pub top: String,
    pub width: String,
    pub height: String,
    pub z_index: u32,
}

/// The role a raster image plays on a slide, assigned heuristically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageRole {
    QrCode,
    Icon,
    Logo,
    Diagram,
    Photo,
    Unknown,
}

/// The classifier's verdict for one image, with the deciding rule spelled
/// out in `reason` and the decoded pixel dimensions in `actual_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub role: ImageRole,
    /// 0.0 through 1.0.
    pub confidence: f64,
    pub reason: String,
    pub actual_size: (u32, u32),
}

impl Classification {
    /// True for decoded images small enough to render at native pixel size
    /// instead of stretching (the QR-code treatment).
    pub fn is_small(&self) -> bool {
        let (w, h) = self.actual_size;
        w > 0 && h > 0 && w < super::constants::SMALL_IMAGE_PX && h < super::constants::SMALL_IMAGE_PX
    }
}

/// How one part of a composite glyph is painted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompositePaint {
    /// A solid hex color.
    Color(String),
    /// A reference to an extracted asset by name.
    Asset(String),
}

/// One cell of a composite glyph, positioned proportionally inside the
/// composite's own box (not the slide).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositePart {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    pub paint: CompositePaint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderItemKind {
    /// Pre-rendered, escaped paragraph markup.
    Text { html: String },
    /// A reference to an extracted binary asset by name.
    Image { asset: String },
    /// Pre-rendered table markup.
    Table { html: String },
    /// A styled box with no content payload.
    Shape,
    /// A cluster of small primitives rasterized as one unit.
    CompositeGlyph { parts: Vec<CompositePart> },
}

/// One flattened, absolutely positioned unit of the output rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub kind: RenderItemKind,
    pub item_box: LayoutBox,
    /// CSS-like property map in insertion order.
    pub style: IndexMap<String, String>,
    /// Present on image items only.
    pub classification: Option<Classification>,
}

/// The slide background resolved ahead of flattening.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBackground {
    /// Hex color, when resolved.
    pub color: Option<String>,
    /// Asset name of a background image, when resolved.
    pub image: Option<String>,
}

/// An extracted binary asset, keyed by a deterministic name
/// (slide index + ordinal + extension).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// One fully processed slide: resolved background plus the ordered flat
/// render list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlidePage {
    /// 1-based slide number.
    pub number: usize,
    pub width_px: i64,
    pub height_px: i64,
    pub aspect_ratio: f64,
    pub background: ResolvedBackground,
    pub items: Vec<RenderItem>,
}

/// The complete conversion result: structured pages, extracted assets, and
/// the rendered document strings. Writing these to disk is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlOutput {
    pub pages: Vec<SlidePage>,
    pub assets: Vec<Asset>,
    pub index_html: String,
    pub style_css: String,
    pub metadata_json: String,
}
