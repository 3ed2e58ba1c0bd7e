use serde::{Deserialize, Serialize};

use super::{
    colors::ColorScheme,
    common::Emu,
    fill::{Fill, ImageBlob},
    shape::Shape,
};

/// A slide's declared background fill. The distinction matters for the
/// background fallback chain: only an explicitly inheriting slide may fall
/// through to its layout or master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageFill {
    /// The slide declares no fill of its own and inherits from the master.
    Inherit,
    Declared(Fill),
}

impl Default for PageFill {
    fn default() -> Self {
        PageFill::Inherit
    }
}

/// A relationship-referenced binary asset attached to a slide part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub image: ImageBlob,
}

/// The subset of a layout or master page the background resolver consults:
/// its declared fill and its shape list (searched for full-bleed pictures).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritedPage {
    #[serde(default)]
    pub background: PageFill,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default)]
    pub background: PageFill,
    pub shapes: Vec<Shape>,
    /// Image relationships declared by this slide part, in declaration order.
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    pub layout: Option<InheritedPage>,
    pub master: Option<InheritedPage>,
}

impl Slide {
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Slide {
            background: PageFill::Inherit,
            shapes,
            relationships: Vec::new(),
            layout: None,
            master: None,
        }
    }
}

/// The root of the document model handed over by the container reader.
/// One `Deck` value is the unit of conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub slide_width: Emu,
    pub slide_height: Emu,
    /// The resolved theme palette, when the source exposes one.
    pub theme: Option<ColorScheme>,
    pub slides: Vec<Slide>,
}
