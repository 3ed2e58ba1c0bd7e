use serde::{Deserialize, Serialize};

use super::{
    common::Frame,
    fill::{Fill, ImageBlob},
    line::Line,
    shadow::Shadow,
    table::TableGrid,
    text::TextBody,
};

/// The closed set of drawing primitives a slide can contain. Matched
/// exhaustively wherever shapes are dispatched, so adding a variant is a
/// compile-time event rather than a silently ignored runtime case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    /// A text box.
    Text,
    /// An embedded raster image.
    Picture,
    Table,
    /// A preset autoshape (rectangle, ellipse, arrow, ...).
    AutoShape,
    /// A free-drawn path. Full-bleed solid freeforms double as synthetic
    /// slide backgrounds.
    Freeform,
    Line,
    /// A layout-inherited slot that may be empty but still carry styling.
    Placeholder,
    /// A container of child shapes. Children keep slide-absolute frames.
    Group(Vec<Shape>),
}

/// One positioned visual primitive in the source tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub kind: ShapeKind,
    pub frame: Frame,
    pub fill: Option<Fill>,
    pub line: Option<Line>,
    pub shadow: Option<Shadow>,
    #[serde(default)]
    pub rotation_deg: f64,
    #[serde(default)]
    pub flip_h: bool,
    #[serde(default)]
    pub flip_v: bool,
    pub text: Option<TextBody>,
    /// The embedded image payload of a picture shape.
    pub image: Option<ImageBlob>,
    pub table: Option<TableGrid>,
}

impl Shape {
    /// A bare shape of the given kind and frame with no styling or content.
    pub fn new(kind: ShapeKind, frame: Frame) -> Self {
        Shape {
            kind,
            frame,
            fill: None,
            line: None,
            shadow: None,
            rotation_deg: 0.0,
            flip_h: false,
            flip_v: false,
            text: None,
            image: None,
            table: None,
        }
    }

    /// True when the shape carries text that survives trimming.
    pub fn has_visible_text(&self) -> bool {
        self.text.as_ref().is_some_and(|body| !body.is_blank())
    }
}
