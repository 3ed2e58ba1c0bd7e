use serde::{Deserialize, Serialize};

use super::colors::ColorRef;

/// A binary image payload together with its declared file extension
/// (without a leading dot, e.g. `png`). An empty byte buffer marks an image
/// reference the reader could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub extension: String,
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>, extension: impl Into<String>) -> Self {
        ImageBlob {
            bytes,
            extension: extension.into(),
        }
    }
}

/// A solid interior paint. `transparency` is 0.0 for fully opaque through
/// 1.0 for fully transparent, matching the source document's convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidFill {
    pub color: ColorRef,
    #[serde(default)]
    pub transparency: f64,
}

impl SolidFill {
    pub fn opaque(color: ColorRef) -> Self {
        SolidFill {
            color,
            transparency: 0.0,
        }
    }
}

/// One color stop of a gradient, positioned 0–100 along the gradient axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub position: f64,
    pub color: ColorRef,
}

/// The geometry of a gradient. Linear angles use the source convention:
/// 0 degrees points right, increasing clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GradientAxis {
    Linear { angle_deg: f64 },
    /// `circular` distinguishes a true circular radial from a path/shape
    /// gradient, which is only approximated by an elliptical radial.
    Radial { circular: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientFill {
    pub stops: Vec<GradientStop>,
    pub axis: GradientAxis,
}

/// A shape's interior paint. At most one variant is ever active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fill {
    None,
    Solid(SolidFill),
    Gradient(GradientFill),
    Picture(ImageBlob),
}
