use serde::{Deserialize, Serialize};

use super::{colors::ColorRef, common::Emu};

/// An outer drop shadow. The offset is polar: `distance` along
/// `direction_deg`, where 0 degrees points right and angles grow clockwise.
/// A shadow with zero blur and zero distance, or a near-transparent color,
/// is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub blur: Emu,
    pub distance: Emu,
    pub direction_deg: f64,
    pub color: ColorRef,
    /// 0.0 (invisible) through 1.0 (opaque).
    pub alpha: f64,
}
