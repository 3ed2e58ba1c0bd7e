use serde::{Deserialize, Serialize};

/// An English Metric Unit. 1 EMU = 1/914400 inch; 9525 EMU = 1 pixel at 96 DPI.
///
/// All geometry in the document model is expressed in EMU and is already
/// slide-absolute: shapes nested inside groups carry final coordinates, so no
/// parent-offset correction is ever required downstream.
pub type Emu = i64;

/// The absolute placement of a shape on its slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Distance from the left edge of the slide.
    pub left: Emu,
    /// Distance from the top edge of the slide.
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn new(left: Emu, top: Emu, width: Emu, height: Emu) -> Self {
        Frame {
            left,
            top,
            width,
            height,
        }
    }

    /// Area in square EMU. Saturates rather than overflowing on degenerate input.
    pub fn area(&self) -> i64 {
        self.width.saturating_mul(self.height)
    }
}
