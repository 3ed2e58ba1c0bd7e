use serde::{Deserialize, Serialize};

use super::{common::Emu, fill::SolidFill};

/// Dash patterns carried by the source document. CSS has no dash-dot
/// equivalent, so the dash-dot family collapses to `dashed` downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashStyle {
    Solid,
    Dash,
    DashDot,
    LongDash,
    Dot,
}

impl Default for DashStyle {
    fn default() -> Self {
        DashStyle::Solid
    }
}

/// A shape outline. A line whose width converts below one pixel, or whose
/// fill is absent, must never produce a border.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub width: Emu,
    pub fill: Option<SolidFill>,
    #[serde(default)]
    pub dash: DashStyle,
}
