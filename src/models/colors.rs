use serde::{Deserialize, Serialize};

/// An opaque RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RgbColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        RgbColor { red, green, blue }
    }
}

/// Well-known theme palette slots. A shape may reference one of these instead
/// of a literal RGB value; the concrete color comes from the deck's
/// `ColorScheme`, or from a static fallback table when the scheme does not
/// resolve the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeSlot {
    /// First background color.
    Background1,
    /// First text color.
    Text1,
    /// Second background color.
    Background2,
    /// Second text color.
    Text2,
    Accent1,
    Accent2,
    Accent3,
    Accent4,
    Accent5,
    Accent6,
    /// Hyperlink color.
    Hyperlink,
}

/// A color reference: either a concrete RGB triple or a theme-indexed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorRef {
    Rgb(RgbColor),
    Theme(ThemeSlot),
}

/// A pair mapping a theme slot to the concrete color it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColorPair {
    pub slot: ThemeSlot,
    pub color: RgbColor,
}

/// The mapping of theme slots to concrete colors exposed by the source deck.
/// May be partial; unresolved slots fall back to documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub colors: Vec<ThemeColorPair>,
}

impl ColorScheme {
    /// Looks up the concrete color for a theme slot within this scheme.
    pub fn lookup(&self, slot: ThemeSlot) -> Option<RgbColor> {
        self.colors
            .iter()
            .find(|pair| pair.slot == slot)
            .map(|pair| pair.color)
    }
}
