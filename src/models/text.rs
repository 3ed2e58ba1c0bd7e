use serde::{Deserialize, Serialize};

use super::colors::ColorRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// A contiguous run of uniformly styled text within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub text: String,
    pub font_family: Option<String>,
    pub size_pt: Option<f64>,
    /// Explicit run color. When absent, the effective color is derived from
    /// the current slide background's luminance.
    pub color: Option<ColorRef>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            font_family: None,
            size_pt: None,
            color: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Option<Alignment>,
    /// Indentation nesting level, 0 for top-level paragraphs.
    #[serde(default)]
    pub level: u8,
    pub line_spacing: Option<f64>,
    pub space_before_pt: Option<f64>,
    pub space_after_pt: Option<f64>,
}

impl Paragraph {
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Paragraph {
            runs,
            alignment: None,
            level: 0,
            line_spacing: None,
            space_before_pt: None,
            space_after_pt: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBody {
    pub paragraphs: Vec<Paragraph>,
}

impl TextBody {
    /// True when no run contains anything but whitespace.
    pub fn is_blank(&self) -> bool {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.runs)
            .all(|r| r.text.trim().is_empty())
    }
}
