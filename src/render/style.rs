//! SVG styling primitives: colors and text anchoring.

use std::fmt;

/// A chart color, stored as a CSS hex value.
///
/// Charts are written as standalone SVG files, so colors resolve to
/// concrete hex values rather than CSS variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartColor(String);

impl ChartColor {
    /// Create a color from a hex string (e.g., `"#1f77b4"`).
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self(color.to_string())
    }

    /// Convert to a CSS value string.
    #[must_use]
    pub fn to_css(&self) -> &str {
        &self.0
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Axis lines and tick labels.
pub const AXIS_COLOR: &str = "#555555";

/// Titles and legend text.
pub const TEXT_COLOR: &str = "#222222";

/// Legend frame border.
pub const FRAME_COLOR: &str = "#cccccc";

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
