//! Legend geometry.
//!
//! Legends are laid out in axes-fraction coordinates (x rightward and y
//! upward across the plot area, 0..1 inside it, negative y below the
//! x-axis). The secondary "Net Emissions" legend is placed from the
//! primary legend's computed bounding box, making the two-phase
//! dependency explicit instead of relying on renderer feedback.

use crate::render::ChartColor;

const PAD: f64 = 0.015;
const ROW_HEIGHT: f64 = 0.055;
const TITLE_HEIGHT: f64 = 0.065;
const SWATCH_SPAN: f64 = 0.035;
const CHAR_SPAN: f64 = 0.011;
const RIGHT_EDGE: f64 = 0.99;
const TOP_EDGE: f64 = 0.99;

/// Where the primary legend anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPlacement {
    /// Inside the plot area, top-right corner.
    UpperRight,
    /// Centered below the x-axis (used by percentage-share charts).
    BelowAxis,
}

/// Requested legend appearance, supplied by the chart builders.
#[derive(Debug, Clone)]
pub struct LegendStyle {
    pub title: Option<String>,
    pub placement: LegendPlacement,
    pub columns: usize,
}

/// One legend row: a label and its swatch color.
///
/// `color` is `None` for the outlined net-emissions swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Option<ChartColor>,
}

/// A positioned legend: entries plus a bounding box in axes fractions.
/// `x`/`y` locate the top-left corner (y grows upward).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBox {
    pub title: Option<String>,
    pub entries: Vec<LegendEntry>,
    pub columns: usize,
    pub placement: LegendPlacement,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LegendBox {
    /// Phase one: size the legend from its content and anchor it.
    #[must_use]
    pub fn place(style: &LegendStyle, entries: Vec<LegendEntry>) -> Self {
        let columns = style.columns.max(1);
        let (width, height) = box_extent(style.title.as_deref(), &entries, columns);

        let (x, y) = match style.placement {
            LegendPlacement::UpperRight => (RIGHT_EDGE - width, TOP_EDGE),
            LegendPlacement::BelowAxis => (0.5 - width / 2.0, -0.26),
        };

        Self {
            title: style.title.clone(),
            entries,
            columns,
            placement: style.placement,
            x,
            y,
            width,
            height,
        }
    }

    /// Phase two: place a follow-up legend directly below this one,
    /// right-aligned with the plot area, from this box's extent.
    #[must_use]
    pub fn below(&self, entries: Vec<LegendEntry>) -> Self {
        let (width, height) = box_extent(None, &entries, 1);

        Self {
            title: None,
            entries,
            columns: 1,
            placement: self.placement,
            x: RIGHT_EDGE - width,
            y: self.bottom() - 0.01,
            width,
            height,
        }
    }

    /// Bottom edge of the bounding box (axes fraction, y up).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y - self.height
    }
}

#[allow(clippy::cast_precision_loss)] // Acceptable for legend sizing
fn box_extent(title: Option<&str>, entries: &[LegendEntry], columns: usize) -> (f64, f64) {
    let longest_label = entries
        .iter()
        .map(|e| e.label.chars().count())
        .chain(title.map(str::chars).map(Iterator::count))
        .max()
        .unwrap_or(0);

    let column_width = SWATCH_SPAN + CHAR_SPAN * longest_label as f64;
    let rows = entries.len().div_ceil(columns);

    let width = column_width.mul_add(columns as f64, 2.0 * PAD);
    let title_height = if title.is_some() { TITLE_HEIGHT } else { 0.0 };
    let height = ROW_HEIGHT.mul_add(rows as f64, title_height + 2.0 * PAD);

    (width, height)
}

#[cfg(test)]
#[path = "legend_tests.rs"]
mod tests;
