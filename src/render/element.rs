//! Primitive SVG elements: axes, bars, and outlined markers.

use std::fmt::Write;

use super::format::{format_value, html_escape};
use super::style::{AXIS_COLOR, ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component for charts.
///
/// Labels are positioned as fractions of the axis length (0.0 at the
/// origin, 1.0 at the far end). Horizontal tick labels can be rotated
/// for long category names.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub tick_length: f64,
    pub font_size: f64,
    pub label_rotation: f64,
}

impl Axis {
    #[must_use]
    pub const fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Horizontal,
            x,
            y,
            length,
            labels: Vec::new(),
            tick_length: 5.0,
            font_size: 12.0,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub const fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Vertical,
            x,
            y,
            length,
            labels: Vec::new(),
            tick_length: 5.0,
            font_size: 11.0,
            label_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    /// Rotate tick labels counterclockwise by `degrees` (horizontal axes only).
    #[must_use]
    pub const fn with_label_rotation(mut self, degrees: f64) -> Self {
        self.label_rotation = degrees;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                let anchor = if self.label_rotation == 0.0 {
                    TextAnchor::Middle
                } else {
                    TextAnchor::End
                };
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size,
                    anchor,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{AXIS_COLOR}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_COLOR}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let escaped_label = html_escape(label);
            let rotation = if self.label_rotation == 0.0 {
                String::new()
            } else {
                format!(
                    r#" transform="rotate(-{} {} {})""#,
                    self.label_rotation, tick.label_x, tick.label_y
                )
            };
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{AXIS_COLOR}" font-size="{}"{rotation}>{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        output
    }
}

/// A single bar segment in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            format_value(self.value)
        )
    }
}

/// An unfilled outlined rectangle, used for net-emissions markers.
#[derive(Debug, Clone)]
pub struct OutlinedRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke: String,
    pub label: String,
}

impl SvgElement for OutlinedRect {
    fn render(&self) -> String {
        let escaped_label = html_escape(&self.label);
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1.5">
    <title>{escaped_label}</title>
</rect>"#,
            self.x, self.y, self.width, self.height, self.stroke
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
