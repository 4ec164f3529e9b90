//! Chart rendering: projects layout descriptors onto an SVG canvas.

use std::fmt::Write;

use crate::layout::{
    BAR_WIDTH, BasicBarLayout, GroupPosition, LegendBox, LegendPlacement, StackedBarLayout,
};

use super::element::{Axis, Bar, OutlinedRect, SvgElement};
use super::format::{format_value, html_escape};
use super::style::{FRAME_COLOR, TEXT_COLOR};

const CANVAS_WIDTH: f64 = 960.0;
const CANVAS_HEIGHT: f64 = 540.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 150.0;
const TITLE_LINE_HEIGHT: f64 = 26.0;
/// Extra canvas below the plot when a legend sits under the axis.
const BELOW_AXIS_LEGEND_SPACE: f64 = 170.0;

/// Chart-level text supplied by the chart builders. The title is
/// pre-wrapped into lines.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title_lines: Vec<String>,
    pub xlabel: String,
    pub ylabel: String,
}

/// A stacked bar chart ready to render.
#[derive(Debug)]
pub struct StackedBarChart<'a> {
    pub layout: &'a StackedBarLayout,
    pub labels: &'a ChartLabels,
}

impl SvgElement for StackedBarChart<'_> {
    fn render(&self) -> String {
        let below_axis = self.layout.legend.placement == LegendPlacement::BelowAxis;
        let frame = Frame::new(
            self.layout.x_limits,
            self.layout.y_limits,
            self.labels.title_lines.len(),
            below_axis,
        );

        let mut output = frame.open(self.labels);

        for segment in &self.layout.segments {
            let Some(slot) = self
                .layout
                .groups
                .iter()
                .find(|g| g.group == segment.group)
            else {
                continue;
            };
            let bar = Bar {
                x: frame.x_px(slot.x - BAR_WIDTH / 2.0),
                y: frame.y_px(segment.base + segment.height),
                width: frame.x_span(BAR_WIDTH),
                height: frame.y_span(segment.height),
                color: segment.color.clone(),
                label: format!("{} / {}", segment.group, segment.key),
                value: segment.height,
            };
            let _ = writeln!(output, "    {}", bar.render());
        }

        for marker in &self.layout.net_markers {
            let rect = OutlinedRect {
                x: frame.x_px(marker.x),
                y: frame.y_px(marker.y + marker.height),
                width: frame.x_span(marker.width),
                height: frame.y_span(marker.height),
                stroke: "black".to_string(),
                label: format!("{} net emissions", marker.group),
            };
            let _ = writeln!(output, "    {}", rect.render());
        }

        frame.write_axes(
            &mut output,
            &group_tick_labels(&self.layout.groups, frame.x_limits),
        );
        frame.write_legend(&mut output, &self.layout.legend);
        if let Some(net_legend) = &self.layout.net_legend {
            frame.write_legend(&mut output, net_legend);
        }

        output.push_str("</svg>");
        output
    }
}

/// A basic bar chart ready to render.
#[derive(Debug)]
pub struct BasicBarChart<'a> {
    pub layout: &'a BasicBarLayout,
    pub labels: &'a ChartLabels,
}

impl SvgElement for BasicBarChart<'_> {
    fn render(&self) -> String {
        let below_axis = self
            .layout
            .legend
            .as_ref()
            .is_some_and(|l| l.placement == LegendPlacement::BelowAxis);
        let frame = Frame::new(
            self.layout.x_limits,
            self.layout.y_limits,
            self.labels.title_lines.len(),
            below_axis,
        );

        let mut output = frame.open(self.labels);

        for bar in &self.layout.bars {
            let label = bar.key.as_ref().map_or_else(
                || bar.group.clone(),
                |key| format!("{} / {key}", bar.group),
            );
            let value = if bar.base < 0.0 { -bar.height } else { bar.height };
            let element = Bar {
                x: frame.x_px(bar.x),
                y: frame.y_px(bar.base + bar.height),
                width: frame.x_span(bar.width),
                height: frame.y_span(bar.height),
                color: bar.color.clone(),
                label,
                value,
            };
            let _ = writeln!(output, "    {}", element.render());
        }

        frame.write_axes(
            &mut output,
            &group_tick_labels(&self.layout.groups, frame.x_limits),
        );
        if let Some(legend) = &self.layout.legend {
            frame.write_legend(&mut output, legend);
        }

        output.push_str("</svg>");
        output
    }
}

/// Canvas geometry and value-to-pixel projection.
struct Frame {
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    plot_w: f64,
    plot_h: f64,
    x_limits: (f64, f64),
    y_limits: (f64, f64),
}

impl Frame {
    #[allow(clippy::cast_precision_loss)] // Title line counts are tiny
    fn new(
        x_limits: (f64, f64),
        y_limits: (f64, f64),
        title_lines: usize,
        below_axis_legend: bool,
    ) -> Self {
        let top = TITLE_LINE_HEIGHT.mul_add(title_lines as f64, 24.0);
        let extra = if below_axis_legend {
            BELOW_AXIS_LEGEND_SPACE
        } else {
            0.0
        };
        let height = CANVAS_HEIGHT + extra;
        let plot_h = height - top - MARGIN_BOTTOM - extra;

        Self {
            width: CANVAS_WIDTH,
            height,
            left: MARGIN_LEFT,
            top,
            plot_w: CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
            plot_h,
            x_limits,
            y_limits,
        }
    }

    fn x_px(&self, x: f64) -> f64 {
        let (lo, hi) = self.x_limits;
        self.left + (x - lo) / (hi - lo) * self.plot_w
    }

    /// Horizontal extent of a value-space width, in pixels.
    fn x_span(&self, width: f64) -> f64 {
        let (lo, hi) = self.x_limits;
        width / (hi - lo) * self.plot_w
    }

    fn y_px(&self, y: f64) -> f64 {
        let (lo, hi) = self.y_limits;
        self.top + (hi - y) / (hi - lo) * self.plot_h
    }

    /// Vertical extent of a value-space height, in pixels.
    fn y_span(&self, height: f64) -> f64 {
        let (lo, hi) = self.y_limits;
        height / (hi - lo) * self.plot_h
    }

    /// Axes-fraction coordinates (y up, 0..1 inside the plot area).
    fn fx_px(&self, fx: f64) -> f64 {
        fx.mul_add(self.plot_w, self.left)
    }

    fn fy_px(&self, fy: f64) -> f64 {
        (1.0 - fy).mul_add(self.plot_h, self.top)
    }

    /// Open the SVG document: background, title lines, axis labels.
    #[allow(clippy::cast_precision_loss)] // Title line counts are tiny
    fn open(&self, labels: &ChartLabels) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="serif">"#,
            self.width, self.height
        );
        if let Some(first) = labels.title_lines.first() {
            let _ = writeln!(output, r"    <title>{}</title>", html_escape(first));
        }
        let _ = writeln!(
            output,
            r##"    <rect width="{}" height="{}" fill="#ffffff"/>"##,
            self.width, self.height
        );

        for (i, line) in labels.title_lines.iter().enumerate() {
            let y = TITLE_LINE_HEIGHT.mul_add(i as f64, 30.0);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{y}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="20">{}</text>"#,
                self.width / 2.0,
                html_escape(line)
            );
        }

        // Axis titles: x centered below the tick labels, y rotated.
        let _ = writeln!(
            output,
            r#"    <text x="{}" y="{}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="15">{}</text>"#,
            self.left + self.plot_w / 2.0,
            self.top + self.plot_h + MARGIN_BOTTOM - 18.0,
            html_escape(&labels.xlabel)
        );
        let ylabel_y = self.top + self.plot_h / 2.0;
        let _ = writeln!(
            output,
            r#"    <text x="20" y="{ylabel_y}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="15" transform="rotate(-90 20 {ylabel_y})">{}</text>"#,
            html_escape(&labels.ylabel)
        );

        output
    }

    fn write_axes(&self, output: &mut String, x_labels: &[(f64, String)]) {
        let origin_y = self.top + self.plot_h;

        let x_axis = Axis::horizontal(self.left, origin_y, self.plot_w)
            .with_labels(x_labels.to_vec())
            .with_label_rotation(75.0);
        for line in x_axis.render().lines() {
            let _ = writeln!(output, "    {line}");
        }

        let (lo, hi) = self.y_limits;
        let y_labels: Vec<(f64, String)> = nice_ticks(lo, hi)
            .into_iter()
            .map(|tick| ((tick - lo) / (hi - lo), format_value(tick)))
            .collect();
        let y_axis = Axis::vertical(self.left, origin_y, self.plot_h).with_labels(y_labels);
        for line in y_axis.render().lines() {
            let _ = writeln!(output, "    {line}");
        }
    }

    #[allow(clippy::cast_precision_loss)] // Row/column counts are tiny
    fn write_legend(&self, output: &mut String, legend: &LegendBox) {
        let x = self.fx_px(legend.x);
        let y = self.fy_px(legend.y);
        let w = legend.width * self.plot_w;
        let h = legend.height * self.plot_h;

        let _ = writeln!(
            output,
            r##"    <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="#ffffff" stroke="{FRAME_COLOR}"/>"##
        );

        let pad = 8.0;
        let mut cursor_y = y + pad;
        if let Some(title) = &legend.title {
            cursor_y += 14.0;
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{cursor_y}" text-anchor="middle" fill="{TEXT_COLOR}" font-size="14">{}</text>"#,
                x + w / 2.0,
                html_escape(title)
            );
            cursor_y += 6.0;
        }

        let columns = legend.columns.max(1);
        let rows = legend.entries.len().div_ceil(columns);
        let col_w = (w - 2.0 * pad) / columns as f64;
        let row_h = ((h - (cursor_y - y) - pad) / rows.max(1) as f64).max(16.0);

        for (i, entry) in legend.entries.iter().enumerate() {
            let col = i % columns;
            let row = i / columns;
            let entry_x = (col as f64).mul_add(col_w, x + pad);
            let entry_y = (row as f64).mul_add(row_h, cursor_y + row_h / 2.0);

            let swatch = entry.color.as_ref().map_or_else(
                || {
                    format!(
                        r#"<rect x="{entry_x}" y="{}" width="12" height="12" fill="none" stroke="black" stroke-width="1.5"/>"#,
                        entry_y - 6.0
                    )
                },
                |color| {
                    format!(
                        r#"<rect x="{entry_x}" y="{}" width="12" height="12" fill="{}"/>"#,
                        entry_y - 6.0,
                        color.to_css()
                    )
                },
            );
            let _ = writeln!(output, "    {swatch}");
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" fill="{TEXT_COLOR}" font-size="12">{}</text>"#,
                entry_x + 18.0,
                entry_y + 4.0,
                html_escape(&entry.label)
            );
        }
    }
}

fn group_tick_labels(groups: &[GroupPosition], x_limits: (f64, f64)) -> Vec<(f64, String)> {
    let (lo, hi) = x_limits;
    groups
        .iter()
        .map(|g| ((g.x - lo) / (hi - lo), g.group.clone()))
        .collect()
}

/// Round tick positions covering `[lo, hi]` at a 1/2/5-scaled step.
fn nice_ticks(lo: f64, hi: f64) -> Vec<f64> {
    const TARGET: f64 = 6.0;
    let span = hi - lo;
    if span <= 0.0 || !span.is_finite() {
        return vec![lo];
    }

    let raw_step = span / TARGET;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    let step = if normalized < 1.5 {
        magnitude
    } else if normalized < 3.0 {
        2.0 * magnitude
    } else if normalized < 7.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    };

    let mut ticks = Vec::new();
    let mut tick = (lo / step).ceil() * step;
    while tick <= hi + step * 1e-9 {
        // Snap near-zero accumulation error.
        ticks.push(if tick.abs() < step * 1e-9 { 0.0 } else { tick });
        tick += step;
    }
    ticks
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
