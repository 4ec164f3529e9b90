//! SVG chart rendering.
//!
//! Building blocks for writing charts as standalone, accessible SVG
//! files: viewBox-based scaling, `<title>` elements for screen readers,
//! and deterministic output for byte-identical re-runs.

mod chart;
mod element;
mod format;
mod progress;
mod style;

pub use chart::{BasicBarChart, ChartLabels, StackedBarChart};
pub use element::{Axis, AxisOrientation, Bar, OutlinedRect, SvgElement};
pub use format::{format_value, html_escape, wrap_text};
pub use progress::ChartProgress;
pub use style::{ChartColor, TextAnchor};
