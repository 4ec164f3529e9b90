//! Bar chart layout engines.
//!
//! Layouts are pure, deterministic descriptions of chart geometry in
//! value space; the render module projects them onto an SVG canvas.

mod basic;
mod legend;
mod palette;
mod stacked;

pub use basic::{BasicBar, BasicBarLayout, BasicBarSpec};
pub use legend::{LegendBox, LegendEntry, LegendPlacement, LegendStyle};
pub use palette::{NamedPalette, Palette};
pub use stacked::{
    BAR_WIDTH, GroupPosition, NetMarker, Segment, StackedBarLayout, StackedBarSpec,
};
