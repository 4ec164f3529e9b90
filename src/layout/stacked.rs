//! Stacked bar layout.
//!
//! Turns aggregated records into deterministic bar geometry: per-group
//! x-positions, per-segment y-extents split above and below zero, shared
//! axis limits, net-emissions markers for sign-mixed groups, and legend
//! boxes. Group and stack orders are inputs, never re-derived here.

use std::collections::HashMap;

use crate::aggregate::StackRecord;
use crate::error::{EmissionsError, Result};
use crate::render::ChartColor;

use super::legend::{LegendBox, LegendEntry, LegendStyle};
use super::palette::Palette;

/// Width of each bar within its unit-wide group slot.
pub const BAR_WIDTH: f64 = 0.8;

/// Net-emissions marker width, as a fraction of one group slot.
const NET_MARKER_WIDTH: f64 = 0.2;

/// An x-axis slot assigned to a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPosition {
    pub group: String,
    pub x: f64,
}

/// One drawn bar segment, in value space.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub group: String,
    pub key: String,
    pub base: f64,
    pub height: f64,
    pub color: ChartColor,
}

/// Outlined marker centered on a group's net total, in value space.
/// `x`/`y` locate the lower-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct NetMarker {
    pub group: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Deterministic layout descriptor for a stacked bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedBarLayout {
    pub groups: Vec<GroupPosition>,
    pub segments: Vec<Segment>,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub net_markers: Vec<NetMarker>,
    pub legend: LegendBox,
    pub net_legend: Option<LegendBox>,
}

/// Inputs to the stacked layout engine.
///
/// `group_order` and `stack_order` come from the aggregator and the
/// caller respectively; `pos_max`/`neg_max` are the signed extents over
/// the whole record set (None when no value of that sign exists).
#[derive(Debug)]
pub struct StackedBarSpec<'a> {
    pub records: &'a [StackRecord],
    pub group_order: &'a [String],
    pub stack_order: &'a [String],
    pub palette: &'a Palette,
    pub pos_max: Option<f64>,
    pub neg_max: Option<f64>,
    pub legend: LegendStyle,
}

impl StackedBarSpec<'_> {
    /// Compute the layout.
    ///
    /// # Errors
    /// Fails on duplicate (group, stack-key) pairs and on stack keys the
    /// palette does not cover.
    pub fn layout(&self) -> Result<StackedBarLayout> {
        let values = index_values(self.records)?;

        // Axis limits come first: net-marker sizing depends on the span.
        let y_limits = y_limits(self.pos_max, self.neg_max);
        let span = y_limits.1 - y_limits.0;

        let mut groups = Vec::with_capacity(self.group_order.len());
        let mut segments = Vec::new();
        let mut net_markers = Vec::new();

        let mut x = -0.5;
        for group in self.group_order {
            let (above, below) = self.stack_group(group, &values, &mut segments)?;

            if below != 0.0 {
                net_markers.push(NetMarker {
                    group: group.clone(),
                    x: x - NET_MARKER_WIDTH / 2.0,
                    y: (above + below) - 0.005 * span,
                    width: NET_MARKER_WIDTH,
                    height: 0.01 * span,
                });
            }

            groups.push(GroupPosition {
                group: group.clone(),
                x,
            });
            x += 1.0;
        }

        let x_limits = groups.first().zip(groups.last()).map_or((-1.0, 0.0), |(first, last)| {
            (first.x - 0.5, last.x + 0.5)
        });

        let legend = LegendBox::place(&self.legend, self.legend_entries()?);
        let net_legend = (!net_markers.is_empty()).then(|| {
            legend.below(vec![LegendEntry {
                label: "Net Emissions".to_string(),
                color: None,
            }])
        });

        Ok(StackedBarLayout {
            groups,
            segments,
            x_limits,
            y_limits,
            net_markers,
            legend,
            net_legend,
        })
    }

    /// Stack one group's segments, returning the final accumulators.
    fn stack_group(
        &self,
        group: &str,
        values: &HashMap<(String, String), Option<f64>>,
        segments: &mut Vec<Segment>,
    ) -> Result<(f64, f64)> {
        let mut above = 0.0;
        let mut below = 0.0;

        for key in self.stack_order {
            let lookup = (group.to_string(), key.clone());
            let Some(Some(value)) = values.get(&lookup).copied() else {
                // No record, or a missing value: skip without touching
                // either accumulator.
                continue;
            };

            let (base, height) = if value < 0.0 {
                (below + value, -value)
            } else {
                (above, value)
            };

            segments.push(Segment {
                group: group.to_string(),
                key: key.clone(),
                base,
                height,
                color: self.palette.color(key)?.clone(),
            });

            if value < 0.0 {
                below += value;
            } else {
                above += value;
            }
        }

        Ok((above, below))
    }

    fn legend_entries(&self) -> Result<Vec<LegendEntry>> {
        self.stack_order
            .iter()
            .map(|key| {
                Ok(LegendEntry {
                    label: key.clone(),
                    color: Some(self.palette.color(key)?.clone()),
                })
            })
            .collect()
    }
}

/// Index records by (group, key), rejecting duplicates.
fn index_values(records: &[StackRecord]) -> Result<HashMap<(String, String), Option<f64>>> {
    let mut values = HashMap::with_capacity(records.len());
    for record in records {
        let slot = (record.group.clone(), record.key.clone());
        if values.insert(slot, record.value).is_some() {
            return Err(EmissionsError::DuplicateStack {
                group: record.group.clone(),
                key: record.key.clone(),
            });
        }
    }
    Ok(values)
}

/// Shared y-axis limits from the signed group extents.
///
/// With no negative totals the axis hugs zero from just below; with
/// mixed signs both ends get a 1% pad of the full range.
fn y_limits(pos_max: Option<f64>, neg_max: Option<f64>) -> (f64, f64) {
    let pos = pos_max.unwrap_or(0.0);
    match neg_max {
        None => {
            if pos == 0.0 {
                (0.0, 1.0)
            } else {
                (-0.005 * pos, 1.02 * pos)
            }
        }
        Some(neg) => {
            let range = pos - neg;
            (0.01f64.mul_add(-range, neg), 0.01f64.mul_add(range, pos))
        }
    }
}

#[cfg(test)]
#[path = "stacked_tests.rs"]
mod tests;
