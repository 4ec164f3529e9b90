//! Basic (non-stacked) bar layout.
//!
//! One bar per group in a caller-supplied order, values plotted directly
//! from zero. An optional secondary hue splits each group slot into
//! side-by-side sub-bars with their own sub-order. No net-emissions
//! concept applies here.

use std::collections::HashMap;

use crate::aggregate::StackRecord;
use crate::error::{EmissionsError, Result};
use crate::render::ChartColor;

use super::legend::{LegendBox, LegendEntry, LegendStyle};
use super::palette::Palette;
use super::stacked::{BAR_WIDTH, GroupPosition};

/// One drawn bar, in value space. `x`/`width` span the bar horizontally;
/// `base`/`height` span it vertically.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicBar {
    pub group: String,
    pub key: Option<String>,
    pub x: f64,
    pub width: f64,
    pub base: f64,
    pub height: f64,
    pub color: ChartColor,
}

/// Deterministic layout descriptor for a basic bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicBarLayout {
    pub groups: Vec<GroupPosition>,
    pub bars: Vec<BasicBar>,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub legend: Option<LegendBox>,
}

/// Inputs to the basic layout.
///
/// With `hue_order` set, records carry hue keys and the palette is keyed
/// by hue; without it each group gets one bar and the palette is keyed
/// by group name.
#[derive(Debug)]
pub struct BasicBarSpec<'a> {
    pub records: &'a [StackRecord],
    pub group_order: &'a [String],
    pub hue_order: Option<&'a [String]>,
    pub palette: &'a Palette,
    pub legend: Option<LegendStyle>,
}

impl BasicBarSpec<'_> {
    /// Compute the layout.
    ///
    /// # Errors
    /// Fails on duplicate (group, key) pairs and on palette gaps.
    #[allow(clippy::cast_precision_loss)] // Acceptable for sub-bar sizing
    pub fn layout(&self) -> Result<BasicBarLayout> {
        let values = index_values(self.records)?;

        let mut groups = Vec::with_capacity(self.group_order.len());
        let mut bars = Vec::new();

        let mut x = -0.5;
        for group in self.group_order {
            match self.hue_order {
                None => {
                    self.push_bar(&mut bars, &values, group, None, x, BAR_WIDTH)?;
                }
                Some(hues) => {
                    let sub_width = BAR_WIDTH / hues.len().max(1) as f64;
                    for (j, hue) in hues.iter().enumerate() {
                        let center = sub_width.mul_add(j as f64 + 0.5, x - BAR_WIDTH / 2.0);
                        self.push_bar(&mut bars, &values, group, Some(hue), center, sub_width)?;
                    }
                }
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

        let legend = match (&self.legend, self.hue_order) {
            (Some(style), Some(hues)) => Some(LegendBox::place(style, self.hue_entries(hues)?)),
            _ => None,
        };

        Ok(BasicBarLayout {
            y_limits: y_limits(&bars),
            groups,
            bars,
            x_limits,
            legend,
        })
    }

    fn push_bar(
        &self,
        bars: &mut Vec<BasicBar>,
        values: &HashMap<(String, String), Option<f64>>,
        group: &str,
        hue: Option<&String>,
        center: f64,
        width: f64,
    ) -> Result<()> {
        let slot = (group.to_string(), hue.cloned().unwrap_or_default());
        let Some(Some(value)) = values.get(&slot).copied() else {
            return Ok(());
        };

        let color_key = hue.map_or(group, String::as_str);
        bars.push(BasicBar {
            group: group.to_string(),
            key: hue.cloned(),
            x: center - width / 2.0,
            width,
            base: value.min(0.0),
            height: value.abs(),
            color: self.palette.color(color_key)?.clone(),
        });
        Ok(())
    }

    fn hue_entries(&self, hues: &[String]) -> Result<Vec<LegendEntry>> {
        hues.iter()
            .map(|hue| {
                Ok(LegendEntry {
                    label: hue.clone(),
                    color: Some(self.palette.color(hue)?.clone()),
                })
            })
            .collect()
    }
}

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

/// Data-interval limits with a 5% margin on each side, matching the
/// renderer-default autoscale the original charts relied on.
fn y_limits(bars: &[BasicBar]) -> (f64, f64) {
    let mut lo = 0.0f64;
    let mut hi = 0.0f64;
    for bar in bars {
        lo = lo.min(bar.base);
        hi = hi.max(bar.base + bar.height);
    }

    let span = hi - lo;
    if span == 0.0 {
        (0.0, 1.0)
    } else {
        (0.05f64.mul_add(-span, lo), 0.05f64.mul_add(span, hi))
    }
}

#[cfg(test)]
#[path = "basic_tests.rs"]
mod tests;
