//! Per-gas stacked bar chart.

use crate::aggregate::{GroupSummary, StackRecord, key_order_by_value};
use crate::config::Config;
use crate::error::Result;
use crate::layout::{LegendPlacement, LegendStyle, NamedPalette, Palette, StackedBarSpec};
use crate::metrics::compute_shares;
use crate::render::{ChartLabels, StackedBarChart, SvgElement, wrap_text};
use crate::table::{EmissionsTable, Metric};

use super::{
    GROUP_AXIS_LABEL, RenderedChart, Statistic, TITLE_WRAP_WIDTH, apply_statistic, metric_text,
};

/// Build the stacked-by-gas chart from the per-gas total rows.
///
/// # Errors
/// Fails on duplicate (country, gas) rows.
pub fn by_gas_chart(
    table: &EmissionsTable,
    config: &Config,
    metric: Metric,
    statistic: Statistic,
) -> Result<RenderedChart> {
    let gas_rows = table.filtered(|r| {
        r.crf_code == config.summary.crf_code
            && !config.countries.excludes.contains(&r.country_code)
            && r.gas_scope != config.summary.gas_scope
    });

    let mut records: Vec<StackRecord> = gas_rows
        .records()
        .iter()
        .map(|r| StackRecord::new(r.country_name.clone(), r.gas_scope.clone(), metric.value(r)))
        .collect();

    if statistic.is_share() {
        records = compute_shares(&records);
    }

    let stack_order = key_order_by_value(&records);
    let palette = Palette::from_keys(&stack_order, NamedPalette::Tab10);
    let summary = GroupSummary::summarize(&records);

    let text = metric_text(metric);
    let title = format!(
        "{} by Country and Gas ({})",
        text.ylabel, config.input.year
    );
    let file_name = format!("{}_by_gas_{}.svg", metric.file_stem(), config.input.year);
    let (ylabel, title, file_name) = apply_statistic(statistic, &text, title, file_name);

    let legend = if statistic.is_share() {
        LegendStyle {
            title: Some("Gas Scope".to_string()),
            placement: LegendPlacement::BelowAxis,
            columns: 3,
        }
    } else {
        LegendStyle {
            title: Some("Gas Scope".to_string()),
            placement: LegendPlacement::UpperRight,
            columns: 1,
        }
    };

    let layout = StackedBarSpec {
        records: &records,
        group_order: &summary.order,
        stack_order: &stack_order,
        palette: &palette,
        pos_max: summary.pos_max,
        neg_max: summary.neg_max,
        legend,
    }
    .layout()?;

    let labels = ChartLabels {
        title_lines: wrap_text(&title, TITLE_WRAP_WIDTH),
        xlabel: GROUP_AXIS_LABEL.to_string(),
        ylabel,
    };

    let svg = StackedBarChart {
        layout: &layout,
        labels: &labels,
    }
    .render();

    Ok(RenderedChart { file_name, svg })
}

#[cfg(test)]
#[path = "by_gas_tests.rs"]
mod tests;
