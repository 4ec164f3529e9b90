//! Per-sector stacked bar chart.

use indexmap::IndexMap;

use crate::aggregate::{GroupSummary, StackRecord, key_order_by_magnitude};
use crate::config::{Config, SectorConfig};
use crate::error::Result;
use crate::layout::{LegendPlacement, LegendStyle, Palette, StackedBarSpec};
use crate::metrics::compute_shares;
use crate::render::{ChartLabels, StackedBarChart, SvgElement, wrap_text};
use crate::table::{EmissionsTable, Metric};

use super::{
    GROUP_AXIS_LABEL, RenderedChart, Statistic, TITLE_WRAP_WIDTH, apply_statistic, metric_text,
    title_case,
};

/// Build a stacked-by-sub-sector chart for one configured sector.
///
/// Sub-sector stacks are ordered by summed absolute value so absorption
/// segments rank by their magnitude; the configured palette is keyed by
/// CRF code and remapped onto the cleaned sub-sector names that appear
/// in the data.
///
/// # Errors
/// Fails on duplicate (country, sub-sector) rows.
pub fn by_sector_chart(
    table: &EmissionsTable,
    config: &Config,
    metric: Metric,
    sector: &SectorConfig,
    statistic: Statistic,
) -> Result<RenderedChart> {
    let sector_rows = table.filtered(|r| {
        !config.countries.excludes.contains(&r.country_code)
            && r.gas_scope == config.summary.gas_scope
            && sector.codes.contains(&r.sector_code)
    });

    // Sub-sector names arrive as "1.A.1-Energy Industries"; drop the
    // leading code prefix.
    let mut code_names: IndexMap<String, String> = IndexMap::new();
    let mut records: Vec<StackRecord> = Vec::with_capacity(sector_rows.len());
    for row in sector_rows.records() {
        let name = clean_sector_name(&row.sector_name);
        code_names
            .entry(row.sector_code.clone())
            .or_insert_with(|| name.clone());
        records.push(StackRecord::new(
            row.country_name.clone(),
            name,
            metric.value(row),
        ));
    }

    // Stack order and palette are fixed before any share conversion.
    let stack_order = key_order_by_magnitude(&records);
    let palette = Palette::from_keys(&sector.codes, sector.palette).remapped(&code_names);

    if statistic.is_share() {
        records = compute_shares(&records);
    }
    let summary = GroupSummary::summarize(&records);

    let text = metric_text(metric);
    let title = format!(
        "{} {} by Country and Sub-Sector ({})",
        title_case(&sector.name),
        text.ylabel,
        config.input.year
    );
    let file_name = format!(
        "{}_by_sector_{}_{}.svg",
        metric.file_stem(),
        sector.name,
        config.input.year
    );
    let (ylabel, title, file_name) = apply_statistic(statistic, &text, title, file_name);

    let legend = if statistic.is_share() {
        LegendStyle {
            title: Some("Sector Name".to_string()),
            placement: LegendPlacement::BelowAxis,
            columns: 3,
        }
    } else {
        LegendStyle {
            title: Some("Sector Name".to_string()),
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

/// Drop everything up to and including the first `-`.
fn clean_sector_name(name: &str) -> String {
    name.split_once('-')
        .map_or_else(|| name.to_string(), |(_, rest)| rest.to_string())
}

#[cfg(test)]
#[path = "by_sector_tests.rs"]
mod tests;
