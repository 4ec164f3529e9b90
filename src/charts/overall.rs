//! Overall per-country bar chart.

use crate::aggregate::StackRecord;
use crate::config::Config;
use crate::error::Result;
use crate::layout::{BasicBarSpec, NamedPalette, Palette};
use crate::render::{BasicBarChart, ChartLabels, SvgElement, wrap_text};
use crate::table::{EmissionsTable, Metric};

use super::{GROUP_AXIS_LABEL, RenderedChart, TITLE_WRAP_WIDTH, metric_text};

/// Build the overall chart: one bar per country from the summary rows,
/// ordered from largest to smallest.
///
/// # Errors
/// Fails on duplicate summary rows for a country.
pub fn overall_chart(
    table: &EmissionsTable,
    config: &Config,
    metric: Metric,
) -> Result<RenderedChart> {
    let summary_rows = table.filtered(|r| {
        r.gas_scope == config.summary.gas_scope
            && r.crf_code == config.summary.crf_code
            && !config.countries.excludes.contains(&r.country_code)
    });

    let records: Vec<StackRecord> = summary_rows
        .records()
        .iter()
        .map(|r| StackRecord::new(r.country_name.clone(), "", metric.value(r)))
        .collect();

    let order = descending_order(&records);
    let palette = Palette::from_keys(&order, NamedPalette::Deep);

    let layout = BasicBarSpec {
        records: &records,
        group_order: &order,
        hue_order: None,
        palette: &palette,
        legend: None,
    }
    .layout()?;

    let text = metric_text(metric);
    let title = match metric {
        Metric::Emissions => "Emissions by Country",
        Metric::PerCapita => "Emissions per Capita by Country",
    };
    let labels = ChartLabels {
        title_lines: wrap_text(title, TITLE_WRAP_WIDTH),
        xlabel: GROUP_AXIS_LABEL.to_string(),
        ylabel: format!("{}{}", text.ylabel, text.units),
    };

    let svg = BasicBarChart {
        layout: &layout,
        labels: &labels,
    }
    .render();

    Ok(RenderedChart {
        file_name: format!("{}_{}.svg", metric.file_stem(), config.input.year),
        svg,
    })
}

/// Group names in descending value order; missing values sort last,
/// ties keep encounter order.
fn descending_order(records: &[StackRecord]) -> Vec<String> {
    let mut ranked: Vec<(&String, Option<f64>)> =
        records.iter().map(|r| (&r.group, r.value)).collect();
    ranked.sort_by(|a, b| match (a.1, b.1) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    ranked.into_iter().map(|(g, _)| g.clone()).collect()
}

#[cfg(test)]
#[path = "overall_tests.rs"]
mod tests;
