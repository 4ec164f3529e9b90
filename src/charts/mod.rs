//! Chart builders: select rows, derive orders, lay out, and render each
//! chart the pipeline produces.

mod by_gas;
mod by_sector;
mod overall;

pub use by_gas::by_gas_chart;
pub use by_sector::by_sector_chart;
pub use overall::overall_chart;

use crate::table::Metric;

/// Whether a chart plots absolute values or percentage shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Total,
    Share,
}

impl Statistic {
    #[must_use]
    pub const fn is_share(self) -> bool {
        matches!(self, Self::Share)
    }
}

/// A finished chart: deterministic file name plus SVG content.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub file_name: String,
    pub svg: String,
}

/// Titles wrap at this many characters without breaking words.
pub(crate) const TITLE_WRAP_WIDTH: usize = 60;

/// X-axis label shared by every chart (all charts group by country).
pub(crate) const GROUP_AXIS_LABEL: &str = "Country";

pub(crate) struct MetricText {
    pub ylabel: &'static str,
    pub units: &'static str,
}

/// Base y-label and units for a metric.
pub(crate) const fn metric_text(metric: Metric) -> MetricText {
    match metric {
        Metric::Emissions => MetricText {
            ylabel: "Emissions",
            units: ", Mt CO\u{2082} eq.",
        },
        Metric::PerCapita => MetricText {
            ylabel: "Emissions per Capita",
            units: ", tonnes CO\u{2082} eq.",
        },
    }
}

/// Apply the share-statistic adjustments to label, title and file name:
/// share charts get a "% Share of" prefix and drop the units suffix.
pub(crate) fn apply_statistic(
    statistic: Statistic,
    text: &MetricText,
    title: String,
    file_name: String,
) -> (String, String, String) {
    if statistic.is_share() {
        (
            format!("% Share of {}", text.ylabel),
            format!("% Share of {title}"),
            format!("pct_share_of_{file_name}"),
        )
    } else {
        (format!("{}{}", text.ylabel, text.units), title, file_name)
    }
}

/// Capitalize the first letter of every word, lowercasing the rest,
/// treating any non-alphabetic character as a word boundary.
pub(crate) fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(c);
            at_word_start = true;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("energy"), "Energy");
        assert_eq!(
            title_case("industrial processes and product use"),
            "Industrial Processes And Product Use"
        );
    }

    #[test]
    fn title_case_treats_hyphens_as_boundaries() {
        assert_eq!(title_case("land-use change"), "Land-Use Change");
    }

    #[test]
    fn share_statistic_prefixes_and_drops_units() {
        let text = metric_text(Metric::Emissions);
        let (ylabel, title, file_name) = apply_statistic(
            Statistic::Share,
            &text,
            "Emissions by Country and Gas (2022)".to_string(),
            "emissions_by_gas_2022.svg".to_string(),
        );

        assert_eq!(ylabel, "% Share of Emissions");
        assert_eq!(title, "% Share of Emissions by Country and Gas (2022)");
        assert_eq!(file_name, "pct_share_of_emissions_by_gas_2022.svg");
    }

    #[test]
    fn total_statistic_appends_units() {
        let text = metric_text(Metric::PerCapita);
        let (ylabel, title, file_name) = apply_statistic(
            Statistic::Total,
            &text,
            "t".to_string(),
            "f.svg".to_string(),
        );

        assert_eq!(ylabel, "Emissions per Capita, tonnes CO\u{2082} eq.");
        assert_eq!(title, "t");
        assert_eq!(file_name, "f.svg");
    }
}
