//! Per-group aggregation: ordering totals and signed extents.

use indexmap::IndexMap;

/// One chart-ready observation: a group (x-axis category), a stack key
/// (secondary category), the value to plot, and the value used for
/// magnitude ranking.
///
/// For absolute charts `rank_value` equals `value`; for percentage-share
/// charts it carries the underlying absolute value so ordering is by
/// magnitude even when percentages are plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct StackRecord {
    pub group: String,
    pub key: String,
    pub value: Option<f64>,
    pub rank_value: Option<f64>,
}

impl StackRecord {
    #[must_use]
    pub fn new(group: impl Into<String>, key: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            group: group.into(),
            key: key.into(),
            value,
            rank_value: value,
        }
    }

    #[must_use]
    pub const fn with_rank(mut self, rank_value: Option<f64>) -> Self {
        self.rank_value = rank_value;
        self
    }
}

/// Aggregated view of a record set: group ordering plus the signed
/// extents that drive shared axis limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    /// Groups in descending order of summed `rank_value`, ties in
    /// first-encounter order.
    pub order: Vec<String>,
    /// Summed `rank_value` per group, in encounter order.
    pub totals: IndexMap<String, f64>,
    /// Largest per-group sum of strictly positive `value`s, if any
    /// positive value exists.
    pub pos_max: Option<f64>,
    /// Smallest (most negative) per-group sum of strictly negative
    /// `value`s, if any negative value exists.
    pub neg_max: Option<f64>,
}

impl GroupSummary {
    /// Summarize a record set.
    ///
    /// Missing values are excluded from every sum but still register the
    /// group, so an all-missing group participates in ordering with a
    /// total of zero.
    #[must_use]
    pub fn summarize(records: &[StackRecord]) -> Self {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        let mut pos_totals: IndexMap<String, f64> = IndexMap::new();
        let mut neg_totals: IndexMap<String, f64> = IndexMap::new();

        for record in records {
            let entry = totals.entry(record.group.clone()).or_insert(0.0);
            if let Some(rank) = record.rank_value {
                *entry += rank;
            }
            if let Some(value) = record.value {
                if value > 0.0 {
                    *pos_totals.entry(record.group.clone()).or_insert(0.0) += value;
                } else if value < 0.0 {
                    *neg_totals.entry(record.group.clone()).or_insert(0.0) += value;
                }
            }
        }

        let mut ranked: Vec<(String, f64)> =
            totals.iter().map(|(g, t)| (g.clone(), *t)).collect();
        // Stable sort keeps encounter order for ties.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let order = ranked.into_iter().map(|(g, _)| g).collect();

        let pos_max = pos_totals
            .values()
            .copied()
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |m| m.max(v)))
            });
        let neg_max = neg_totals
            .values()
            .copied()
            .fold(None, |acc: Option<f64>, v| {
                Some(acc.map_or(v, |m| m.min(v)))
            });

        Self {
            order,
            totals,
            pos_max,
            neg_max,
        }
    }
}

/// Descending stack-key order by summed `value`, ties in encounter order.
///
/// This drives both hue ordering for stacked charts and legend ordering.
#[must_use]
pub fn key_order_by_value(records: &[StackRecord]) -> Vec<String> {
    key_order_by(records, |r| r.value)
}

/// Descending stack-key order by summed absolute `value`.
///
/// Sub-sector stacks rank by magnitude so absorption (negative) segments
/// still order by their size.
#[must_use]
pub fn key_order_by_magnitude(records: &[StackRecord]) -> Vec<String> {
    key_order_by(records, |r| r.value.map(f64::abs))
}

fn key_order_by(records: &[StackRecord], value: impl Fn(&StackRecord) -> Option<f64>) -> Vec<String> {
    let mut totals: IndexMap<String, f64> = IndexMap::new();
    for record in records {
        let entry = totals.entry(record.key.clone()).or_insert(0.0);
        if let Some(v) = value(record) {
            *entry += v;
        }
    }

    let mut ranked: Vec<(String, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.into_iter().map(|(k, _)| k).collect()
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
