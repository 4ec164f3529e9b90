//! Percentage-share computation.

use indexmap::IndexMap;

use crate::aggregate::StackRecord;

/// Convert absolute records to percentage shares of each group's
/// positive total.
///
/// Only strictly positive values participate: absorption (negative)
/// rows are excluded from both numerators and denominators, as are
/// missing values. Each surviving record's `value` becomes
/// `100 * value / group_total` and its `rank_value` keeps the absolute
/// value, so magnitude ordering survives the unit change. A zero group
/// total yields a missing share rather than a division failure.
#[must_use]
pub fn compute_shares(records: &[StackRecord]) -> Vec<StackRecord> {
    let positive: Vec<&StackRecord> = records
        .iter()
        .filter(|r| r.value.is_some_and(|v| v > 0.0))
        .collect();

    let mut group_totals: IndexMap<String, f64> = IndexMap::new();
    for record in &positive {
        if let Some(value) = record.value {
            *group_totals.entry(record.group.clone()).or_insert(0.0) += value;
        }
    }

    positive
        .into_iter()
        .map(|record| {
            let share = record.value.and_then(|value| {
                let total = group_totals.get(&record.group).copied().unwrap_or(0.0);
                (total > 0.0).then(|| 100.0 * value / total)
            });
            StackRecord {
                group: record.group.clone(),
                key: record.key.clone(),
                value: share,
                rank_value: record.value,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "share_tests.rs"]
mod tests;
