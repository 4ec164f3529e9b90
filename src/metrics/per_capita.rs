//! Per-capita enrichment.

use indexmap::IndexMap;

use crate::population::PopulationLookup;
use crate::table::EmissionsTable;

/// Megatonnes-to-tonnes factor used by the per-capita conversion.
const TONNES_PER_MEGATONNE: f64 = 1e6;

/// Produce a table with normalized country codes and a populated
/// `emissions_per_capita` column.
///
/// Country codes are first passed through `code_mappings` (identity when
/// absent). Codes in `excludes` are never looked up. A lookup miss
/// leaves the per-capita value missing; it is never an error and never
/// coerced to zero.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Populations are far below 2^52
pub fn per_capita_table(
    table: EmissionsTable,
    lookup: &dyn PopulationLookup,
    code_mappings: &IndexMap<String, String>,
    excludes: &[String],
) -> EmissionsTable {
    table.mapped(|mut record| {
        if let Some(mapped) = code_mappings.get(&record.country_code) {
            record.country_code = mapped.clone();
        }

        let population = if excludes.contains(&record.country_code) {
            None
        } else {
            lookup.population(&record.country_code)
        };

        record.emissions_per_capita = match (record.emissions, population) {
            (Some(emissions), Some(population)) => {
                Some(TONNES_PER_MEGATONNE * emissions / population as f64)
            }
            _ => None,
        };

        record
    })
}

#[cfg(test)]
#[path = "per_capita_tests.rs"]
mod tests;
