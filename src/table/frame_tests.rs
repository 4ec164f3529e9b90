//! Tests for the emissions table.

use super::*;

fn record(code: &str, emissions: f64) -> EmissionsRecord {
    EmissionsRecord {
        country_code: code.to_string(),
        emissions: Some(emissions),
        ..Default::default()
    }
}

#[test]
fn filtered_keeps_table_order() {
    let table = EmissionsTable::new(vec![
        record("DE", 700.0),
        record("FR", 400.0),
        record("MT", 2.0),
    ]);

    let filtered = table.filtered(|r| r.emissions.unwrap_or(0.0) > 100.0);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.records()[0].country_code, "DE");
    assert_eq!(filtered.records()[1].country_code, "FR");
    // Source table untouched.
    assert_eq!(table.len(), 3);
}

#[test]
fn mapped_transforms_every_row() {
    let table = EmissionsTable::new(vec![record("DE", 700.0), record("FR", 400.0)]);

    let enriched = table.mapped(|mut r| {
        r.emissions_per_capita = r.emissions.map(|e| e / 10.0);
        r
    });

    assert_eq!(enriched.records()[0].emissions_per_capita, Some(70.0));
    assert_eq!(enriched.records()[1].emissions_per_capita, Some(40.0));
}

#[test]
fn empty_table_reports_empty() {
    let table = EmissionsTable::default();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}
