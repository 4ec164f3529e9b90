//! Tests for percentage-share computation.

use super::*;

fn rec(group: &str, key: &str, value: Option<f64>) -> StackRecord {
    StackRecord::new(group, key, value)
}

#[test]
fn shares_sum_to_one_hundred() {
    let records = vec![
        rec("DE", "CO2", Some(10.0)),
        rec("DE", "CH4", Some(20.0)),
        rec("DE", "N2O", Some(70.0)),
    ];

    let shares = compute_shares(&records);
    let values: Vec<f64> = shares.iter().filter_map(|r| r.value).collect();
    assert_eq!(values, vec![10.0, 20.0, 70.0]);
    assert!((values.iter().sum::<f64>() - 100.0).abs() < 1e-9);
}

#[test]
fn negative_values_excluded_from_numerator_and_denominator() {
    let records = vec![
        rec("SE", "CO2", Some(30.0)),
        rec("SE", "LULUCF", Some(-40.0)),
        rec("SE", "CH4", Some(10.0)),
    ];

    let shares = compute_shares(&records);
    assert_eq!(shares.len(), 2);
    // Denominator is 40, not 0.
    assert_eq!(shares[0].value, Some(75.0));
    assert_eq!(shares[1].value, Some(25.0));
}

#[test]
fn missing_values_excluded() {
    let records = vec![rec("A", "x", None), rec("A", "y", Some(50.0))];

    let shares = compute_shares(&records);
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].value, Some(100.0));
}

#[test]
fn rank_value_keeps_absolute_magnitude() {
    let records = vec![
        rec("big", "x", Some(500.0)),
        rec("small", "x", Some(5.0)),
    ];

    let shares = compute_shares(&records);
    // Both groups plot at 100%, but ranking still separates them.
    assert_eq!(shares[0].value, Some(100.0));
    assert_eq!(shares[1].value, Some(100.0));
    assert_eq!(shares[0].rank_value, Some(500.0));
    assert_eq!(shares[1].rank_value, Some(5.0));
}

#[test]
fn groups_are_independent() {
    let records = vec![
        rec("A", "x", Some(10.0)),
        rec("A", "y", Some(30.0)),
        rec("B", "x", Some(1.0)),
    ];

    let shares = compute_shares(&records);
    assert_eq!(shares[0].value, Some(25.0));
    assert_eq!(shares[1].value, Some(75.0));
    assert_eq!(shares[2].value, Some(100.0));
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(compute_shares(&[]).is_empty());
}
