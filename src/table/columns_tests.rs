//! Tests for column-name normalization.

use super::*;

#[test]
fn lowercases_headers() {
    assert_eq!(canonical("Country_code"), "country_code");
}

#[test]
fn spaces_become_underscores() {
    assert_eq!(canonical("Sector name"), "sector_name");
}

#[test]
fn slashes_become_underscores() {
    assert_eq!(canonical("Gas/Scope"), "gas_scope");
}

#[test]
fn combined_normalization() {
    assert_eq!(canonical("Emissions - EEA [kt]"), "emissions_-_eea_[kt]");
}

#[test]
fn already_canonical_unchanged() {
    assert_eq!(canonical("crf_code"), "crf_code");
}
