//! Canonical column naming.
//!
//! Source spreadsheets use mixed case, spaces and slashes in their
//! headers; every header is normalized to lower_snake form before any
//! column is looked up.

/// Canonical column names expected after normalization.
pub const COUNTRY_CODE: &str = "country_code";
pub const COUNTRY_NAME: &str = "country_name";
pub const GAS_SCOPE: &str = "gas_scope";
pub const CRF_CODE: &str = "crf_code";
pub const SECTOR_CODE: &str = "sector_code";
pub const SECTOR_NAME: &str = "sector_name";

/// Normalize a header to canonical lower_snake form: lowercase, with
/// spaces and `/` replaced by underscores.
#[must_use]
pub fn canonical(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
