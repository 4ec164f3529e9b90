use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::NamedPalette;

/// Complete pipeline configuration.
///
/// Every knob the pipeline reads lives here as a named field; defaults
/// reproduce the EEA 2022 proxy-dataset setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub countries: CountryConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    /// Sector charts to produce: each entry names a sector, the
    /// sub-sector CRF codes it covers, and the palette for its stacks.
    #[serde(default = "default_sectors")]
    pub sectors: Vec<SectorConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            input: InputConfig::default(),
            countries: CountryConfig::default(),
            summary: SummaryConfig::default(),
            sectors: default_sectors(),
        }
    }
}

/// Data and results directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            results_dir: default_results_dir(),
        }
    }
}

/// Input workbook settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Emissions column header (kilotonnes), matched after header
    /// normalization.
    #[serde(default = "default_emissions_column")]
    pub emissions_column: String,

    /// Reporting year, used in chart titles and file names.
    #[serde(default = "default_year")]
    pub year: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            sheet_name: default_sheet_name(),
            emissions_column: default_emissions_column(),
            year: default_year(),
        }
    }
}

/// Country-code handling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryConfig {
    /// Legacy-to-ISO code remappings applied before population lookup.
    #[serde(default = "default_code_mappings")]
    pub code_mappings: IndexMap<String, String>,

    /// Codes excluded from every chart (aggregates like EU27).
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self {
            code_mappings: default_code_mappings(),
            excludes: default_excludes(),
        }
    }
}

/// Sentinel values marking summary (total) rows in the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryConfig {
    #[serde(default = "default_gas_scope_summary")]
    pub gas_scope: String,

    #[serde(default = "default_crf_code_summary")]
    pub crf_code: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            gas_scope: default_gas_scope_summary(),
            crf_code: default_crf_code_summary(),
        }
    }
}

/// One sector chart: display name, sub-sector codes, stack palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectorConfig {
    pub name: String,
    pub codes: Vec<String>,
    pub palette: NamedPalette,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_file_name() -> String {
    "GHG_proxy_2022.xlsx".to_string()
}

fn default_sheet_name() -> String {
    "EEA proxy dataset (plus)".to_string()
}

fn default_emissions_column() -> String {
    "emissions_-_eea_[kt]".to_string()
}

const fn default_year() -> u16 {
    2022
}

fn default_code_mappings() -> IndexMap<String, String> {
    let mut mappings = IndexMap::new();
    mappings.insert("EL".to_string(), "GR".to_string());
    mappings
}

fn default_excludes() -> Vec<String> {
    vec!["EU27".to_string()]
}

fn default_gas_scope_summary() -> String {
    "Total".to_string()
}

fn default_crf_code_summary() -> String {
    "Total_net".to_string()
}

fn sector(name: &str, codes: &[&str], palette: NamedPalette) -> SectorConfig {
    SectorConfig {
        name: name.to_string(),
        codes: codes.iter().map(ToString::to_string).collect(),
        palette,
    }
}

fn default_sectors() -> Vec<SectorConfig> {
    vec![
        sector(
            "Overall",
            &["1", "2", "3", "4", "5", "6"],
            NamedPalette::Dark2,
        ),
        sector(
            "Energy",
            &[
                "1.A.1", "1.A.2", "1.A.3", "1.A.4", "1.A.5", "1.B", "1.C", "1.D.1.a", "1.D.1.b",
            ],
            NamedPalette::Set1,
        ),
        sector(
            "Industrial Processes and Product Use",
            &["2.A", "2.B", "2.C", "2.D", "2.E", "2.F", "2.G", "2.H"],
            NamedPalette::Set3,
        ),
        sector(
            "Agriculture",
            &[
                "3.A", "3.B", "3.C", "3.D", "3.E", "3.F", "3.G", "3.H", "3.I", "3.J",
            ],
            NamedPalette::Paired,
        ),
        sector(
            "Land Use, Land-Use Change and Forestry",
            &["4.A", "4.B", "4.C", "4.D", "4.E", "4.F", "4.G", "4.H"],
            NamedPalette::Accent,
        ),
        sector(
            "Waste",
            &["5.A", "5.B", "5.C", "5.D", "5.E"],
            NamedPalette::Set2,
        ),
    ]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
