//! Tests for the configuration model.

use super::*;

#[test]
fn defaults_reproduce_the_eea_setup() {
    let config = Config::default();

    assert_eq!(config.input.file_name, "GHG_proxy_2022.xlsx");
    assert_eq!(config.input.sheet_name, "EEA proxy dataset (plus)");
    assert_eq!(config.input.emissions_column, "emissions_-_eea_[kt]");
    assert_eq!(config.input.year, 2022);
    assert_eq!(config.summary.gas_scope, "Total");
    assert_eq!(config.summary.crf_code, "Total_net");
    assert_eq!(config.countries.excludes, vec!["EU27"]);
    assert_eq!(
        config.countries.code_mappings.get("EL"),
        Some(&"GR".to_string())
    );
}

#[test]
fn default_sectors_cover_the_crf_inventory() {
    let config = Config::default();

    assert_eq!(config.sectors.len(), 6);
    let names: Vec<&str> = config.sectors.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"Energy"));
    assert!(names.contains(&"Land Use, Land-Use Change and Forestry"));

    let energy = config.sectors.iter().find(|s| s.name == "Energy").unwrap();
    assert_eq!(energy.codes.len(), 9);
    assert_eq!(energy.palette, NamedPalette::Set1);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config: Config = toml::from_str(
        r#"
        [input]
        file_name = "other.xlsx"
        "#,
    )
    .unwrap();

    assert_eq!(config.input.file_name, "other.xlsx");
    // Unspecified fields keep their defaults.
    assert_eq!(config.input.sheet_name, "EEA proxy dataset (plus)");
    assert_eq!(config.sectors.len(), 6);
}

#[test]
fn sectors_parse_with_lowercase_palette_names() {
    let config: Config = toml::from_str(
        r#"
        [[sectors]]
        name = "Energy"
        codes = ["1.A.1", "1.B"]
        palette = "set1"
        "#,
    )
    .unwrap();

    assert_eq!(config.sectors.len(), 1);
    assert_eq!(config.sectors[0].palette, NamedPalette::Set1);
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();
    let serialized = toml::to_string(&config).unwrap();
    let reparsed: Config = toml::from_str(&serialized).unwrap();

    assert_eq!(config, reparsed);
}
