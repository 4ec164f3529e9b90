//! Integration tests for the `init` and `config` commands.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_writes_a_loadable_template() {
    let fixture = TestFixture::new();

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    assert!(fixture.path().join("ghg-charts.toml").exists());

    // The generated template must validate.
    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "validate", "ghg-charts.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing");

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn validate_rejects_broken_toml() {
    let fixture = TestFixture::new();
    fixture.create_file("broken.toml", "input = [unclosed");

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "validate", "broken.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn validate_rejects_semantic_errors() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "empty-codes.toml",
        r#"
        [[sectors]]
        name = "Energy"
        codes = []
        palette = "set1"
        "#,
    );

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "validate", "empty-codes.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sub-sector code"));
}

#[test]
fn validate_missing_file_fails() {
    let fixture = TestFixture::new();

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "validate", "nowhere.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_prints_effective_defaults() {
    let fixture = TestFixture::new();

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GHG_proxy_2022.xlsx"))
        .stdout(predicate::str::contains("[[sectors]]"))
        .stdout(predicate::str::contains("Energy"));
}

#[test]
fn show_json_is_parseable() {
    let fixture = TestFixture::new();

    let output = ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        value["input"]["sheet_name"],
        serde_json::json!("EEA proxy dataset (plus)")
    );
    assert_eq!(value["sectors"].as_array().unwrap().len(), 6);
}

#[test]
fn show_reflects_local_config_file() {
    let fixture = TestFixture::new();
    fixture.create_config(
        r#"
        [input]
        year = 1990
        "#,
    );

    ghg_charts_cmd!()
        .current_dir(fixture.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("year = 1990"));
}
