//! Configuration specs
//!
//! The cache location comes from `--cache`, then `navctl.toml`, then the
//! built-in default.

use crate::prelude::*;

#[test]
fn default_cache_location_is_used_without_config() {
    let temp = Project::empty();

    temp.navctl().args(&["hide", "2"]).passes();

    assert!(temp.path().join(".navedit/navigation-state.json").is_file());
}

#[test]
fn config_file_sets_cache_path() {
    let temp = Project::empty();
    temp.file("navctl.toml", "cache_path = \"state/menu.json\"\n");

    temp.navctl().args(&["hide", "2"]).passes();

    assert!(temp.path().join("state/menu.json").is_file());
    assert!(!temp.path().join(".navedit").exists());
}

#[test]
fn cache_flag_overrides_config() {
    let temp = Project::empty();
    temp.file("navctl.toml", "cache_path = \"state/menu.json\"\n");

    temp.navctl()
        .args(&["--cache", "other.json", "hide", "2"])
        .passes();

    assert!(temp.path().join("other.json").is_file());
    assert!(!temp.path().join("state/menu.json").exists());
}

#[test]
fn explicit_config_must_exist() {
    let temp = Project::empty();

    temp.navctl()
        .args(&["--config", "missing.toml", "list"])
        .fails()
        .stderr_has("missing.toml");
}

#[test]
fn invalid_config_is_reported() {
    let temp = Project::empty();
    temp.file("navctl.toml", "[remote]\ntimeout = \"soon\"\n");

    temp.navctl()
        .args(&["list"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn missing_token_only_blocks_saving() {
    let temp = Project::empty();
    temp.file("navctl.toml", &remote_config("http://127.0.0.1:9/nav"));

    temp.navctl().args(&["list"]).passes();
    temp.navctl().args(&["hide", "2"]).passes();

    temp.navctl()
        .args(&["save"])
        .fails()
        .stderr_has("NAVEDIT_TOKEN");

    assert_eq!(temp.cache()["changes"].as_array().unwrap().len(), 1);
}
