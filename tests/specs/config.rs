// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for configuration loading and overrides.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovered_config_sets_thresholds() {
    let temp = Project::empty();
    temp.config("[general]\nmax_function_length = 1\n");
    temp.file("src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .fails()
        .stdout_has("src/clean.py:4 - function 'add' is 3 lines (max 1)");
}

#[test]
fn config_is_found_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[general]\nmax_file_length = 2\n");
    temp.file("pkg/src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path().join("pkg"))
        .fails()
        .stdout_has("src/clean.py - 6 lines (max 2)");
}

#[test]
fn explicit_config_flag_is_used() {
    let temp = Project::empty();
    temp.file("custom.toml", "[general]\nmax_file_length = 2\n");
    temp.file("src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .args(&["-C", "custom.toml"])
        .fails()
        .stdout_has("✗ File Length: FAILED");
}

#[test]
fn config_env_var_is_used() {
    let temp = Project::empty();
    temp.file("custom.toml", "[general]\nmax_file_length = 2\n");
    temp.file("src/clean.py", CLEAN_MODULE);
    let config = temp.path().join("custom.toml");

    check()
        .pwd(temp.path())
        .env("CODEGATE_CONFIG", config.to_str().unwrap())
        .fails()
        .stdout_has("✗ File Length: FAILED");
}

#[test]
fn missing_explicit_config_exits_2() {
    let temp = Project::empty();

    check()
        .pwd(temp.path())
        .args(&["--config", "nope.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn invalid_config_exits_2() {
    let temp = Project::empty();
    temp.config("[general\nmax_file_length = ");

    check().pwd(temp.path()).exits(2).stderr_has("config error");
}

#[test]
fn wrongly_typed_value_exits_2() {
    let temp = Project::empty();
    temp.config("[general]\nmax_file_length = \"long\"\n");

    check().pwd(temp.path()).exits(2).stderr_has("config error");
}

#[test]
fn unknown_keys_warn_and_continue() {
    let temp = Project::empty();
    temp.config("[general]\nmax_file_lenght = 10\n\n[extras]\nenabled = true\n");
    temp.file("src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `general.max_file_lenght`")
        .stderr_has("unrecognized field `extras`");
}

#[test]
fn src_dirs_accepts_an_array() {
    let temp = Project::empty();
    temp.config("[paths]\nsrc_dirs = [\"lib\"]\n");
    temp.file("lib/Bad.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .fails()
        .stdout_has("lib/Bad.py - Module name 'Bad' does not follow snake_case convention");
}

#[test]
fn src_dirs_flag_overrides_config() {
    let temp = Project::empty();
    temp.file("lib/Bad.py", CLEAN_MODULE);

    check().pwd(temp.path()).passes();
    check()
        .pwd(temp.path())
        .args(&["--src-dirs", "lib"])
        .fails()
        .stdout_has("lib/Bad.py - Module name 'Bad'");
}

#[test]
fn auto_commit_flag_is_recorded_in_configuration() {
    let temp = Project::empty();
    temp.file("src/clean.py", CLEAN_MODULE);

    let report = check()
        .pwd(temp.path())
        .args(&["--auto-commit"])
        .json()
        .passes();
    assert_eq!(
        report.value()["metadata"]["configuration"]["enable_auto_commit"],
        "true"
    );
}
