// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral tests for the check chain.
//!
//! Structural analyzers run in-process; wrapper checks go through the stub
//! tools, configured per test with `STUB_*` variables.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Structural analyzers
// =============================================================================

#[test]
fn clean_project_passes_every_check() {
    check()
        .on("clean-project")
        .passes()
        .stdout_has("✓ Docstring Check: PASSED")
        .stdout_has("✓ Dependency Check: PASSED")
        .stdout_lacks("FAILED\n");
}

#[test]
fn naming_violations_are_listed_with_lines() {
    check()
        .on("violations")
        .fails()
        .stdout_has("✗ Naming Conventions: FAILED")
        .stdout_has("src/BadModule.py - Module name 'BadModule' does not follow snake_case convention")
        .stdout_has("src/BadModule.py:4 - Class name 'bad_class' does not follow PascalCase convention")
        .stdout_has(
            "src/BadModule.py:8 - Function name 'CamelFunction' does not follow snake_case convention",
        );
}

#[test]
fn missing_docstrings_are_listed() {
    check()
        .on("violations")
        .fails()
        .stdout_has("✗ Docstring Check: FAILED")
        .stdout_has("Missing docstrings found:")
        .stdout_has("src/BadModule.py:4 - class 'bad_class'")
        .stdout_has("src/BadModule.py:13 - function 'undocumented'");
}

#[test]
fn long_functions_use_configured_maximum() {
    check()
        .on("violations")
        .fails()
        .stdout_has("Functions exceeding the maximum length of 5 lines:")
        .stdout_has("src/BadModule.py:13 - function 'undocumented' is 7 lines (max 5)");
}

#[test]
fn unparsable_file_is_reported_as_syntax_error() {
    check()
        .on("violations")
        .fails()
        .stdout_has("src/broken.py - Syntax error: invalid syntax (broken.py, line");
}

#[test]
fn long_file_fails_file_length() {
    let temp = Project::empty();
    temp.config("[general]\nmax_file_length = 4\n");
    temp.file("src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .fails()
        .stdout_has("✗ File Length: FAILED")
        .stdout_has("src/clean.py - 6 lines (max 4)");
}

#[test]
fn excluded_directories_are_not_analyzed() {
    let temp = Project::empty();
    temp.file("src/clean.py", CLEAN_MODULE);
    temp.file("src/build/Generated.py", "x = 1\n");

    check().pwd(temp.path()).passes();
}

// =============================================================================
// Wrapper checks
// =============================================================================

#[test]
fn failing_formatter_fails_the_run() {
    check()
        .on("clean-project")
        .env("STUB_BLACK_EXIT", "1")
        .env("STUB_BLACK_OUT", "would reformat src/greeting.py")
        .fails()
        .stdout_has("✗ Code Formatting (Black): FAILED")
        .stdout_has("    Files need formatting:\n    would reformat src/greeting.py");
}

#[test]
fn missing_tools_fail_with_reason() {
    check()
        .on("clean-project")
        .env("PATH", "/nonexistent")
        .fails()
        .stdout_has("`black` could not be run:")
        .stdout_has("`pip` could not be run:");
}

#[test]
fn pylint_usage_error_is_distinguished() {
    check()
        .on("clean-project")
        .env("STUB_PYLINT_EXIT", "32")
        .fails()
        .stdout_has("Linting failed with an error:");
}

#[test]
fn low_coverage_fails() {
    check()
        .on("clean-project")
        .env("STUB_COVERAGE", "50")
        .env("STUB_PYTEST_EXIT", "2")
        .fails()
        .stdout_has("✗ Test Coverage: FAILED")
        .stdout_has("Test coverage is 50%, which is below the minimum requirement of 80%.");
}

#[test]
fn sufficient_coverage_passes() {
    check()
        .on("clean-project")
        .env("STUB_COVERAGE", "91")
        .passes()
        .stdout_has("Test coverage is 91%, which meets the minimum requirement of 80%.");
}

#[test]
fn disabled_tools_are_skipped_without_failing() {
    let temp = Project::empty();
    temp.config("[general]\ncheck_mypy = false\ncheck_bandit = false\n");
    temp.file("src/clean.py", CLEAN_MODULE);

    check()
        .pwd(temp.path())
        .env("STUB_MYPY_EXIT", "1")
        .passes()
        .stdout_has("⚠ Type Checking (mypy): SKIPPED\n    disabled by configuration")
        .stdout_has("⚠ Security Check (Bandit): SKIPPED");
}

#[test]
fn outdated_requirements_fail_dependency_check() {
    check()
        .on("clean-project")
        .env(
            "STUB_PIP_OUT",
            r#"[{"name": "Requests", "version": "2.31.0", "latest_version": "2.32.3"}]"#,
        )
        .fails()
        .stdout_has("✗ Dependency Check: FAILED")
        .stdout_has("- requirements.txt: Requests (current: 2.31.0, latest: 2.32.3)");
}

#[test]
fn unparsable_pip_output_fails_dependency_check() {
    check()
        .on("clean-project")
        .env("STUB_PIP_OUT", "not json")
        .fails()
        .stdout_has("Failed to parse pip output:");
}

#[test]
fn project_without_requirements_skips_dependency_check() {
    check()
        .on("violations")
        .fails()
        .stdout_has("⚠ Dependency Check: SKIPPED\n    No requirements.txt files found.");
}

#[test]
fn project_without_sources_skips_tools_and_passes() {
    let temp = Project::empty();

    check()
        .pwd(temp.path())
        .passes()
        .stdout_has("⚠ Code Formatting (Black): SKIPPED\n    No source directories found to check.")
        .stdout_has("✓ Naming Conventions: PASSED");
}
