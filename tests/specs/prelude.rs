// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for the behavioral CLI tests.
//!
//! Provides a small DSL for running the codegate binary against fixture
//! projects. External tools resolve to the stubs in `tests/fixtures/bin`,
//! whose behavior is driven by `STUB_*` environment variables.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Trait for converting into a string predicate.
/// Allows passing `&str` (as contains) or any `Predicate<str>`.
pub trait IntoStrPredicate<P: Predicate<str>> {
    fn into_predicate(self) -> P;
}

impl IntoStrPredicate<predicates::str::ContainsPredicate> for &str {
    fn into_predicate(self) -> predicates::str::ContainsPredicate {
        predicates::str::contains(self)
    }
}

impl<P: Predicate<str>> IntoStrPredicate<P> for P {
    fn into_predicate(self) -> P {
        self
    }
}

/// Returns a Command configured to run the codegate binary
pub fn codegate_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("codegate"))
}

/// Create a builder for `codegate check`
pub fn check() -> CheckBuilder<Text> {
    CheckBuilder::new()
}

/// Typestate markers for output mode
pub struct Text;
pub struct Json;

/// High-level check builder for fluent test assertions
pub struct CheckBuilder<Mode = Text> {
    dir: Option<PathBuf>,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    _mode: PhantomData<Mode>,
}

#[allow(dead_code)]
impl CheckBuilder<Text> {
    fn new() -> Self {
        Self {
            dir: None,
            args: Vec::new(),
            envs: Vec::new(),
            _mode: PhantomData,
        }
    }

    pub fn json(self) -> CheckBuilder<Json> {
        CheckBuilder {
            dir: self.dir,
            args: self.args,
            envs: self.envs,
            _mode: PhantomData,
        }
    }

    pub fn passes(self) -> RunAssert {
        run_exits(self.command(), 0)
    }

    pub fn fails(self) -> RunAssert {
        run_exits(self.command(), 1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        run_exits(self.command(), code)
    }
}

impl CheckBuilder<Json> {
    pub fn passes(self) -> ReportJson {
        ReportJson::new(&run_exits(self.command(), 0).output)
    }

    pub fn fails(self) -> ReportJson {
        ReportJson::new(&run_exits(self.command(), 1).output)
    }
}

#[allow(dead_code)]
impl<Mode: 'static> CheckBuilder<Mode> {
    /// Run in a fixture directory
    pub fn on(mut self, fixture_name: &str) -> Self {
        self.dir = Some(fixture(fixture_name));
        self
    }

    /// Set working directory (alternative to fixture)
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    /// Build the command
    fn command(self) -> Command {
        let is_json = std::any::TypeId::of::<Mode>() == std::any::TypeId::of::<Json>();
        let mut cmd = codegate_cmd();
        cmd.arg("check");
        if is_json {
            cmd.args(["-o", "json"]);
        }
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        cmd.env("PATH", fixture("bin"));
        cmd.env_remove("CODEGATE_CONFIG");
        cmd.env_remove("CODEGATE_LOG");
        cmd.env_remove("NO_COLOR");
        cmd.env_remove("COLOR");
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

fn run_exits(mut cmd: Command, code: i32) -> RunAssert {
    let output = cmd.output().expect("command should run");
    assert_eq!(
        output.status.code(),
        Some(code),
        "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
        code,
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    RunAssert { output }
}

/// Completed run with its captured output
pub struct RunAssert {
    pub output: Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout matches predicate
    pub fn stdout_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            predicate.into_predicate().eval(&stdout),
            "stdout predicate failed:\n{}",
            stdout
        );
        self
    }

    /// Assert stdout does not match predicate
    pub fn stdout_lacks<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stdout = self.stdout();
        assert!(
            !predicate.into_predicate().eval(&stdout),
            "stdout should NOT match predicate:\n{}",
            stdout
        );
        self
    }

    /// Assert stderr matches predicate
    pub fn stderr_has<I, P>(self, predicate: I) -> Self
    where
        I: IntoStrPredicate<P>,
        P: Predicate<str>,
    {
        let stderr = self.stderr();
        assert!(
            predicate.into_predicate().eval(&stderr),
            "stderr predicate failed:\n{}",
            stderr
        );
        self
    }
}

/// Parsed JSON report
pub struct ReportJson {
    root: serde_json::Value,
}

#[allow(dead_code)]
impl ReportJson {
    fn new(output: &Output) -> Self {
        let root = serde_json::from_slice(&output.stdout).expect("valid JSON");
        Self { root }
    }

    /// Get the root JSON value
    pub fn value(&self) -> &serde_json::Value {
        &self.root
    }

    pub fn summary(&self) -> &serde_json::Value {
        &self.root["summary"]
    }

    /// Get all checks as array
    pub fn checks(&self) -> &Vec<serde_json::Value> {
        self.root["checks"].as_array().unwrap()
    }

    /// Get the named check, panicking if absent
    pub fn check(&self, name: &str) -> &serde_json::Value {
        self.checks()
            .iter()
            .find(|c| c["name"] == name)
            .unwrap_or_else(|| panic!("check '{}' not found", name))
    }

    /// Status string of the named check
    pub fn status(&self, name: &str) -> &str {
        self.check(name)["status"].as_str().unwrap()
    }

    /// Structured issues of the named check
    pub fn issues(&self, name: &str) -> Vec<&str> {
        self.check(name)["details"]["issues"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|i| i.as_str())
            .collect()
    }
}

/// Extract check names from JSON output
pub fn check_names(json: &serde_json::Value) -> Vec<&str> {
    json["checks"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect()
}

/// Assert `json` validates against docs/specs/report.schema.json
pub fn assert_matches_schema(json: &serde_json::Value) {
    let schema_path = repo_root().join("docs/specs/report.schema.json");
    let schema_str = std::fs::read_to_string(&schema_path).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&schema_str).unwrap();

    let compiled = jsonschema::validator_for(&schema).expect("schema should be valid");
    let errors: Vec<String> = compiled.iter_errors(json).map(|e| e.to_string()).collect();
    assert!(errors.is_empty(), "report should match schema: {errors:?}");
}

fn repo_root() -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .to_path_buf()
}

/// Path to a directory under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    repo_root().join("tests").join("fixtures").join(name)
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory with helper methods.
///
/// Carries a `.git` directory so config discovery stops at its root.
pub struct Project {
    dir: tempfile::TempDir,
}

#[allow(dead_code)]
impl Project {
    /// Create an empty project with no files
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write codegate.toml
    pub fn config(&self, content: &str) {
        self.file("codegate.toml", content);
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }
}

/// A module that every analyzer accepts
pub const CLEAN_MODULE: &str = "\"\"\"Clean module.\"\"\"\n\n\ndef add(a, b):\n    \"\"\"Add two numbers.\"\"\"\n    return a + b\n";
