// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and resolution.
//!
//! Handles codegate.toml parsing with per-key defaults and unknown key
//! warnings. Every key is optional.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Thresholds and check toggles.
    pub general: GeneralConfig,

    /// Source layout.
    pub paths: PathsConfig,
}

/// `[general]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum test coverage percentage (default: 80).
    pub min_test_coverage: u32,

    /// Maximum physical lines per file (default: 300).
    pub max_file_length: usize,

    /// Maximum lines per function (default: 50).
    pub max_function_length: usize,

    pub check_bandit: bool,
    pub check_mypy: bool,
    pub check_ruff: bool,

    /// Branch that passing work would be merged into.
    pub main_branch: String,

    pub enable_auto_commit: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            min_test_coverage: 80,
            max_file_length: 300,
            max_function_length: 50,
            check_bandit: true,
            check_mypy: true,
            check_ruff: true,
            main_branch: "main".to_string(),
            enable_auto_commit: false,
        }
    }
}

/// `[paths]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Source directories relative to the project root (default: src, app).
    #[serde(deserialize_with = "string_list")]
    pub src_dirs: Vec<String>,

    /// Test directory relative to the project root (default: tests).
    pub test_dir: String,

    /// Directory names pruned while walking sources.
    #[serde(deserialize_with = "string_list")]
    pub exclude_dirs: Vec<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            src_dirs: split_list("src,app"),
            test_dir: "tests".to_string(),
            exclude_dirs: split_list("venv,.venv,__pycache__,build,dist"),
        }
    }
}

/// Known keys per table.
const KNOWN_GENERAL_KEYS: &[&str] = &[
    "min_test_coverage",
    "max_file_length",
    "max_function_length",
    "check_bandit",
    "check_mypy",
    "check_ruff",
    "main_branch",
    "enable_auto_commit",
];
const KNOWN_PATHS_KEYS: &[&str] = &["src_dirs", "test_dir", "exclude_dirs"];
const KNOWN_KEYS: &[&str] = &["general", "paths"];

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Accept either `"a,b"` or `["a", "b"]`.
fn string_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Comma(String),
        List(Vec<String>),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Comma(s) => split_list(&s),
        Raw::List(items) => items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    })
}

impl Config {
    /// Flatten the resolved options into a string-keyed map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let g = &self.general;
        let p = &self.paths;
        let mut map = BTreeMap::new();
        map.insert("min_test_coverage".into(), g.min_test_coverage.to_string());
        map.insert("max_file_length".into(), g.max_file_length.to_string());
        map.insert(
            "max_function_length".into(),
            g.max_function_length.to_string(),
        );
        map.insert("check_bandit".into(), g.check_bandit.to_string());
        map.insert("check_mypy".into(), g.check_mypy.to_string());
        map.insert("check_ruff".into(), g.check_ruff.to_string());
        map.insert("main_branch".into(), g.main_branch.clone());
        map.insert(
            "enable_auto_commit".into(),
            g.enable_auto_commit.to_string(),
        );
        map.insert("src_dirs".into(), p.src_dirs.join(","));
        map.insert("test_dir".into(), p.test_dir.clone());
        map.insert("exclude_dirs".into(), p.exclude_dirs.join(","));
        map
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let table: toml::Table = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    for key in unknown_keys(&table) {
        warn_unknown_key(path, &key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e: toml::de::Error| Error::Config {
            message: e.to_string(),
            path: Some(path.to_path_buf()),
        })
}

/// Dotted names of keys that are not recognized.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();
    for (key, value) in table {
        let known = match key.as_str() {
            "general" => KNOWN_GENERAL_KEYS,
            "paths" => KNOWN_PATHS_KEYS,
            _ => {
                if !KNOWN_KEYS.contains(&key.as_str()) {
                    unknown.push(key.clone());
                }
                continue;
            }
        };
        if let toml::Value::Table(section) = value {
            for sub in section.keys() {
                if !known.contains(&sub.as_str()) {
                    unknown.push(format!("{key}.{sub}"));
                }
            }
        }
    }
    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`", path.display(), key);
    eprintln!(
        "codegate: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
