// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort structured view of a result's details text.
//!
//! The raw text stays authoritative; this only pulls out what each check's
//! output makes easy to find.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::checks::{dependency, docstring, length, naming, tools};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Details {
    /// First line of the raw details.
    pub summary: String,
    pub issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percentage: Option<f64>,
}

#[allow(clippy::expect_used)]
static PERCENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("valid regex"));

pub fn parse_details(check_name: &str, raw: &str) -> Details {
    let mut details = Details {
        summary: raw.lines().next().unwrap_or_default().to_string(),
        ..Details::default()
    };
    // Header line excluded.
    let body = || raw.lines().skip(1).map(str::trim).filter(|l| !l.is_empty());

    match check_name {
        tools::FORMATTING if raw.starts_with("Files need formatting") => {
            let reformat: Vec<String> = body()
                .filter_map(|l| l.strip_prefix("would reformat "))
                .map(String::from)
                .collect();
            details.files = Some(if reformat.is_empty() {
                body().take_while(|l| *l != "Errors:").map(String::from).collect()
            } else {
                reformat
            });
        }
        tools::IMPORTS if raw.starts_with("Imports need sorting") => {
            details.files = Some(body().filter_map(isort_file).collect());
        }
        tools::PYLINT | tools::RUFF => {
            details.issues = body().filter(|l| looks_located(l)).map(String::from).collect();
        }
        tools::MYPY => {
            details.issues = body()
                .filter(|l| looks_located(l) && (l.contains("error:") || l.contains("note:")))
                .map(String::from)
                .collect();
        }
        tools::BANDIT => {
            details.issues = body()
                .filter(|l| l.contains("Issue:"))
                .map(String::from)
                .collect();
        }
        tools::COVERAGE => {
            details.coverage_percentage = raw
                .lines()
                .find(|l| l.to_lowercase().contains("coverage is"))
                .and_then(|l| PERCENT.captures(l))
                .and_then(|caps| caps[1].parse().ok());
        }
        naming::NAME
        | length::FILE_LENGTH
        | length::FUNCTION_LENGTH
        | docstring::NAME
        | dependency::NAME => {
            details.issues = body()
                .filter_map(|l| l.strip_prefix("- "))
                .map(String::from)
                .collect();
        }
        _ => {}
    }
    details
}

/// `path:line:...` style tool output.
fn looks_located(line: &str) -> bool {
    line.contains(':') && line.chars().any(|c| c.is_ascii_digit())
}

/// File named by an isort diff header or error line.
fn isort_file(line: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix("---")
        && let Some((path, _)) = rest.split_once(":before")
    {
        return Some(path.trim().to_string());
    }
    line.strip_prefix("ERROR: ")
        .and_then(|rest| rest.split_once(" Imports are incorrectly sorted"))
        .map(|(path, _)| path.trim().to_string())
}

#[cfg(test)]
#[path = "details_tests.rs"]
mod tests;
