// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON report.
//!
//! Produces output conforming to docs/specs/report.schema.json.
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use super::details::{Details, parse_details};
use crate::check::{CheckResult, CheckStatus, StatusCounts, verdict};
use crate::error::{Error, Result};

/// Version of the report layout.
pub const REPORT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub metadata: Metadata,
    pub summary: Summary,
    pub checks: Vec<CheckEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub timestamp: String,
    pub project_path: String,
    pub configuration: BTreeMap<String, String>,
    pub version: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckEntry {
    pub name: String,
    pub status: CheckStatus,
    /// Details exactly as the check reported them.
    pub raw_details: String,
    pub details: Details,
}

/// Build the report for `results`, stamped with the current time.
pub fn to_json(
    results: &[CheckResult],
    project_path: &Path,
    configuration: BTreeMap<String, String>,
) -> Report {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    Report::new(results, project_path, configuration, timestamp)
}

impl Report {
    pub fn new(
        results: &[CheckResult],
        project_path: &Path,
        configuration: BTreeMap<String, String>,
        timestamp: String,
    ) -> Self {
        let counts = StatusCounts::tally(results);
        let status = if verdict(results) {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed
        };
        Self {
            metadata: Metadata {
                timestamp,
                project_path: project_path.display().to_string(),
                configuration,
                version: REPORT_VERSION,
            },
            summary: Summary {
                passed: counts.passed,
                failed: counts.failed,
                skipped: counts.skipped,
                total: counts.total(),
                status,
            },
            checks: results
                .iter()
                .map(|r| CheckEntry {
                    name: r.name().to_string(),
                    status: r.status(),
                    raw_details: r.details().to_string(),
                    details: parse_details(r.name(), r.details()),
                })
                .collect(),
        }
    }
}

/// JSON report writer.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete report, pretty-printed.
    pub fn write(&mut self, report: &Report) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

/// Save the report to `path`, replacing any existing file.
pub fn write_json(path: &Path, report: &Report) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::create(path).map_err(io_err)?;
    let mut writer = std::io::BufWriter::new(file);
    JsonFormatter::new(&mut writer)
        .write(report)
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    tracing::info!("results saved as JSON to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
