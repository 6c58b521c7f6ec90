// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console summary.
//!
//! ```text
//! Detailed Check Results
//!
//! ✓ Naming Conventions: PASSED
//!     All code follows naming conventions.
//!
//! Pipeline Summary
//!   PASSED   11  ✓
//!   FAILED    0  ✗
//!   SKIPPED   1  ⚠
//!   TOTAL    12
//!
//! ✓ All quality checks passed!
//! ```

use std::io;

use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::check::{CheckResult, CheckStatus, StatusCounts, verdict};
use crate::color::scheme;

/// Handle that owns the console stream results are rendered to.
pub struct TextReporter<W: WriteColor> {
    out: W,
}

impl TextReporter<StandardStream> {
    pub fn stdout(color_choice: ColorChoice) -> Self {
        Self::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn styled(&mut self, spec: &ColorSpec, text: &str) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()
    }

    /// One result: status line, then its details indented.
    pub fn write_result(&mut self, result: &CheckResult) -> io::Result<()> {
        let spec = status_spec(result.status());
        self.styled(&spec, symbol(result.status()))?;
        write!(self.out, " ")?;
        self.styled(&scheme::check_name(), result.name())?;
        write!(self.out, ": ")?;
        self.styled(&spec, result.status().as_str())?;
        writeln!(self.out)?;
        for line in result.details().lines() {
            if line.is_empty() {
                writeln!(self.out)?;
            } else {
                write!(self.out, "    ")?;
                self.styled(&scheme::details(), line)?;
                writeln!(self.out)?;
            }
        }
        writeln!(self.out)
    }

    /// Count table and the overall verdict line.
    pub fn write_totals(&mut self, results: &[CheckResult]) -> io::Result<()> {
        let counts = StatusCounts::tally(results);
        self.styled(&scheme::heading(), "Pipeline Summary")?;
        writeln!(self.out)?;
        for (status, count) in [
            (CheckStatus::Passed, counts.passed),
            (CheckStatus::Failed, counts.failed),
            (CheckStatus::Skipped, counts.skipped),
        ] {
            write!(self.out, "  ")?;
            self.styled(&status_spec(status), &format!("{:<8}", status.as_str()))?;
            writeln!(self.out, "{:>3}  {}", count, symbol(status))?;
        }
        writeln!(self.out, "  {:<8}{:>3}", "TOTAL", counts.total())?;
        writeln!(self.out)?;

        if verdict(results) {
            self.styled(&scheme::pass(), "✓ All quality checks passed!")?;
        } else {
            self.styled(
                &scheme::fail(),
                "✗ Some quality checks failed. See details above.",
            )?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Render every result followed by the totals.
pub fn print_summary<W: WriteColor>(
    reporter: &mut TextReporter<W>,
    results: &[CheckResult],
) -> io::Result<()> {
    reporter.styled(&scheme::heading(), "Detailed Check Results")?;
    writeln!(reporter.out)?;
    writeln!(reporter.out)?;
    for result in results {
        reporter.write_result(result)?;
    }
    reporter.write_totals(results)
}

fn symbol(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Passed => "✓",
        CheckStatus::Failed => "✗",
        CheckStatus::Skipped => "⚠",
    }
}

fn status_spec(status: CheckStatus) -> ColorSpec {
    match status {
        CheckStatus::Passed => scheme::pass(),
        CheckStatus::Failed => scheme::fail(),
        CheckStatus::Skipped => scheme::skip(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
