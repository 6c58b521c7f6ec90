// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Codegate library: a fixed chain of quality checks over Python projects.

pub mod chain;
pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod syntax;
pub mod walker;

pub use chain::Chain;
pub use check::{Check, CheckResult, CheckStatus, ExecutionContext, Finding, StatusCounts};
pub use checks::tools::{ToolOutput, ToolRunner};
pub use cli::{CheckArgs, Cli, Command, OutputFormat};
pub use color::ColorMode;
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use pipeline::{Pipeline, PipelineOutcome, RunSummary};
pub use walker::{SourceWalker, WalkStats};

#[cfg(test)]
pub mod test_utils;
