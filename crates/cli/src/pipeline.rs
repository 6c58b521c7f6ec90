// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline orchestration.
//!
//! Builds the fixed chain from configuration, validates source directories,
//! runs the chain and reduces the results to a verdict.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::chain::Chain;
use crate::check::{CheckResult, ExecutionContext, StatusCounts, verdict};
use crate::checks::dependency::DependencyCheck;
use crate::checks::docstring::DocstringCheck;
use crate::checks::length::{FileLengthCheck, FunctionLengthCheck};
use crate::checks::naming::NamingConventionsCheck;
use crate::checks::tools::{Tool, ToolCheck, ToolRunner};
use crate::config::Config;
use crate::error::Error;

/// Results of a pipeline that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<CheckResult>,

    /// Source directories that existed and were checked.
    pub source_dirs: Vec<PathBuf>,

    /// No result failed.
    pub passed: bool,
}

impl RunSummary {
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.results)
    }
}

/// A run either completes, with passing or failing results, or errors.
#[derive(Debug)]
pub enum PipelineOutcome {
    Completed(RunSummary),
    Errored(Error),
}

pub struct Pipeline {
    project_path: PathBuf,
    config: Config,
    runner: Option<Arc<dyn ToolRunner>>,
}

impl Pipeline {
    pub fn new(project_path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            project_path: project_path.into(),
            config,
            runner: None,
        }
    }

    /// Runner for the checks that wrap external tools.
    ///
    /// Without one those checks are skipped.
    pub fn with_runner(mut self, runner: Arc<dyn ToolRunner>) -> Self {
        self.runner = Some(runner);
        self
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The full chain in its fixed order.
    pub fn build_chain(&self) -> Chain {
        let general = &self.config.general;
        let mut chain = Chain::new();
        for tool in Tool::ALL {
            chain = chain.add_link(ToolCheck::new(tool, self.runner.clone()));
        }
        chain
            .add_link(NamingConventionsCheck)
            .add_link(FileLengthCheck::new(general.max_file_length))
            .add_link(FunctionLengthCheck::new(general.max_function_length))
            .add_link(DocstringCheck::default())
            .add_link(DependencyCheck::new(self.runner.clone()))
    }

    /// Declared source directories that exist under the project root.
    ///
    /// Missing ones are logged and dropped.
    pub fn validate_source_dirs(&self) -> Vec<PathBuf> {
        let mut valid = Vec::new();
        for dir in &self.config.paths.src_dirs {
            let full = self.project_path.join(dir);
            if full.is_dir() {
                valid.push(PathBuf::from(dir));
            } else {
                tracing::warn!("source directory not found, skipping: {}", full.display());
            }
        }
        if valid.is_empty() {
            tracing::warn!("no source directories found to check");
        }
        valid
    }

    pub fn run(&self) -> PipelineOutcome {
        self.run_chain(&self.build_chain())
    }

    /// Run `chain` against this pipeline's project and configuration.
    pub fn run_chain(&self, chain: &Chain) -> PipelineOutcome {
        let source_dirs = self.validate_source_dirs();
        let ctx = ExecutionContext::new(&self.project_path, &source_dirs, &self.config);
        tracing::info!(
            "running {} checks on {}",
            chain.len(),
            self.project_path.display()
        );

        let results = match catch_unwind(AssertUnwindSafe(|| chain.execute(&ctx))) {
            Ok(Ok(results)) => results,
            Ok(Err(err)) => {
                tracing::warn!("pipeline aborted: {}", err);
                return PipelineOutcome::Errored(err);
            }
            Err(_) => {
                tracing::warn!("pipeline aborted: check panicked");
                return PipelineOutcome::Errored(Error::Internal("check panicked".to_string()));
            }
        };

        let passed = verdict(&results);
        let counts = StatusCounts::tally(&results);
        tracing::info!(
            "verdict: {} ({} passed, {} failed, {} skipped)",
            if passed { "PASSED" } else { "FAILED" },
            counts.passed,
            counts.failed,
            counts.skipped
        );
        PipelineOutcome::Completed(RunSummary {
            results,
            source_dirs,
            passed,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
