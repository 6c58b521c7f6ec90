// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use codegate::cli::{CheckArgs, Cli, OutputFormat};
use codegate::color::resolve_color;
use codegate::config::{self, Config};
use codegate::discovery;
use codegate::error::{Error, ExitCode};
use codegate::output::json::{self, JsonFormatter};
use codegate::output::text::{self, TextReporter};
use codegate::pipeline::{Pipeline, PipelineOutcome};

use crate::process::ProcessRunner;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let root = project_root(args)?;

    let config_path = discovery::resolve_config(cli.config.as_deref(), &root)?;
    let mut config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };
    args.apply_overrides(&mut config);

    let pipeline = Pipeline::new(&root, config).with_runner(Arc::new(ProcessRunner));
    let summary = match pipeline.run() {
        PipelineOutcome::Completed(summary) => summary,
        PipelineOutcome::Errored(err) => {
            eprintln!("codegate: pipeline error: {err}");
            return Ok(ExitCode::from(&err));
        }
    };

    let report = json::to_json(&summary.results, &root, pipeline.config().to_map());
    match args.output {
        OutputFormat::Text => {
            let mut reporter = TextReporter::stdout(resolve_color(args.color_mode()));
            text::print_summary(&mut reporter, &summary.results)?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            JsonFormatter::new(&mut handle).write(&report)?;
            handle.flush()?;
        }
    }

    if let Some(path) = &args.json {
        json::write_json(path, &report)?;
        if matches!(args.output, OutputFormat::Text) {
            println!("Results saved as JSON to {}", path.display());
        }
    }

    Ok(if summary.passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}

/// Absolute project directory from the positional argument or the cwd.
fn project_root(args: &CheckArgs) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let path = match &args.path {
        Some(path) => cwd.join(path),
        None => cwd,
    };
    if !path.is_dir() {
        return Err(Error::Argument(format!("not a directory: {}", path.display())).into());
    }
    Ok(path.canonicalize()?)
}
