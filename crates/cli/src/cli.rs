// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::{Config, split_list};

/// A quality gate that runs a fixed chain of checks over Python projects
#[derive(Parser)]
#[command(name = "codegate")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CODEGATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the quality checks
    Check(CheckArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Project directory to check (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Also save the JSON report to FILE
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Comma-separated source directories, overriding the config file
    #[arg(long, value_name = "LIST")]
    pub src_dirs: Option<String>,

    /// Record auto-commit as enabled in the configuration
    #[arg(long)]
    pub auto_commit: bool,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl CheckArgs {
    pub fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else if self.color {
            ColorMode::Always
        } else {
            ColorMode::Auto
        }
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dirs) = &self.src_dirs {
            config.paths.src_dirs = split_list(dirs);
        }
        if self.auto_commit {
            config.general.enable_auto_commit = true;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
