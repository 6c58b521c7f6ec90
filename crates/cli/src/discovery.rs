// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating `codegate.toml` for a project under check.
//!
//! The checked project need not be the working directory, so the search
//! starts at the project path and climbs its ancestors. The repository
//! root (the first ancestor holding `.git`) is the last directory searched.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "codegate.toml";

/// Nearest `codegate.toml` at or above `project`, bounded by the repository root.
pub fn find_config(project: &Path) -> Option<PathBuf> {
    for dir in project.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

/// The config file a run should load, if any.
///
/// `--config` (or `CODEGATE_CONFIG`) names a file that must exist; without it
/// the project's ancestors are searched. `None` means built-in defaults.
pub fn resolve_config(explicit: Option<&Path>, project: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = explicit else {
        return Ok(find_config(project));
    };
    if !path.is_file() {
        return Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
