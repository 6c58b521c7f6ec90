// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source file discovery.
//!
//! Uses the `ignore` crate for directory traversal. Standard filters are
//! disabled so hidden and gitignored files are still analyzed; only
//! directories named in the exclude list are pruned. Results are sorted so
//! every analyzer sees files in the same order on every run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::check::ExecutionContext;

/// Helper to check if an ignore::Error is a symlink loop error.
fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. } => is_loop_error(err),
        ignore::Error::WithDepth { err, .. } => is_loop_error(err),
        ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    /// Files accepted by the walk predicate.
    pub files_found: usize,

    /// Symlink loops detected.
    pub symlink_loops: usize,

    /// Other traversal errors.
    pub errors: usize,
}

/// Directory walker that prunes excluded directory names.
#[derive(Debug, Clone, Default)]
pub struct SourceWalker {
    exclude_dirs: Vec<String>,
}

impl SourceWalker {
    pub fn new(exclude_dirs: &[String]) -> Self {
        Self {
            exclude_dirs: exclude_dirs.to_vec(),
        }
    }

    /// Walker configured from the context's `exclude_dirs`.
    pub fn for_context(ctx: &ExecutionContext<'_>) -> Self {
        Self::new(&ctx.config.paths.exclude_dirs)
    }

    /// Collect files under `root` accepted by `accept`, sorted by path.
    pub fn collect(
        &self,
        root: &Path,
        accept: impl Fn(&Path) -> bool,
    ) -> (Vec<PathBuf>, WalkStats) {
        let mut stats = WalkStats::default();
        let mut files = Vec::new();

        let exclude = self.exclude_dirs.clone();
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(true)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !is_dir
                    || entry.depth() == 0
                    || !entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| exclude.iter().any(|e| e == name))
            });

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_some_and(|t| t.is_file()) {
                        continue;
                    }
                    if accept(entry.path()) {
                        stats.files_found += 1;
                        files.push(entry.into_path());
                    }
                }
                Err(err) if is_loop_error(&err) => {
                    tracing::warn!("symlink loop skipped: {}", err);
                    stats.symlink_loops += 1;
                }
                Err(err) => {
                    tracing::warn!("walk error: {}", err);
                    stats.errors += 1;
                }
            }
        }

        files.sort();
        (files, stats)
    }

    /// Python files under every source directory of the context.
    ///
    /// Directories are visited in declared order; a file reachable from two
    /// overlapping directories is returned once.
    pub fn python_sources(&self, ctx: &ExecutionContext<'_>) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut all = Vec::new();
        for root in ctx.source_roots() {
            if !root.is_dir() {
                continue;
            }
            let (files, stats) = self.collect(&root, is_python_file);
            tracing::debug!(
                "{}: {} python files ({} errors)",
                root.display(),
                stats.files_found,
                stats.errors
            );
            for file in files {
                if seen.insert(file.clone()) {
                    all.push(file);
                }
            }
        }
        all
    }
}

/// True for `*.py` files.
pub fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}

/// True for files that look like tests by name (`test_*.py`, `*test_*.py`, `test*.py`).
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.contains("test_") || name.starts_with("test"))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
