// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered chain of checks.
//!
//! Checks run strictly one after another in insertion order and their
//! results are concatenated in that same order.

use crate::check::{Check, CheckResult, ExecutionContext};
use crate::error::Result;

/// An ordered sequence of checks executed in series.
#[derive(Default)]
pub struct Chain {
    links: Vec<Box<dyn Check>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check to the tail of the chain.
    pub fn add_link(self, check: impl Check + 'static) -> Self {
        self.add_boxed(Box::new(check))
    }

    /// Append an already boxed check to the tail of the chain.
    pub fn add_boxed(mut self, check: Box<dyn Check>) -> Self {
        self.links.push(check);
        self
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Names of the linked checks in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.links.iter().map(|c| c.name()).collect()
    }

    /// Run every linked check in order.
    ///
    /// An empty chain yields no results. A check returning `Err` stops the
    /// chain and the error is handed to the caller.
    pub fn execute(&self, ctx: &ExecutionContext<'_>) -> Result<Vec<CheckResult>> {
        let mut results = Vec::with_capacity(self.links.len());
        for check in &self.links {
            tracing::debug!("running check: {}", check.name());
            let produced = check.run(ctx)?;
            for result in &produced {
                tracing::debug!("{}: {}", result.name(), result.status());
            }
            results.extend(produced);
        }
        Ok(results)
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
