// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of check results.
//!
//! Reporting only consumes the result list; it never changes verdicts.

pub mod details;
pub mod json;
pub mod text;

pub use json::{Report, to_json, write_json};
pub use text::{TextReporter, print_summary};
