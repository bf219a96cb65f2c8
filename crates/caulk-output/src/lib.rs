//! Output formatters for caulk command results.
//!
//! Provides two output modes:
//! - **JSON** (`--format json`): Machine-readable structured output
//! - **Human** (default): Compiler-style output for terminal users

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use caulk_engine::types::{AnalysisResult, FixResult};

pub trait OutputFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String;
    fn format_fixes(&self, result: &FixResult) -> String;
}
