use serde::{Deserialize, Serialize};

use caulk_core::model::Span;
use caulk_core::types::{RuleId, Severity};

/// Result of one analysis pass over a semantic model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error" | "warning"
    pub declarations_analyzed: Vec<String>,
    /// Ordered by declaration discovery order, then rule code.
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}

/// One rule violation at one source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    #[serde(rename = "code")]
    pub rule: RuleId,
    pub severity: Severity,
    pub category: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub span: Span,
    /// Primary symbol the diagnostic is about.
    pub symbol: String,
    /// Stable symbol hash for re-locating the site across edits.
    pub hash: String,
    pub fix_available: bool,
    pub fix_hint: Option<String>,
    /// Node a fix should edit when it differs from the diagnostic site
    /// (A005/A006/A007: the offending type declaration; class-site A001:
    /// the interface declaration).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fix_target: Option<FixTarget>,
}

/// Location of the node a fix edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixTarget {
    pub file: String,
    pub span: Span,
}

/// Outcome of applying one synthesized fix, for fix-all summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixOutcome {
    pub code: String,
    pub file: String,
    pub symbol: String,
    pub applied: bool,
    pub description: String,
}

/// Result of a fix-all pass over one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixResult {
    pub version: String,
    pub command: String,
    pub fixes_applied: u32,
    pub fixes_skipped: u32,
    pub files_affected: Vec<String>,
    pub outcomes: Vec<FixOutcome>,
}
