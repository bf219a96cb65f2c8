use crate::human_helpers::format_diagnostic_human;
use crate::OutputFormatter;
use caulk_engine::types::{AnalysisResult, FixResult};

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        if result.diagnostics.is_empty() {
            return String::new(); // Clean pass = empty stdout
        }

        let mut out = String::new();

        for d in &result.diagnostics {
            out.push_str(&format_diagnostic_human(d));
        }

        // Summary line
        out.push_str(&format!(
            "\n{} error(s), {} warning(s) in {} declaration(s)\n",
            result.error_count(),
            result.warning_count(),
            result.declarations_analyzed.len(),
        ));

        out
    }

    fn format_fixes(&self, result: &FixResult) -> String {
        if result.outcomes.is_empty() {
            return "No fixable diagnostics.\n".to_string();
        }
        let mut out = format!(
            "Applied {} fix(es), skipped {} in {} file(s)\n\n",
            result.fixes_applied,
            result.fixes_skipped,
            result.files_affected.len(),
        );
        for o in &result.outcomes {
            let status = if o.applied { "fixed" } else { "skipped" };
            out.push_str(&format!(
                "{}[{}] `{}` in {}\n  {}\n",
                status, o.code, o.symbol, o.file, o.description,
            ));
        }
        out
    }
}
