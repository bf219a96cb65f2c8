use crate::OutputFormatter;
use caulk_engine::types::{AnalysisResult, FixResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, result: &AnalysisResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }

    fn format_fixes(&self, result: &FixResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
