use caulk_core::types::Severity;
use caulk_engine::types::Diagnostic;

pub(crate) fn format_diagnostic_human(d: &Diagnostic) -> String {
    let severity_label = match d.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    let mut out = format!(
        "{}[{}]: {}\n  --> {}:{}\n",
        severity_label, d.rule, d.message, d.file, d.line,
    );

    if !d.hash.is_empty() {
        out.push_str(&format!("   = hash: {}\n", d.hash));
    }

    if let Some(fix) = &d.fix_hint {
        out.push_str(&format!("   = fix: {}\n", fix));
    }

    if let Some(target) = &d.fix_target {
        out.push_str(&format!("   = fix site: {}\n", target.file));
    }

    out
}
