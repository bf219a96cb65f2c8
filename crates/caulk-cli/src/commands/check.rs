use std::path::Path;

use caulk_core::config::CaulkConfig;
use caulk_engine::engine::AnalysisEngine;
use caulk_output::OutputFormatter;

use crate::snapshot::Snapshot;

/// Run `caulk check <snapshot>` — analyze a project snapshot.
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, snapshot: String, strict: bool) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("caulk check: failed to get current directory: {}", e);
            return 2;
        }
    };

    let snapshot = match Snapshot::load(Path::new(&snapshot)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("caulk check: {}", e);
            return 2;
        }
    };

    let config = CaulkConfig::load(&cwd.join(".caulk"));
    let engine = AnalysisEngine::new(config);
    let result = engine.analyze_parallel(&snapshot.model);

    if verbose {
        eprintln!(
            "caulk check: {} declaration(s), {} diagnostic(s)",
            result.declarations_analyzed.len(),
            result.diagnostics.len(),
        );
    }

    let output = formatter.format_analysis(&result);
    if !output.is_empty() {
        println!("{}", output);
    }

    if result.error_count() > 0 || (strict && result.warning_count() > 0) {
        1
    } else {
        0
    }
}
