use std::collections::BTreeMap;
use std::path::Path;

use caulk_core::config::CaulkConfig;
use caulk_core::types::RuleId;
use caulk_engine::engine::{AnalysisEngine, ENGINE_VERSION};
use caulk_engine::fixes::run_fix;
use caulk_engine::types::{Diagnostic, FixOutcome, FixResult};
use caulk_output::OutputFormatter;
use caulk_syntax::render::render;
use caulk_syntax::tree::SourceTree;

use crate::snapshot::Snapshot;

/// Run `caulk fix <snapshot>` — the fix-all driver.
///
/// Groups fixable diagnostics by the file their fix edits, applies them in
/// location order on that file's tree, and reports one outcome per
/// diagnostic. Without --write, prints the summary only.
pub fn run(
    formatter: &dyn OutputFormatter,
    verbose: bool,
    snapshot: String,
    write: bool,
    rules: Vec<String>,
) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("caulk fix: failed to get current directory: {}", e);
            return 2;
        }
    };

    let mut rule_filter = Vec::new();
    for code in &rules {
        match RuleId::from_code(code) {
            Some(rule) => rule_filter.push(rule),
            None => {
                eprintln!("caulk fix: unknown rule code: {}", code);
                return 2;
            }
        }
    }

    let snapshot = match Snapshot::load(Path::new(&snapshot)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("caulk fix: {}", e);
            return 2;
        }
    };

    let config = CaulkConfig::load(&cwd.join(".caulk"));
    let engine = AnalysisEngine::new(config);
    let analysis = engine.analyze_parallel(&snapshot.model);

    let candidates: Vec<&Diagnostic> = analysis
        .diagnostics
        .iter()
        .filter(|d| d.fix_available)
        .filter(|d| rule_filter.is_empty() || rule_filter.contains(&d.rule))
        .collect();

    // Group by the file the fix edits, in location order within each file.
    let mut by_file: BTreeMap<&str, Vec<&Diagnostic>> = BTreeMap::new();
    for d in &candidates {
        by_file.entry(fix_file(d)).or_default().push(*d);
    }
    for group in by_file.values_mut() {
        group.sort_by_key(|d| fix_span_start(d));
    }

    let mut outcomes = Vec::new();
    let mut fixed_trees: BTreeMap<String, SourceTree> = BTreeMap::new();
    let mut fixes_applied = 0u32;
    let mut fixes_skipped = 0u32;

    for (file, group) in &by_file {
        let Some(original) = snapshot.trees.get(*file) else {
            for d in group {
                fixes_skipped += 1;
                outcomes.push(outcome(d, false, format!("no syntax tree for {}", file)));
            }
            continue;
        };

        let mut tree = original.clone();
        for d in group {
            let edited = run_fix(d, &tree, &engine.config().contract);
            if edited == tree {
                fixes_skipped += 1;
                outcomes.push(outcome(d, false, "fix did not apply".to_string()));
            } else {
                fixes_applied += 1;
                let description = d
                    .fix_hint
                    .clone()
                    .unwrap_or_else(|| format!("applied {} fix", d.rule));
                outcomes.push(outcome(d, true, description));
                tree = edited;
            }
        }

        if tree != *original {
            fixed_trees.insert((*file).to_string(), tree);
        }
    }

    let result = FixResult {
        version: ENGINE_VERSION.to_string(),
        command: "fix".to_string(),
        fixes_applied,
        fixes_skipped,
        files_affected: fixed_trees.keys().cloned().collect(),
        outcomes,
    };

    if write {
        for (file, tree) in &fixed_trees {
            let path = cwd.join(file);
            if let Err(e) = std::fs::write(&path, render(tree)) {
                eprintln!("caulk fix: failed to write {}: {}", path.display(), e);
                return 2;
            }
        }
    }

    if verbose {
        eprintln!(
            "caulk fix: {} applied, {} skipped in {} file(s)",
            fixes_applied,
            fixes_skipped,
            result.files_affected.len(),
        );
    }

    let output = formatter.format_fixes(&result);
    if !output.is_empty() {
        print!("{}", output);
    }
    0
}

fn fix_file(d: &Diagnostic) -> &str {
    match &d.fix_target {
        Some(target) => &target.file,
        None => &d.file,
    }
}

fn fix_span_start(d: &Diagnostic) -> u32 {
    match &d.fix_target {
        Some(target) => target.span.start,
        None => d.span.start,
    }
}

fn outcome(d: &Diagnostic, applied: bool, description: String) -> FixOutcome {
    FixOutcome {
        code: d.rule.code().to_string(),
        file: fix_file(d).to_string(),
        symbol: d.symbol.clone(),
        applied,
        description,
    }
}
