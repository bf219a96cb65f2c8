use rayon::prelude::*;

use caulk_core::config::CaulkConfig;
use caulk_core::model::{DeclKind, Declaration, SemanticModel};
use caulk_core::types::Severity;

use crate::rules;
use crate::types::{AnalysisResult, Diagnostic};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core analysis engine. Owns the configuration and dispatches the rule
/// detectors over each declaration of a semantic model.
pub struct AnalysisEngine {
    config: CaulkConfig,
}

impl AnalysisEngine {
    pub fn new(config: CaulkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaulkConfig {
        &self.config
    }

    /// Analyze one semantic model. Sole entry point for a pass; diagnostics
    /// are ordered by declaration discovery order, then rule code.
    pub fn analyze(&self, model: &SemanticModel) -> AnalysisResult {
        let mut diagnostics = Vec::new();
        for decl in &model.declarations {
            diagnostics.extend(self.analyze_declaration(model, decl));
        }
        self.into_result(model, diagnostics)
    }

    /// Parallel variant: declarations are independent, so the pass is a
    /// map with a deterministic fan-in. Produces output identical to
    /// [`analyze`](Self::analyze).
    pub fn analyze_parallel(&self, model: &SemanticModel) -> AnalysisResult {
        let mut indexed: Vec<(usize, Vec<Diagnostic>)> = model
            .declarations
            .par_iter()
            .enumerate()
            .map(|(idx, decl)| (idx, self.analyze_declaration(model, decl)))
            .collect();
        indexed.sort_by_key(|(idx, _)| *idx);

        let diagnostics = indexed.into_iter().flat_map(|(_, d)| d).collect();
        self.into_result(model, diagnostics)
    }

    /// Run every applicable detector for one declaration. Detectors share
    /// no state and their evaluation order is irrelevant; within one
    /// declaration the output is sorted by rule code.
    fn analyze_declaration(&self, model: &SemanticModel, decl: &Declaration) -> Vec<Diagnostic> {
        let contract = &self.config.contract;
        let enforce = &self.config.enforce;
        let mut diagnostics = Vec::new();

        match decl.kind {
            DeclKind::Interface => {
                if enforce.interfaces {
                    diagnostics.extend(rules::check_actor_interface_decl(model, decl, contract));
                }
            }
            DeclKind::Class => {
                // Actor checks apply only to classes extending the actor base.
                if crate::hierarchy::transitively_extends(
                    model,
                    decl,
                    &contract.actor_base,
                    &contract.actor_base_qualified,
                ) {
                    if enforce.interfaces {
                        diagnostics.extend(rules::check_class_actor_interfaces(model, decl, contract));
                        diagnostics.extend(rules::check_actor_class_membership(model, decl, contract));
                    }
                    if enforce.serialization {
                        diagnostics.extend(rules::check_actor_method_types(model, decl, contract));
                    }
                    if enforce.naming {
                        diagnostics.extend(rules::check_actor_class_properties(decl, contract));
                    }
                }
            }
            DeclKind::Enum => {
                if enforce.serialization {
                    diagnostics.extend(rules::check_enum_members(decl, contract));
                }
            }
            DeclKind::Record => {
                if enforce.serialization {
                    diagnostics.extend(rules::check_record_contract(decl, contract));
                }
            }
        }

        diagnostics.sort_by_key(|d| d.rule);
        diagnostics
    }

    fn into_result(&self, model: &SemanticModel, diagnostics: Vec<Diagnostic>) -> AnalysisResult {
        let status = if diagnostics.iter().any(|d| d.severity == Severity::Error) {
            "error"
        } else if diagnostics.iter().any(|d| d.severity == Severity::Warning) {
            "warning"
        } else {
            "ok"
        };

        AnalysisResult {
            version: ENGINE_VERSION.to_string(),
            command: "check".to_string(),
            status: status.to_string(),
            declarations_analyzed: model
                .declarations
                .iter()
                .map(|d| d.qualified_name.clone())
                .collect(),
            diagnostics,
        }
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(CaulkConfig::default())
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
