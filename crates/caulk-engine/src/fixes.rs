//! Fix synthesis.
//!
//! Every fix is a pure function `(tree, target span) → new tree`. A target
//! that doesn't match the expected node shape returns the input unchanged,
//! which is how a fix signals "not applicable" — there is no error path.
//! Marker-introducing fixes also ensure the defining import is present.

use caulk_core::config::ContractConfig;
use caulk_core::model::{DeclKind, MemberKind, Span};
use caulk_core::types::RuleId;
use caulk_syntax::edit;
use caulk_syntax::tree::{Attribute, NodeRef, SourceTree};

use crate::rules::lower_camel_case;
use crate::types::Diagnostic;

/// Synthesize the fix for one rule at one node. Pure: identical inputs
/// always produce identical output, so a fix-all driver can batch calls.
pub fn synthesize(
    rule: RuleId,
    tree: &SourceTree,
    target: Span,
    config: &ContractConfig,
) -> SourceTree {
    match rule {
        RuleId::A001 => fix_add_actor_interface(tree, target, config),
        RuleId::A002 => fix_add_enum_marker(tree, target, config),
        RuleId::A003 => fix_add_naming_marker(tree, target, config),
        RuleId::A004 | RuleId::A005 | RuleId::A006 => fix_add_contract_marker(tree, target, config),
        RuleId::A008 => fix_record_contract(tree, target, config),
        // A007/A009/A010 have no synthesized fix
        _ => tree.clone(),
    }
}

/// Host-facing wrapper: apply the fix for one diagnostic to one tree.
/// Uses the diagnostic's fix target when it names a different node than
/// the diagnostic site, and no-ops on trees for other files.
pub fn run_fix(diagnostic: &Diagnostic, tree: &SourceTree, config: &ContractConfig) -> SourceTree {
    let (file, span) = match &diagnostic.fix_target {
        Some(target) => (target.file.as_str(), target.span),
        None => (diagnostic.file.as_str(), diagnostic.span),
    };
    if tree.file != file {
        return tree.clone();
    }
    synthesize(diagnostic.rule, tree, span, config)
}

/// A001: append the actor marker interface to the interface's base list.
fn fix_add_actor_interface(tree: &SourceTree, target: Span, config: &ContractConfig) -> SourceTree {
    match tree.find_node(target) {
        Some(NodeRef::Type(ty)) if ty.kind == DeclKind::Interface => {
            let edited = edit::add_base(tree, target, &config.actor_interface);
            edit::ensure_import(&edited, &config.actor_import)
        }
        _ => tree.clone(),
    }
}

/// A002: attach the enum-serialization marker to the enum member.
fn fix_add_enum_marker(tree: &SourceTree, target: Span, config: &ContractConfig) -> SourceTree {
    match tree.find_node(target) {
        Some(NodeRef::Member(_, member)) if member.kind == MemberKind::EnumMember => {
            let edited =
                edit::add_member_attribute(tree, target, Attribute::simple(&config.enum_marker));
            edit::ensure_import(&edited, &config.serialization_import)
        }
        _ => tree.clone(),
    }
}

/// A003: attach the naming marker with the property name lower-camel-cased.
fn fix_add_naming_marker(tree: &SourceTree, target: Span, config: &ContractConfig) -> SourceTree {
    match tree.find_node(target) {
        Some(NodeRef::Member(_, member)) if member.kind == MemberKind::Property => {
            let attr =
                Attribute::with_argument(&config.naming_marker, &lower_camel_case(&member.name));
            let edited = edit::add_member_attribute(tree, target, attr);
            edit::ensure_import(&edited, &config.naming_import)
        }
        _ => tree.clone(),
    }
}

/// A004/A005/A006 shared fix: attach the type-level contract marker to the
/// offending class or record declaration.
fn fix_add_contract_marker(tree: &SourceTree, target: Span, config: &ContractConfig) -> SourceTree {
    match tree.find_node(target) {
        Some(NodeRef::Type(ty)) if matches!(ty.kind, DeclKind::Class | DeclKind::Record) => {
            let edited =
                edit::add_type_attribute(tree, target, Attribute::simple(&config.contract_marker));
            edit::ensure_import(&edited, &config.serialization_import)
        }
        _ => tree.clone(),
    }
}

/// A008: attach the contract marker to the record and the per-member marker
/// to every primary-constructor parameter and property still lacking it.
/// The member marker is scoped to the synthesized property, not the raw
/// constructor parameter. Idempotent: marked members are skipped.
fn fix_record_contract(tree: &SourceTree, target: Span, config: &ContractConfig) -> SourceTree {
    match tree.find_node(target) {
        Some(NodeRef::Type(ty)) if ty.kind == DeclKind::Record => {
            // Edits never recompute spans, so targets collected from the
            // input tree stay valid on the edited copies.
            let param_spans: Vec<Span> = ty
                .params
                .iter()
                .filter(|p| !p.has_attribute(&config.member_marker))
                .map(|p| p.span)
                .collect();
            let property_spans: Vec<Span> = ty
                .members
                .iter()
                .filter(|m| m.kind == MemberKind::Property && !m.has_attribute(&config.member_marker))
                .map(|m| m.span)
                .collect();

            let mut edited =
                edit::add_type_attribute(tree, target, Attribute::simple(&config.contract_marker));

            for span in param_spans {
                edited = edit::add_param_attribute(
                    &edited,
                    span,
                    Attribute::targeted(&config.member_marker, "property"),
                );
            }
            for span in property_spans {
                edited = edit::add_member_attribute(
                    &edited,
                    span,
                    Attribute::simple(&config.member_marker),
                );
            }
            edit::ensure_import(&edited, &config.serialization_import)
        }
        // A member-level A008 targets one parameter or property directly.
        Some(NodeRef::Param(_, _)) => {
            let edited = edit::add_param_attribute(
                tree,
                target,
                Attribute::targeted(&config.member_marker, "property"),
            );
            edit::ensure_import(&edited, &config.serialization_import)
        }
        Some(NodeRef::Member(_, member)) if member.kind == MemberKind::Property => {
            let edited = edit::add_member_attribute(
                tree,
                target,
                Attribute::simple(&config.member_marker),
            );
            edit::ensure_import(&edited, &config.serialization_import)
        }
        _ => tree.clone(),
    }
}

#[cfg(test)]
#[path = "fixes_tests.rs"]
mod tests;
