use caulk_core::config::ContractConfig;
use caulk_core::model::{Declaration, Location, Member, MemberKind, SemanticModel};
use caulk_core::types::RuleId;

use crate::hierarchy;
use crate::markers;
use crate::types::{Diagnostic, FixTarget};

// Re-export the serialization checkers so engine.rs keeps using rules::*
pub use crate::rules_serialization::{check_actor_method_types, check_record_contract};

pub(crate) fn new_diagnostic(
    rule: RuleId,
    message: String,
    symbol: &str,
    qualified_symbol: &str,
    location: &Location,
    fix_hint: Option<String>,
) -> Diagnostic {
    Diagnostic {
        rule,
        severity: rule.severity(),
        category: rule.category().to_string(),
        message,
        file: location.file.clone(),
        line: location.line,
        span: location.span,
        symbol: symbol.to_string(),
        hash: caulk_core::hash::symbol_hash(qualified_symbol, location),
        fix_available: fix_hint.is_some(),
        fix_hint,
        fix_target: None,
    }
}

/// Check A001 at the interface declaration: an interface whose name carries
/// the actor contract suffix must transitively implement the actor marker.
pub fn check_actor_interface_decl(
    model: &SemanticModel,
    decl: &Declaration,
    config: &ContractConfig,
) -> Vec<Diagnostic> {
    if !decl.name.ends_with(&config.actor_suffix) {
        return vec![];
    }
    if hierarchy::transitively_implements(
        model,
        decl,
        &config.actor_interface,
        &config.actor_interface_qualified,
    ) {
        return vec![];
    }

    vec![new_diagnostic(
        RuleId::A001,
        format!(
            "Interface `{}` used by an actor class should inherit from {}",
            decl.name, config.actor_interface
        ),
        &decl.name,
        &decl.qualified_name,
        &decl.location,
        Some(format!(
            "Add {} to the base list of `{}`",
            config.actor_interface, decl.name
        )),
    )]
}

/// Check A001 at the implementing class: every actor-suffixed interface the
/// class lists must transitively implement the actor marker. Fires once per
/// broken interface, at the class site; the interface declaration reports
/// its own copy.
pub fn check_class_actor_interfaces(
    model: &SemanticModel,
    decl: &Declaration,
    config: &ContractConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for interface in &decl.interfaces {
        let Some(named) = interface.as_named() else {
            continue;
        };
        if !named.name.ends_with(&config.actor_suffix) {
            continue;
        }
        // The marker interface itself carries the suffix; it is not broken.
        if named.name == config.actor_interface
            || named.qualified_name == config.actor_interface_qualified
        {
            continue;
        }
        // Unresolvable interfaces are a model inconsistency: skip silently.
        if model.resolve(interface).is_none() {
            continue;
        }
        if hierarchy::typeref_transitively_implements(
            model,
            interface,
            &config.actor_interface,
            &config.actor_interface_qualified,
        ) {
            continue;
        }

        let mut diagnostic = new_diagnostic(
            RuleId::A001,
            format!(
                "Interface `{}` used by an actor class should inherit from {}",
                named.name, config.actor_interface
            ),
            &named.name,
            &decl.qualified_name,
            &decl.location,
            Some(format!(
                "Add {} to the base list of `{}`",
                config.actor_interface, named.name
            )),
        );
        // The fix edits the interface declaration, not the class site.
        if let Some(target) = model.resolve(interface) {
            diagnostic.fix_target = Some(FixTarget {
                file: target.location.file.clone(),
                span: target.location.span,
            });
        }
        diagnostics.push(diagnostic);
    }

    diagnostics
}

/// Check A009: an actor class must implement at least one interface that
/// transitively implements the actor marker interface.
pub fn check_actor_class_membership(
    model: &SemanticModel,
    decl: &Declaration,
    config: &ContractConfig,
) -> Vec<Diagnostic> {
    let implements_marker = decl.interfaces.iter().any(|i| {
        hierarchy::typeref_transitively_implements(
            model,
            i,
            &config.actor_interface,
            &config.actor_interface_qualified,
        )
    });
    if implements_marker {
        return vec![];
    }

    vec![new_diagnostic(
        RuleId::A009,
        format!(
            "Actor class `{}` should implement an interface that inherits from {}",
            decl.name, config.actor_interface
        ),
        &decl.name,
        &decl.qualified_name,
        &decl.location,
        None,
    )]
}

/// Check A002: every enum member needs the enum-serialization marker so the
/// value serializes under a stable name instead of an ordinal.
pub fn check_enum_members(decl: &Declaration, config: &ContractConfig) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for member in &decl.members {
        if member.kind != MemberKind::EnumMember {
            continue;
        }
        if markers::has_enum_marker(&member.markers, config) {
            continue;
        }
        diagnostics.push(member_diagnostic(
            RuleId::A002,
            format!(
                "Enum member `{}` in enum `{}` should be decorated with [{}] for proper serialization",
                member.name, decl.name, config.enum_marker
            ),
            decl,
            member,
            Some(format!("Add [{}] to `{}`", config.enum_marker, member.name)),
        ));
    }

    diagnostics
}

/// Check A003: properties on an actor-implementing class should carry the
/// advisory naming marker for consistent wire names with weakly-typed clients.
pub fn check_actor_class_properties(
    decl: &Declaration,
    config: &ContractConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for member in decl.properties() {
        if member.is_static {
            continue;
        }
        if markers::has_naming_marker(&member.markers, config) {
            continue;
        }
        diagnostics.push(member_diagnostic(
            RuleId::A003,
            format!(
                "Property `{}` in actor class `{}` should consider using [{}] for consistent naming",
                member.name, decl.name, config.naming_marker
            ),
            decl,
            member,
            Some(format!(
                "Add [{}(\"{}\")] to `{}`",
                config.naming_marker,
                lower_camel_case(&member.name),
                member.name
            )),
        ));
    }

    diagnostics
}

fn member_diagnostic(
    rule: RuleId,
    message: String,
    decl: &Declaration,
    member: &Member,
    fix_hint: Option<String>,
) -> Diagnostic {
    let qualified = format!("{}.{}", decl.qualified_name, member.name);
    new_diagnostic(rule, message, &member.name, &qualified, &member.location, fix_hint)
}

/// Lower the first character only: `TemperatureC` → `temperatureC`.
pub fn lower_camel_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
