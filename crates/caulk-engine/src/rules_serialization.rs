use caulk_core::config::ContractConfig;
use caulk_core::model::{Accessibility, Declaration, Location, SemanticModel, TypeRef};
use caulk_core::types::RuleId;

use crate::classify::{self, TypeClass};
use crate::markers;
use crate::rules::new_diagnostic;
use crate::types::{Diagnostic, FixTarget};

/// Universal object methods excluded from signature scanning: every type
/// has them and they never cross the actor wire.
const UNIVERSAL_METHODS: &[&str] = &["GetHashCode", "Equals", "ToString", "GetType"];

/// Check A005/A006/A007/A010 over the public instance method signatures of
/// an actor class. Return types are unwrapped through the async-result
/// wrapper exactly one level before classification.
pub fn check_actor_method_types(
    model: &SemanticModel,
    decl: &Declaration,
    config: &ContractConfig,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for method in decl.methods() {
        if method.accessibility != Accessibility::Public || method.is_static {
            continue;
        }
        if UNIVERSAL_METHODS.contains(&method.name.as_str()) {
            continue;
        }

        if let Some(return_type) = &method.ty {
            let unwrapped = classify::unwrap_async(return_type);
            validate_type(
                model,
                config,
                decl,
                unwrapped,
                &method.location,
                &method.name,
                None,
                &mut diagnostics,
            );
        }

        for param in &method.params {
            validate_type(
                model,
                config,
                decl,
                &param.ty,
                &param.location,
                &method.name,
                Some(&param.name),
                &mut diagnostics,
            );
        }
    }

    diagnostics
}

#[allow(clippy::too_many_arguments)]
fn validate_type(
    model: &SemanticModel,
    config: &ContractConfig,
    owner: &Declaration,
    ty: &TypeRef,
    location: &Location,
    method_name: &str,
    param_name: Option<&str>,
    out: &mut Vec<Diagnostic>,
) {
    let site = format!("{}.{}", owner.qualified_name, method_name);

    match classify::classify(model, ty) {
        TypeClass::Primitive | TypeClass::KnownFramework | TypeClass::Other => {}

        TypeClass::Collection(element) => {
            let Some(element) = element else {
                return; // non-generic collections have no element to check
            };
            let TypeClass::Composite(element_decl) = classify::classify(model, &element) else {
                return;
            };
            if !markers::has_contract_marker(&element_decl.markers, config) {
                let mut diagnostic = new_diagnostic(
                    RuleId::A007,
                    format!(
                        "Collection type `{}` in actor method contains elements of type `{}` which needs proper serialization attributes",
                        ty.display_name(),
                        element_decl.name
                    ),
                    &element_decl.name,
                    &site,
                    location,
                    None,
                );
                diagnostic.fix_target = Some(decl_target(element_decl));
                out.push(diagnostic);
            }
            push_ctor_or_contract(config, element_decl, &site, location, out);
        }

        TypeClass::Composite(type_decl) => {
            push_ctor_or_contract(config, type_decl, &site, location, out);

            if !markers::has_contract_marker(&type_decl.markers, config) {
                let (rule, message) = match param_name {
                    Some(param) => (
                        RuleId::A005,
                        format!(
                            "Parameter `{}` of type `{}` in method `{}` should have proper serialization attributes",
                            param, type_decl.name, method_name
                        ),
                    ),
                    None => (
                        RuleId::A006,
                        format!(
                            "Return type `{}` in method `{}` should have proper serialization attributes",
                            type_decl.name, method_name
                        ),
                    ),
                };
                let mut diagnostic = new_diagnostic(
                    rule,
                    message,
                    &type_decl.name,
                    &site,
                    location,
                    Some(format!(
                        "Add [{}] to `{}`",
                        config.contract_marker, type_decl.name
                    )),
                );
                diagnostic.fix_target = Some(decl_target(type_decl));
                out.push(diagnostic);
            }
        }
    }
}

/// A010: a composite reached from an actor method signature must expose a
/// public parameterless constructor or carry the contract marker.
fn push_ctor_or_contract(
    config: &ContractConfig,
    type_decl: &Declaration,
    site: &str,
    location: &Location,
    out: &mut Vec<Diagnostic>,
) {
    if markers::has_contract_marker(&type_decl.markers, config) {
        return;
    }
    if type_decl.has_public_parameterless_ctor() {
        return;
    }
    out.push(new_diagnostic(
        RuleId::A010,
        format!(
            "Type `{}` must either have a public parameterless constructor or be decorated with [{}] for proper serialization",
            type_decl.name, config.contract_marker
        ),
        &type_decl.name,
        site,
        location,
        None,
    ));
}

fn decl_target(decl: &Declaration) -> FixTarget {
    FixTarget {
        file: decl.location.file.clone(),
        span: decl.location.span,
    }
}

/// Check A008: a record must carry the contract marker, and with it the
/// per-member marker on every primary-constructor parameter and public
/// property. All records in the model are checked, not only those reachable
/// from actor method signatures.
pub fn check_record_contract(decl: &Declaration, config: &ContractConfig) -> Vec<Diagnostic> {
    if !markers::has_contract_marker(&decl.markers, config) {
        return vec![new_diagnostic(
            RuleId::A008,
            format!(
                "Record `{}` should be decorated with [{}] and have [{}] attributes on properties for proper actor serialization",
                decl.name, config.contract_marker, config.member_marker
            ),
            &decl.name,
            &decl.qualified_name,
            &decl.location,
            Some(format!(
                "Add [{}] to `{}` and [{}] to its members",
                config.contract_marker, decl.name, config.member_marker
            )),
        )];
    }

    let mut diagnostics = Vec::new();

    // Primary-constructor parameters: the marker lands on the synthesized
    // property, so prefer the property symbol when the host exposes one.
    let mut ctor_param_names: Vec<&str> = Vec::new();
    for ctor in decl.constructors() {
        for param in &ctor.params {
            ctor_param_names.push(param.name.as_str());
            let effective_markers = decl
                .properties()
                .find(|p| p.name == param.name)
                .map(|p| p.markers.as_slice())
                .unwrap_or(param.markers.as_slice());
            if markers::has_member_marker(effective_markers, config) {
                continue;
            }
            diagnostics.push(record_member_diagnostic(decl, config, &param.name, &param.location));
        }
    }

    for property in decl.properties() {
        if property.accessibility != Accessibility::Public {
            continue;
        }
        // A synthesized property shares its parameter's identity; the ctor
        // loop above already reported it.
        if ctor_param_names.contains(&property.name.as_str()) {
            continue;
        }
        if markers::has_member_marker(&property.markers, config) {
            continue;
        }
        diagnostics.push(record_member_diagnostic(
            decl,
            config,
            &property.name,
            &property.location,
        ));
    }

    diagnostics
}

fn record_member_diagnostic(
    decl: &Declaration,
    config: &ContractConfig,
    member_name: &str,
    location: &Location,
) -> Diagnostic {
    let qualified = format!("{}.{}", decl.qualified_name, member_name);
    new_diagnostic(
        RuleId::A008,
        format!(
            "Record `{}` should be decorated with [{}] and have [{}] attributes on properties for proper actor serialization",
            decl.name, config.contract_marker, config.member_marker
        ),
        member_name,
        &qualified,
        location,
        Some(format!("Add [{}] to `{}`", config.member_marker, member_name)),
    )
}
