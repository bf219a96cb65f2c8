//! Inheritance walking.
//!
//! Explicit traversal over the declaration → direct bases/interfaces
//! adjacency view. Every walk carries a visited-set: the host graph is
//! acyclic when well-formed, but in-progress edits can hand us a cycle,
//! and a revisited type ends that branch as "no match" rather than hanging.

use std::collections::HashSet;

use caulk_core::model::{Declaration, NamedType, SemanticModel, TypeRef};

fn name_matches(named: &NamedType, short: &str, qualified: &str) -> bool {
    named.name == short || named.qualified_name == qualified || named.qualified_name == short
}

/// True when the transitive interface closure of `decl` (interfaces of
/// interfaces, not the declaration itself) contains the target.
pub fn transitively_implements(
    model: &SemanticModel,
    decl: &Declaration,
    short: &str,
    qualified: &str,
) -> bool {
    let mut visited = HashSet::new();
    visited.insert(decl.qualified_name.clone());
    decl.interfaces
        .iter()
        .any(|i| interface_closure_contains(model, i, short, qualified, &mut visited))
}

/// True when `ty`'s transitive interface closure (excluding `ty` itself)
/// contains the target. Unresolvable references contribute nothing.
pub fn typeref_transitively_implements(
    model: &SemanticModel,
    ty: &TypeRef,
    short: &str,
    qualified: &str,
) -> bool {
    let Some(named) = ty.as_named() else {
        return false;
    };
    let mut visited = HashSet::new();
    visited.insert(named.qualified_name.clone());
    let Some(decl) = model.resolve(ty) else {
        return false;
    };
    decl.interfaces
        .iter()
        .any(|i| interface_closure_contains(model, i, short, qualified, &mut visited))
}

fn interface_closure_contains(
    model: &SemanticModel,
    ty: &TypeRef,
    short: &str,
    qualified: &str,
    visited: &mut HashSet<String>,
) -> bool {
    let Some(named) = ty.as_named() else {
        return false;
    };
    if name_matches(named, short, qualified) {
        return true;
    }
    if !visited.insert(named.qualified_name.clone()) {
        return false; // revisit: halt this branch
    }
    let Some(decl) = model.resolve(ty) else {
        return false;
    };
    decl.interfaces
        .iter()
        .any(|i| interface_closure_contains(model, i, short, qualified, visited))
}

/// True when the single-inheritance base chain of `decl` contains the target.
pub fn transitively_extends(
    model: &SemanticModel,
    decl: &Declaration,
    short: &str,
    qualified: &str,
) -> bool {
    let mut visited = HashSet::new();
    visited.insert(decl.qualified_name.clone());

    let mut base = decl.base.as_ref();
    while let Some(ty) = base {
        let Some(named) = ty.as_named() else {
            return false;
        };
        if name_matches(named, short, qualified) {
            return true;
        }
        if !visited.insert(named.qualified_name.clone()) {
            return false;
        }
        base = model.resolve(ty).and_then(|d| d.base.as_ref());
    }
    false
}
