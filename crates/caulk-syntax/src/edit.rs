//! Pure, span-targeted edit primitives.
//!
//! Every function clones the input tree and returns a new one. A span that
//! matches no node of the expected shape is a no-op: the returned tree
//! compares equal to the input, which is how callers observe "fix not
//! applicable". Attribute insertions are idempotent by attribute name.

use caulk_core::model::Span;

use crate::tree::{Attribute, SourceTree};

/// Append an import if no import with the exact same path exists.
pub fn ensure_import(tree: &SourceTree, path: &str) -> SourceTree {
    let mut out = tree.clone();
    if !out.has_import(path) {
        out.imports.push(crate::tree::Import {
            path: path.to_string(),
        });
    }
    out
}

/// Attach an attribute to the type declaration with the given span.
pub fn add_type_attribute(tree: &SourceTree, span: Span, attr: Attribute) -> SourceTree {
    let mut out = tree.clone();
    if let Some(ty) = out.types.iter_mut().find(|t| t.span == span) {
        if !ty.attributes.iter().any(|a| a.name == attr.name) {
            ty.attributes.push(attr);
        }
    }
    out
}

/// Attach an attribute to the member with the given span.
pub fn add_member_attribute(tree: &SourceTree, span: Span, attr: Attribute) -> SourceTree {
    let mut out = tree.clone();
    for ty in &mut out.types {
        if let Some(member) = ty.members.iter_mut().find(|m| m.span == span) {
            if !member.attributes.iter().any(|a| a.name == attr.name) {
                member.attributes.push(attr);
            }
            return out;
        }
    }
    out
}

/// Attach an attribute to the primary-constructor parameter with the given span.
pub fn add_param_attribute(tree: &SourceTree, span: Span, attr: Attribute) -> SourceTree {
    let mut out = tree.clone();
    for ty in &mut out.types {
        if let Some(param) = ty.params.iter_mut().find(|p| p.span == span) {
            if !param.attributes.iter().any(|a| a.name == attr.name) {
                param.attributes.push(attr);
            }
            return out;
        }
    }
    out
}

/// Append a base type to the type declaration with the given span,
/// creating the base list when absent.
pub fn add_base(tree: &SourceTree, span: Span, base: &str) -> SourceTree {
    let mut out = tree.clone();
    if let Some(ty) = out.types.iter_mut().find(|t| t.span == span) {
        if !ty.has_base(base) {
            ty.bases.push(base.to_string());
        }
    }
    out
}
