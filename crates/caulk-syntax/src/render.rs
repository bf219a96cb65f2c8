//! Text rendering for trees.
//!
//! Produces a canonical C#-like rendering used by fix previews and tests.
//! The renderer is not a formatter for the original source; it exists so
//! two trees can be diffed by a human after a batch of fixes.

use caulk_core::model::{DeclKind, MemberKind};

use crate::tree::{Attribute, SourceTree, TypeNode};

pub fn render(tree: &SourceTree) -> String {
    let mut out = String::new();

    for import in &tree.imports {
        out.push_str(&format!("using {};\n", import.path));
    }
    if !tree.imports.is_empty() {
        out.push('\n');
    }

    for (i, ty) in tree.types.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_type(&mut out, ty);
    }

    out
}

fn render_type(out: &mut String, ty: &TypeNode) {
    for attr in &ty.attributes {
        out.push_str(&format!("[{}]\n", render_attribute(attr)));
    }

    out.push_str(&format!("public {} {}", ty.kind, ty.name));

    if !ty.params.is_empty() {
        let params: Vec<String> = ty
            .params
            .iter()
            .map(|p| {
                let mut s = String::new();
                for attr in &p.attributes {
                    s.push_str(&format!("[{}] ", render_attribute(attr)));
                }
                s.push_str(&format!("{} {}", p.ty, p.name));
                s
            })
            .collect();
        out.push_str(&format!("({})", params.join(", ")));
    }

    if !ty.bases.is_empty() {
        out.push_str(&format!(" : {}", ty.bases.join(", ")));
    }

    if ty.members.is_empty() {
        out.push_str(";\n");
        return;
    }

    out.push_str("\n{\n");
    for member in &ty.members {
        for attr in &member.attributes {
            out.push_str(&format!("    [{}]\n", render_attribute(attr)));
        }
        match member.kind {
            MemberKind::EnumMember => out.push_str(&format!("    {},\n", member.name)),
            MemberKind::Property => out.push_str(&format!("    {} {{ get; set; }}\n", member.name)),
            MemberKind::Method => out.push_str(&format!("    {}();\n", member.name)),
            MemberKind::Constructor => out.push_str(&format!("    {}();\n", member.name)),
        }
    }
    out.push_str("}\n");

    // Enum renders with a body even though members are comma-separated
    debug_assert!(ty.kind != DeclKind::Enum || ty.params.is_empty());
}

fn render_attribute(attr: &Attribute) -> String {
    let mut s = String::new();
    if let Some(target) = &attr.target {
        s.push_str(&format!("{target}: "));
    }
    s.push_str(&attr.name);
    if let Some(arg) = &attr.argument {
        s.push_str(&format!("(\"{arg}\")"));
    }
    s
}
