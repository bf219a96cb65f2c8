use serde::{Deserialize, Serialize};

use caulk_core::model::{DeclKind, MemberKind, Span};

/// One analyzed file as a structured tree: imports followed by type
/// declarations. Node spans are byte offsets into the original source and
/// are never recomputed by edits, so a span recorded in a diagnostic stays
/// valid across attribute insertions in the same file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTree {
    pub file: String,
    #[serde(default)]
    pub imports: Vec<Import>,
    #[serde(default)]
    pub types: Vec<TypeNode>,
}

/// An import (using) directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
}

/// A type declaration node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeNode {
    pub kind: DeclKind,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Base types and implemented interfaces, in declaration order.
    #[serde(default)]
    pub bases: Vec<String>,
    /// Primary constructor parameters (records).
    #[serde(default)]
    pub params: Vec<ParamNode>,
    #[serde(default)]
    pub members: Vec<MemberNode>,
    pub span: Span,
}

/// A member node (method, property, enum member, constructor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberNode {
    pub kind: MemberKind,
    pub name: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// A primary-constructor parameter node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamNode {
    pub name: String,
    pub ty: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

/// An attribute node, optionally targeted (`[property: DataMember]`) and
/// optionally carrying one literal argument (`[JsonPropertyName("date")]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub argument: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

impl Attribute {
    pub fn simple(name: &str) -> Self {
        Self {
            name: name.to_string(),
            argument: None,
            target: None,
        }
    }

    pub fn with_argument(name: &str, argument: &str) -> Self {
        Self {
            name: name.to_string(),
            argument: Some(argument.to_string()),
            target: None,
        }
    }

    pub fn targeted(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            argument: None,
            target: Some(target.to_string()),
        }
    }
}

/// A node located by span inside a tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Type(&'a TypeNode),
    Member(&'a TypeNode, &'a MemberNode),
    Param(&'a TypeNode, &'a ParamNode),
}

impl SourceTree {
    pub fn new(file: &str) -> Self {
        Self {
            file: file.to_string(),
            imports: vec![],
            types: vec![],
        }
    }

    pub fn has_import(&self, path: &str) -> bool {
        self.imports.iter().any(|i| i.path == path)
    }

    /// Locate the node whose span exactly matches `span`. Member and
    /// parameter spans take precedence over their enclosing type so fixes
    /// target the narrowest node the diagnostic pointed at.
    pub fn find_node(&self, span: Span) -> Option<NodeRef<'_>> {
        for ty in &self.types {
            for member in &ty.members {
                if member.span == span {
                    return Some(NodeRef::Member(ty, member));
                }
            }
            for param in &ty.params {
                if param.span == span {
                    return Some(NodeRef::Param(ty, param));
                }
            }
            if ty.span == span {
                return Some(NodeRef::Type(ty));
            }
        }
        None
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeNode> {
        self.types.iter().find(|t| t.name == name)
    }
}

impl TypeNode {
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn has_base(&self, name: &str) -> bool {
        self.bases.iter().any(|b| b == name)
    }
}

impl MemberNode {
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }
}

impl ParamNode {
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }
}
