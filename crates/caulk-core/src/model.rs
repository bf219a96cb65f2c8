//! The host-supplied semantic model.
//!
//! A [`SemanticModel`] is a read-only view of the declarations in one
//! analyzed compilation unit: interfaces, classes, enums, and records,
//! with their members, attached markers, and resolved type references.
//! The model is immutable for the duration of one analysis pass.

use serde::{Deserialize, Serialize};

/// Index of a declaration within its [`SemanticModel`], in discovery order.
pub type DeclId = usize;

/// Declaration kinds handled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Interface,
    Class,
    Enum,
    Record,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Interface => "interface",
            DeclKind::Class => "class",
            DeclKind::Enum => "enum",
            DeclKind::Record => "record",
        }
    }
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member kinds owned by a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Method,
    Property,
    EnumMember,
    Constructor,
}

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Public,
    Internal,
    Private,
}

/// Byte range in the original source, as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Source position of a declaration or member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub span: Span,
}

impl Location {
    pub fn new(file: &str, line: u32, span: Span) -> Self {
        Self {
            file: file.to_string(),
            line,
            span,
        }
    }
}

/// A declarative metadata marker attached to a symbol (an attribute).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    pub qualified_name: String,
}

impl Marker {
    pub fn new(name: &str, qualified_name: &str) -> Self {
        Self {
            name: name.to_string(),
            qualified_name: qualified_name.to_string(),
        }
    }
}

/// A resolved reference to a type, with ordered generic arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "ref", rename_all = "snake_case")]
pub enum TypeRef {
    Void,
    Named(NamedType),
    Array { element: Box<TypeRef> },
}

/// A named type reference. `decl` is set when the host resolved the name
/// to a declaration inside the model; framework types leave it unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub args: Vec<TypeRef>,
    #[serde(default)]
    pub decl: Option<DeclId>,
}

impl TypeRef {
    pub fn named(name: &str, qualified_name: &str) -> Self {
        TypeRef::Named(NamedType {
            name: name.to_string(),
            qualified_name: qualified_name.to_string(),
            args: vec![],
            decl: None,
        })
    }

    pub fn generic(name: &str, qualified_name: &str, args: Vec<TypeRef>) -> Self {
        TypeRef::Named(NamedType {
            name: name.to_string(),
            qualified_name: qualified_name.to_string(),
            args,
            decl: None,
        })
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    /// Simple name for diagnostic messages (`List`, `WeatherForecast[]`, `void`).
    pub fn display_name(&self) -> String {
        match self {
            TypeRef::Void => "void".to_string(),
            TypeRef::Named(n) => n.name.clone(),
            TypeRef::Array { element } => format!("{}[]", element.display_name()),
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            TypeRef::Named(n) => Some(n),
            _ => None,
        }
    }
}

/// A parameter of a method or of a record's primary constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default)]
    pub markers: Vec<Marker>,
    pub location: Location,
}

/// A member owned by exactly one declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    /// Return type for methods, declared type for properties. None for
    /// constructors and enum members.
    #[serde(default)]
    pub ty: Option<TypeRef>,
    #[serde(default)]
    pub params: Vec<Param>,
    pub accessibility: Accessibility,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
    pub location: Location,
}

/// A named type definition. Identity is qualified name + location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub qualified_name: String,
    pub kind: DeclKind,
    /// Base class for single-inheritance chains. Interfaces never set this.
    #[serde(default)]
    pub base: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    pub location: Location,
}

impl Declaration {
    pub fn methods(&self) -> impl Iterator<Item = &Member> {
        self.members.iter().filter(|m| m.kind == MemberKind::Method)
    }

    pub fn properties(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Property)
    }

    pub fn constructors(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|m| m.kind == MemberKind::Constructor)
    }

    /// True when the type exposes a public parameterless constructor. A class
    /// or record that declares no constructors gets the implicit one.
    pub fn has_public_parameterless_ctor(&self) -> bool {
        let mut declared_any = false;
        for ctor in self.constructors() {
            declared_any = true;
            if ctor.accessibility == Accessibility::Public && ctor.params.is_empty() {
                return true;
            }
        }
        !declared_any && matches!(self.kind, DeclKind::Class | DeclKind::Record)
    }
}

/// The read-only semantic model for one analysis pass.
///
/// Declarations are kept in host discovery order; diagnostic ordering is
/// derived from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SemanticModel {
    pub declarations: Vec<Declaration>,
}

impl SemanticModel {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn declaration(&self, id: DeclId) -> Option<&Declaration> {
        self.declarations.get(id)
    }

    pub fn by_qualified_name(&self, qualified_name: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.qualified_name == qualified_name)
    }

    /// Resolve a type reference to a declaration in this model. Framework
    /// and unresolved types return None.
    pub fn resolve(&self, ty: &TypeRef) -> Option<&Declaration> {
        let named = ty.as_named()?;
        if let Some(id) = named.decl {
            return self.declaration(id);
        }
        self.by_qualified_name(&named.qualified_name)
    }
}
