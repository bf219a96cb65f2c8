//! Type classification.
//!
//! Decides how a type reference participates in serialization checks:
//! exempt (primitive/known framework type), collection (element checked
//! instead), composite (checked for contract markers), or other
//! (interfaces-as-data, delegates, unresolvable names — no diagnostic).

use caulk_core::model::{DeclKind, Declaration, SemanticModel, TypeRef};

use crate::hierarchy;

/// Primitive value types exempt from contract checks.
const PRIMITIVE_TYPES: &[&str] = &[
    "byte", "sbyte", "short", "int", "long", "ushort", "uint", "ulong", "float", "double", "bool",
    "char", "decimal", "object", "string",
];

/// Framework types the serializer already knows how to handle.
/// (short name, qualified name)
const KNOWN_FRAMEWORK_TYPES: &[(&str, &str)] = &[
    ("DateTime", "System.DateTime"),
    ("DateOnly", "System.DateOnly"),
    ("TimeSpan", "System.TimeSpan"),
    ("Guid", "System.Guid"),
    ("Uri", "System.Uri"),
    ("XmlQualifiedName", "System.Xml.XmlQualifiedName"),
    ("Task", "System.Threading.Tasks.Task"),
];

/// Collection archetypes checked by simple name.
const COLLECTION_TYPES: &[&str] = &[
    "IEnumerable",
    "ICollection",
    "IList",
    "IDictionary",
    "List",
    "Dictionary",
    "HashSet",
    "Queue",
    "Stack",
];

/// The asynchronous-result wrapper unwrapped around actor method returns.
const ASYNC_WRAPPER: &str = "Task";

/// How a type reference participates in serialization checks.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeClass<'m> {
    Primitive,
    KnownFramework,
    /// A collection shape; `None` for non-generic collections, which have
    /// no element to check.
    Collection(Option<TypeRef>),
    Composite(&'m Declaration),
    Other,
}

/// Classify a type reference. Total: every input maps to one variant.
pub fn classify<'m>(model: &'m SemanticModel, ty: &TypeRef) -> TypeClass<'m> {
    let named = match ty {
        TypeRef::Void => return TypeClass::Primitive,
        TypeRef::Array { element } => return TypeClass::Collection(Some((**element).clone())),
        TypeRef::Named(n) => n,
    };

    if PRIMITIVE_TYPES.contains(&named.name.as_str())
        || PRIMITIVE_TYPES.contains(&named.qualified_name.as_str())
    {
        return TypeClass::Primitive;
    }
    if KNOWN_FRAMEWORK_TYPES
        .iter()
        .any(|(short, qualified)| named.name == *short || named.qualified_name == *qualified)
    {
        return TypeClass::KnownFramework;
    }

    let resolved = model.resolve(ty);

    // Enum members are checked by their own rule; the enum type itself
    // needs no type-level marker.
    if matches!(resolved.map(|d| d.kind), Some(DeclKind::Enum)) {
        return TypeClass::KnownFramework;
    }

    if is_collection(model, ty, named.name.as_str()) {
        return TypeClass::Collection(named.args.first().cloned());
    }

    match resolved {
        Some(decl) if matches!(decl.kind, DeclKind::Class | DeclKind::Record) => {
            TypeClass::Composite(decl)
        }
        _ => TypeClass::Other,
    }
}

/// Unwrap the async-result wrapper exactly one level: `Task<T>` → `T`.
/// Non-generic `Task` and everything else pass through unchanged.
pub fn unwrap_async(ty: &TypeRef) -> &TypeRef {
    if let TypeRef::Named(n) = ty {
        if n.name == ASYNC_WRAPPER && n.args.len() == 1 {
            return &n.args[0];
        }
    }
    ty
}

fn is_collection(model: &SemanticModel, ty: &TypeRef, name: &str) -> bool {
    if COLLECTION_TYPES.contains(&name) {
        return true;
    }
    // Any type with an enumerable-of-T capability counts as a collection.
    hierarchy::typeref_transitively_implements(
        model,
        ty,
        "IEnumerable",
        "System.Collections.IEnumerable",
    )
}
