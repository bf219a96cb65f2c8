//! Shared test helpers for all caulk integration tests.
//!
//! Import from any integration test file with:
//!   `#[path = "common/mod.rs"] mod common;`

use caulk_core::config::CaulkConfig;
use caulk_core::model::{
    Accessibility, DeclKind, Declaration, Location, Marker, Member, MemberKind, Param,
    SemanticModel, Span, TypeRef,
};
use caulk_engine::engine::AnalysisEngine;
use caulk_engine::types::AnalysisResult;

#[allow(dead_code)]
pub fn engine() -> AnalysisEngine {
    AnalysisEngine::new(CaulkConfig::default())
}

#[allow(dead_code)]
pub fn codes(result: &AnalysisResult) -> Vec<&'static str> {
    result.diagnostics.iter().map(|d| d.rule.code()).collect()
}

pub fn loc(file: &str, line: u32) -> Location {
    Location::new(file, line, Span::new(line * 100, line * 100 + 50))
}

// --- Markers ------------------------------------------------------------

#[allow(dead_code)]
pub fn data_contract() -> Marker {
    Marker::new("DataContract", "System.Runtime.Serialization.DataContractAttribute")
}

#[allow(dead_code)]
pub fn data_member() -> Marker {
    Marker::new("DataMember", "System.Runtime.Serialization.DataMemberAttribute")
}

#[allow(dead_code)]
pub fn enum_member() -> Marker {
    Marker::new("EnumMember", "System.Runtime.Serialization.EnumMemberAttribute")
}

#[allow(dead_code)]
pub fn json_property_name() -> Marker {
    Marker::new(
        "JsonPropertyName",
        "System.Text.Json.Serialization.JsonPropertyNameAttribute",
    )
}

// --- Type references -----------------------------------------------------

#[allow(dead_code)]
pub fn iactor() -> TypeRef {
    TypeRef::named("IActor", "Dapr.Actors.IActor")
}

#[allow(dead_code)]
pub fn actor_base() -> TypeRef {
    TypeRef::named("Actor", "Dapr.Actors.Runtime.Actor")
}

#[allow(dead_code)]
pub fn tref(name: &str) -> TypeRef {
    TypeRef::named(name, &format!("Test.{name}"))
}

#[allow(dead_code)]
pub fn task_of(inner: TypeRef) -> TypeRef {
    TypeRef::generic("Task", "System.Threading.Tasks.Task", vec![inner])
}

#[allow(dead_code)]
pub fn list_of(inner: TypeRef) -> TypeRef {
    TypeRef::generic("List", "System.Collections.Generic.List", vec![inner])
}

// --- Declarations ---------------------------------------------------------

#[allow(dead_code)]
pub fn interface(name: &str, interfaces: Vec<TypeRef>) -> Declaration {
    Declaration {
        name: name.to_string(),
        qualified_name: format!("Test.{name}"),
        kind: DeclKind::Interface,
        base: None,
        interfaces,
        members: vec![],
        markers: vec![],
        location: loc(&format!("src/{name}.cs"), 1),
    }
}

#[allow(dead_code)]
pub fn actor_class(name: &str, interfaces: Vec<TypeRef>, members: Vec<Member>) -> Declaration {
    Declaration {
        name: name.to_string(),
        qualified_name: format!("Test.{name}"),
        kind: DeclKind::Class,
        base: Some(actor_base()),
        interfaces,
        members,
        markers: vec![],
        location: loc(&format!("src/{name}.cs"), 2),
    }
}

#[allow(dead_code)]
pub fn plain_class(name: &str, markers: Vec<Marker>) -> Declaration {
    Declaration {
        name: name.to_string(),
        qualified_name: format!("Test.{name}"),
        kind: DeclKind::Class,
        base: None,
        interfaces: vec![],
        members: vec![],
        markers,
        location: loc(&format!("src/{name}.cs"), 3),
    }
}

#[allow(dead_code)]
pub fn enum_decl(name: &str, members: Vec<(&str, Vec<Marker>)>) -> Declaration {
    let members = members
        .into_iter()
        .enumerate()
        .map(|(i, (mname, markers))| Member {
            name: mname.to_string(),
            kind: MemberKind::EnumMember,
            ty: None,
            params: vec![],
            accessibility: Accessibility::Public,
            is_static: false,
            markers,
            location: loc(&format!("src/{name}.cs"), 10 + i as u32),
        })
        .collect();
    Declaration {
        name: name.to_string(),
        qualified_name: format!("Test.{name}"),
        kind: DeclKind::Enum,
        base: None,
        interfaces: vec![],
        members,
        markers: vec![],
        location: loc(&format!("src/{name}.cs"), 4),
    }
}

/// A record modeled the way a host frontend exports primary constructors:
/// one constructor member whose params carry the member markers.
#[allow(dead_code)]
pub fn record_decl(
    name: &str,
    markers: Vec<Marker>,
    params: Vec<(&str, TypeRef, Vec<Marker>)>,
) -> Declaration {
    let params: Vec<Param> = params
        .into_iter()
        .enumerate()
        .map(|(i, (pname, ty, markers))| Param {
            name: pname.to_string(),
            ty,
            markers,
            location: loc(&format!("src/{name}.cs"), 20 + i as u32),
        })
        .collect();
    let ctor = Member {
        name: ".ctor".to_string(),
        kind: MemberKind::Constructor,
        ty: None,
        params,
        accessibility: Accessibility::Public,
        is_static: false,
        markers: vec![],
        location: loc(&format!("src/{name}.cs"), 5),
    };
    Declaration {
        name: name.to_string(),
        qualified_name: format!("Test.{name}"),
        kind: DeclKind::Record,
        base: None,
        interfaces: vec![],
        members: vec![ctor],
        markers,
        location: loc(&format!("src/{name}.cs"), 5),
    }
}

#[allow(dead_code)]
pub fn method(name: &str, return_type: TypeRef, params: Vec<(&str, TypeRef)>) -> Member {
    Member {
        name: name.to_string(),
        kind: MemberKind::Method,
        ty: Some(return_type),
        params: params
            .into_iter()
            .enumerate()
            .map(|(i, (pname, ty))| Param {
                name: pname.to_string(),
                ty,
                markers: vec![],
                location: loc("src/params.cs", 30 + i as u32),
            })
            .collect(),
        accessibility: Accessibility::Public,
        is_static: false,
        markers: vec![],
        location: loc("src/methods.cs", 6),
    }
}

#[allow(dead_code)]
pub fn property(name: &str, ty: TypeRef, markers: Vec<Marker>) -> Member {
    Member {
        name: name.to_string(),
        kind: MemberKind::Property,
        ty: Some(ty),
        params: vec![],
        accessibility: Accessibility::Public,
        is_static: false,
        markers,
        location: loc("src/properties.cs", 7),
    }
}

/// The canonical well-formed pair: `IMyActor : IActor` plus an actor class
/// implementing it, carrying the given extra members.
#[allow(dead_code)]
pub fn actor_pair(members: Vec<Member>) -> Vec<Declaration> {
    vec![
        interface("IMyActor", vec![iactor()]),
        actor_class(
            "MyActor",
            vec![TypeRef::named("IMyActor", "Test.IMyActor")],
            members,
        ),
    ]
}

#[allow(dead_code)]
pub fn analyze(declarations: Vec<Declaration>) -> AnalysisResult {
    engine().analyze(&SemanticModel::new(declarations))
}
