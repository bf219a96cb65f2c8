// A005/A006: composite parameter and return types in actor method
// signatures need the type-level contract marker. Returns are unwrapped
// through Task<T> one level before classification.

use caulk_core::model::{Accessibility, Member, TypeRef};

use crate::common;

fn with_payload(members: Vec<Member>) -> Vec<caulk_core::model::Declaration> {
    let mut declarations = common::actor_pair(members);
    declarations.push(common::plain_class("ComplexType", vec![]));
    declarations
}

#[test]
fn test_unmarked_parameter_fires_once() {
    let result = common::analyze(with_payload(vec![common::method(
        "ProcessDataAsync",
        TypeRef::named("Task", "System.Threading.Tasks.Task"),
        vec![("data", common::tref("ComplexType"))],
    )]));

    assert_eq!(common::codes(&result), vec!["A005"]);
    let d = &result.diagnostics[0];
    assert!(d.message.contains("`data`"));
    assert!(d.message.contains("ComplexType"));
    assert!(d.message.contains("ProcessDataAsync"));
    // The fix edits the type declaration, not the parameter site.
    assert_eq!(
        d.fix_target.as_ref().unwrap().file,
        "src/ComplexType.cs"
    );
}

#[test]
fn test_unmarked_return_type_unwraps_task() {
    let result = common::analyze(with_payload(vec![common::method(
        "GetDataAsync",
        common::task_of(common::tref("ComplexType")),
        vec![],
    )]));

    assert_eq!(common::codes(&result), vec!["A006"]);
    let d = &result.diagnostics[0];
    assert!(d.message.contains("ComplexType"));
    assert!(d.message.contains("GetDataAsync"));
    assert!(d.fix_available);
}

#[test]
fn test_each_offending_parameter_fires() {
    let mut declarations = common::actor_pair(vec![common::method(
        "MergeAsync",
        TypeRef::named("Task", "System.Threading.Tasks.Task"),
        vec![
            ("left", common::tref("Left")),
            ("count", TypeRef::named("int", "int")),
            ("right", common::tref("Right")),
        ],
    )]);
    declarations.push(common::plain_class("Left", vec![]));
    declarations.push(common::plain_class("Right", vec![]));

    let result = common::analyze(declarations);
    assert_eq!(common::codes(&result), vec!["A005", "A005"]);
    assert_eq!(result.diagnostics[0].symbol, "Left");
    assert_eq!(result.diagnostics[1].symbol, "Right");
}

#[test]
fn test_marked_types_are_clean() {
    let mut declarations = common::actor_pair(vec![common::method(
        "RoundTripAsync",
        common::task_of(common::tref("Payload")),
        vec![("payload", common::tref("Payload"))],
    )]);
    declarations.push(common::plain_class("Payload", vec![common::data_contract()]));
    assert!(common::analyze(declarations).diagnostics.is_empty());
}

#[test]
fn test_static_methods_are_skipped() {
    let static_method = Member {
        is_static: true,
        ..common::method(
            "Create",
            common::tref("ComplexType"),
            vec![("data", common::tref("ComplexType"))],
        )
    };
    assert!(common::analyze(with_payload(vec![static_method]))
        .diagnostics
        .is_empty());
}

#[test]
fn test_non_public_methods_are_skipped() {
    let internal_method = Member {
        accessibility: Accessibility::Internal,
        ..common::method(
            "Prepare",
            TypeRef::Void,
            vec![("data", common::tref("ComplexType"))],
        )
    };
    assert!(common::analyze(with_payload(vec![internal_method]))
        .diagnostics
        .is_empty());
}

#[test]
fn test_universal_object_methods_are_skipped() {
    let result = common::analyze(with_payload(vec![
        common::method("ToString", TypeRef::named("string", "string"), vec![]),
        common::method(
            "Equals",
            TypeRef::named("bool", "bool"),
            vec![("other", common::tref("ComplexType"))],
        ),
    ]));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_interface_typed_parameter_is_not_checked() {
    // Interfaces as data are outside the contract rules.
    let mut declarations = common::actor_pair(vec![common::method(
        "ApplyAsync",
        TypeRef::named("Task", "System.Threading.Tasks.Task"),
        vec![("shape", common::tref("IShape"))],
    )]);
    declarations.push(common::interface("IShape", vec![]));
    assert!(common::analyze(declarations).diagnostics.is_empty());
}

#[test]
fn test_enum_parameter_is_exempt() {
    let mut declarations = common::actor_pair(vec![common::method(
        "SetMoodAsync",
        TypeRef::named("Task", "System.Threading.Tasks.Task"),
        vec![("mood", common::tref("Mood"))],
    )]);
    declarations.push(common::enum_decl(
        "Mood",
        vec![("Happy", vec![common::enum_member()])],
    ));
    // The enum type itself needs no A005; only its members are checked.
    assert!(common::analyze(declarations).diagnostics.is_empty());
}
