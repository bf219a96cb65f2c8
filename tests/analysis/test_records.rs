// A008: records crossing the wire need [DataContract] plus [DataMember]
// on every primary-constructor parameter and public property.

use caulk_core::model::TypeRef;

use crate::common;

#[test]
fn test_unmarked_record_fires_once_at_declaration() {
    let result = common::analyze(vec![common::record_decl(
        "Forecast",
        vec![],
        vec![
            ("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![]),
            ("Summary", TypeRef::named("string", "string"), vec![]),
        ],
    )]);

    // Without the type-level marker the member checks do not pile on.
    assert_eq!(common::codes(&result), vec!["A008"]);
    let d = &result.diagnostics[0];
    assert_eq!(d.symbol, "Forecast");
    assert!(d.message.contains("DataContract"));
    assert!(d.message.contains("DataMember"));
    assert!(d.fix_available);
}

#[test]
fn test_partially_marked_members_fire_per_member() {
    let result = common::analyze(vec![common::record_decl(
        "Forecast",
        vec![common::data_contract()],
        vec![
            ("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![common::data_member()]),
            ("Summary", TypeRef::named("string", "string"), vec![]),
            ("TemperatureC", TypeRef::named("int", "int"), vec![]),
        ],
    )]);

    assert_eq!(common::codes(&result), vec!["A008", "A008"]);
    let symbols: Vec<&str> = result.diagnostics.iter().map(|d| d.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["Summary", "TemperatureC"]);
    for d in &result.diagnostics {
        assert!(d.fix_available);
    }
}

#[test]
fn test_fully_marked_record_is_clean() {
    let result = common::analyze(vec![common::record_decl(
        "Forecast",
        vec![common::data_contract()],
        vec![
            ("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![common::data_member()]),
            ("Summary", TypeRef::named("string", "string"), vec![common::data_member()]),
        ],
    )]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_all_records_are_checked_without_actor_usage() {
    // A record never referenced from an actor signature is still held to
    // the contract: any serializer may pick it up.
    let mut declarations = common::actor_pair(vec![]);
    declarations.push(common::record_decl("Standalone", vec![], vec![]));
    let result = common::analyze(declarations);
    assert_eq!(common::codes(&result), vec!["A008"]);
}

#[test]
fn test_synthesized_property_markers_satisfy_the_param() {
    use caulk_core::model::Member;

    // Host exports both the ctor param and its synthesized property; the
    // marker lives on the property.
    let mut record = common::record_decl(
        "Forecast",
        vec![common::data_contract()],
        vec![("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![])],
    );
    let marked_property: Member = common::property(
        "Date",
        TypeRef::named("DateOnly", "System.DateOnly"),
        vec![common::data_member()],
    );
    record.members.push(marked_property);

    let result = common::analyze(vec![record]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_synthesized_property_is_not_reported_twice() {
    use caulk_core::model::Member;

    // Host exports both representations of the same member; the ctor loop
    // reports it, the property loop must not.
    let mut record = common::record_decl(
        "Forecast",
        vec![common::data_contract()],
        vec![("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![])],
    );
    let unmarked_property: Member = common::property(
        "Date",
        TypeRef::named("DateOnly", "System.DateOnly"),
        vec![],
    );
    record.members.push(unmarked_property);

    let result = common::analyze(vec![record]);
    assert_eq!(common::codes(&result), vec!["A008"]);
    assert_eq!(result.diagnostics[0].symbol, "Date");
}

#[test]
fn test_marked_record_in_actor_signature_is_clean() {
    let mut declarations = common::actor_pair(vec![common::method(
        "GetForecastAsync",
        common::task_of(common::tref("Forecast")),
        vec![],
    )]);
    declarations.push(common::record_decl(
        "Forecast",
        vec![common::data_contract()],
        vec![("Date", TypeRef::named("DateOnly", "System.DateOnly"), vec![common::data_member()])],
    ));
    assert!(common::analyze(declarations).diagnostics.is_empty());
}
