// A002: every enum member needs [EnumMember] so values serialize under a
// stable name instead of an ordinal.

use caulk_core::types::Severity;

use crate::common;

#[test]
fn test_unmarked_members_each_fire() {
    let result = common::analyze(vec![common::enum_decl(
        "TestEnum",
        vec![("Value1", vec![]), ("Value2", vec![])],
    )]);

    assert_eq!(common::codes(&result), vec!["A002", "A002"]);
    assert!(result.diagnostics[0].message.contains("Value1"));
    assert!(result.diagnostics[1].message.contains("Value2"));
    for d in &result.diagnostics {
        assert_eq!(d.severity, Severity::Warning);
        assert!(d.message.contains("TestEnum"));
        assert!(d.message.contains("EnumMember"));
        assert!(d.fix_available);
    }
}

#[test]
fn test_partially_marked_enum() {
    let result = common::analyze(vec![common::enum_decl(
        "TestEnum",
        vec![
            ("Value1", vec![common::enum_member()]),
            ("Value2", vec![]),
        ],
    )]);
    assert_eq!(common::codes(&result), vec!["A002"]);
    assert_eq!(result.diagnostics[0].symbol, "Value2");
}

#[test]
fn test_fully_marked_enum_is_clean() {
    let result = common::analyze(vec![common::enum_decl(
        "TestEnum",
        vec![
            ("Value1", vec![common::enum_member()]),
            ("Value2", vec![common::enum_member()]),
        ],
    )]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_marker_matching_is_not_substring() {
    use caulk_core::model::Marker;

    // An unrelated attribute whose name merely contains "EnumMember" does
    // not satisfy the rule.
    let result = common::analyze(vec![common::enum_decl(
        "TestEnum",
        vec![("Value1", vec![Marker::new("MyEnumMemberish", "Test.MyEnumMemberish")])],
    )]);
    assert_eq!(common::codes(&result), vec!["A002"]);
}

#[test]
fn test_attribute_suffix_form_matches() {
    use caulk_core::model::Marker;

    let result = common::analyze(vec![common::enum_decl(
        "TestEnum",
        vec![(
            "Value1",
            vec![Marker::new(
                "EnumMemberAttribute",
                "System.Runtime.Serialization.EnumMemberAttribute",
            )],
        )],
    )]);
    assert!(result.diagnostics.is_empty());
}
