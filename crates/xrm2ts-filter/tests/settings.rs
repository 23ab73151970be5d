//! Deserialization of filter rules from settings files.

use xrm2ts_filter::{FilterRule, FilterSet, MatchKind};

#[test]
fn deserializes_rules_in_order() {
    let yaml = r#"
- pattern: versionnumber
  match_kind: Equals
- pattern: yominame
  match_kind: Contains
- pattern: "^adx_"
  match_kind: RegEx
"#;
    let set: FilterSet = serde_yaml::from_str(yaml).unwrap();

    assert_eq!(set.len(), 3);
    assert_eq!(set.rules()[0], FilterRule::equals("versionnumber"));
    assert_eq!(set.rules()[2].kind(), MatchKind::RegEx);
    assert!(set.is_filtered("adx_name"));
    assert!(!set.is_filtered("name_adx"));
}

#[test]
fn missing_kind_defaults_to_contains() {
    let set: FilterSet = serde_json::from_str(r#"[{"pattern": "onbehalf"}]"#).unwrap();
    assert_eq!(set.rules()[0].kind(), MatchKind::Contains);
}

#[test]
fn accepts_desktop_field_names() {
    let json = r#"[{"FilterString": "syncerror", "FilterMatchType": "Equals"}]"#;
    let set: FilterSet = serde_json::from_str(json).unwrap();
    assert_eq!(set.rules()[0], FilterRule::equals("syncerror"));
}

#[test]
fn invalid_regex_is_downgraded_on_load() {
    let json = r#"[{"pattern": "(unclosed", "match_kind": "RegEx"}]"#;
    let set: FilterSet = serde_json::from_str(json).unwrap();

    let rule = &set.rules()[0];
    assert_eq!(rule.kind(), MatchKind::Contains);
    assert!(set.is_filtered("x(unclosed"));
}

#[test]
fn serializes_pattern_and_kind() {
    let set = FilterSet::new().with(FilterRule::ends_with("_base"));
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"[{"pattern":"_base","match_kind":"EndsWith"}]"#);
}
