use crate::{
    DEPT_MAP, get,
    map::DepartmentMap,
    table::{DEPARTMENT_COUNT, DEPARTMENTS, DepartmentEntry},
};

#[test]
fn insert_keeps_first_position_and_last_value() {
    let mut m = DepartmentMap::new();
    assert_eq!(m.insert("a", "1"), None);
    assert_eq!(m.insert("b", "2"), None);
    assert_eq!(m.insert("a", "3"), Some("1".to_string()));

    assert_eq!(m.len(), 2);
    assert_eq!(m.get("a"), Some("3"));
    assert_eq!(m.iter().collect::<Vec<_>>(), [("a", "3"), ("b", "2")]);
}

#[test]
fn from_entries_later_duplicate_wins() {
    let m = DepartmentMap::from_entries(&[
        DepartmentEntry::new("Law", "005011"),
        DepartmentEntry::new("UNMC", "UNMC"),
        DepartmentEntry::new("Law", "LAW-2"),
    ]);
    assert_eq!(m.keys().collect::<Vec<_>>(), ["Law", "UNMC"]);
    assert_eq!(m.get("Law"), Some("LAW-2"));
}

#[test]
fn empty_name_is_an_ordinary_key() {
    let m = DepartmentMap::from_entries(&[DepartmentEntry::new("", "X")]);
    assert!(m.contains(""));
    assert_eq!(m.get(""), Some("X"));
}

#[test]
fn default_map_has_every_department() {
    assert_eq!(DEPT_MAP.len(), DEPARTMENT_COUNT);
    for e in DEPARTMENTS.iter() {
        assert_eq!(get(e.name), Some(e.code), "{}", e.name);
    }
    assert_eq!(get("Law"), Some("005011"));
    assert_eq!(get("UNMC"), Some("UNMC"));
    assert_eq!(get("Central"), Some("%23SPLUS2"));
    assert_eq!(get("Maths"), None);
}

#[test]
fn serializes_in_insertion_order() {
    let m = DepartmentMap::from_entries(&[
        DepartmentEntry::new("z", "1"),
        DepartmentEntry::new("a", "2"),
    ]);
    assert_eq!(
        serde_json::to_string(&m).expect("serialize"),
        r#"{"z":"1","a":"2"}"#
    );
}

#[test]
fn deserializes_in_document_order() {
    let m: DepartmentMap =
        serde_json::from_str(r#"{"z":"1","a":"2","z":"3"}"#).expect("deserialize");
    assert_eq!(m.iter().collect::<Vec<_>>(), [("z", "3"), ("a", "2")]);
}

#[test]
fn rejects_non_string_values() {
    assert!(serde_json::from_str::<DepartmentMap>(r#"{"Law":5011}"#).is_err());
    assert!(serde_json::from_str::<DepartmentMap>(r#"["Law","005011"]"#).is_err());
}
