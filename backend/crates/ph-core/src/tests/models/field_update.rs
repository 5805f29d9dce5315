use crate::FieldUpdate;

#[test]
fn test_missing_value_keeps() {
    assert_eq!(FieldUpdate::from_submitted(None), FieldUpdate::Keep);
}

#[test]
fn test_blank_value_clears() {
    assert_eq!(FieldUpdate::from_submitted(Some("")), FieldUpdate::Clear);
    assert_eq!(FieldUpdate::from_submitted(Some("   ")), FieldUpdate::Clear);
}

#[test]
fn test_value_is_trimmed_and_set() {
    assert_eq!(
        FieldUpdate::from_submitted(Some("  Alice B ")),
        FieldUpdate::Set("Alice B".to_string())
    );
}

#[test]
fn test_value_only_for_set() {
    assert_eq!(FieldUpdate::Set(3).value(), Some(&3));
    assert_eq!(FieldUpdate::<i32>::Clear.value(), None);
    assert_eq!(FieldUpdate::<i32>::Keep.value(), None);
    assert!(FieldUpdate::<i32>::Keep.is_keep());
    assert!(!FieldUpdate::<i32>::Clear.is_keep());
}

#[test]
fn test_try_map_propagates_error_only_for_set() {
    let parse = |s: String| s.parse::<i32>();

    assert_eq!(
        FieldUpdate::Set("42".to_string()).try_map(parse),
        Ok(FieldUpdate::Set(42))
    );
    assert_eq!(FieldUpdate::Clear.try_map(parse), Ok(FieldUpdate::Clear));
    assert!(FieldUpdate::Set("nope".to_string()).try_map(parse).is_err());
}
