use crate::{CoreError, FieldUpdate, ProfileUpdate, parse_date_of_birth};

use chrono::NaiveDate;

#[test]
fn test_parse_plain_date() {
    let date = parse_date_of_birth("1990-04-12").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
}

#[test]
fn test_parse_rfc3339_keeps_date_part() {
    let date = parse_date_of_birth("1990-04-12T00:00:00.000Z").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(1990, 4, 12).unwrap());
}

#[test]
fn test_parse_rejects_garbage() {
    match parse_date_of_birth("next tuesday") {
        Err(CoreError::InvalidDate { value, .. }) => assert_eq!(value, "next tuesday"),
        other => panic!("Expected InvalidDate, got {:?}", other),
    }
}

#[test]
fn test_from_submitted_maps_each_field() {
    let update = ProfileUpdate::from_submitted(Some("Alice B"), Some(""), None).unwrap();

    assert_eq!(update.name, FieldUpdate::Set("Alice B".to_string()));
    assert_eq!(update.date_of_birth, FieldUpdate::Clear);
    assert_eq!(update.phone_number, FieldUpdate::Keep);
    assert!(!update.is_noop());
}

#[test]
fn test_from_submitted_nothing_is_noop() {
    let update = ProfileUpdate::from_submitted(None, None, None).unwrap();

    assert!(update.is_noop());
    assert_eq!(update, ProfileUpdate::default());
}

#[test]
fn test_from_submitted_bad_date_fails() {
    let result = ProfileUpdate::from_submitted(None, Some("31/31/1990"), None);

    assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
}
