use crate::record::validate_records;
use crate::*;
use serde_json::json;

fn base() -> Record {
    Record {
        jurisdiction: "NSW".to_string(),
        category: "Breath".to_string(),
        fines: 1.0,
        arrests: 0.0,
        charges: 0.0,
        total_tests: 10.0,
    }
}

#[test]
fn deserializes_with_missing_numeric_fields_defaulted() {
    let record: Record =
        serde_json::from_value(json!({ "jurisdiction": "NSW", "category": "Breath", "totalTests": 10.0 }))
            .unwrap();
    assert_eq!(record.fines, 0.0);
    assert_eq!(record.arrests, 0.0);
    assert_eq!(record.charges, 0.0);
    assert_eq!(record.total_tests, 10.0);
}

#[test]
fn validate_accepts_normalized_record() {
    assert!(base().validate().is_ok());
}

#[test]
fn validate_rejects_negative_numeric() {
    let mut record = base();
    record.arrests = -1.0;
    let err = record.validate().unwrap_err().to_string();
    assert!(err.contains("\"arrests\" has invalid value: -1"), "{err}");
}

#[test]
fn validate_rejects_non_finite_numeric() {
    let mut record = base();
    record.fines = f64::NAN;
    assert!(record.validate().is_err());
}

#[test]
fn validate_rejects_untrimmed_or_empty_strings() {
    let mut record = base();
    record.jurisdiction = " NSW".to_string();
    assert!(record.validate().is_err());

    let mut record = base();
    record.category = String::new();
    assert!(record.validate().is_err());
}

#[test]
fn validate_rejects_all_zero_row() {
    let mut record = base();
    record.fines = 0.0;
    record.total_tests = 0.0;
    let err = record.validate().unwrap_err().to_string();
    assert!(err.contains("all-zero row"), "{err}");
}

#[test]
fn validate_records_reports_first_violation() {
    let mut bad = base();
    bad.charges = f64::INFINITY;
    let records = vec![base(), bad];
    assert!(validate_records(&records).is_err());
}
