//! Tests for column-pair comparison semantics

use super::{columns, record};
use crate::app::services::crosscheck::comparator::{
    compare_records, format_numeric, Discrepancy,
};

#[test]
fn test_numeric_within_tolerance_is_clean() {
    let file = record(&[("EASTING", "100.0005")]);
    let reference = record(&[("EASTING", "100")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["EASTING"]),
        &columns(&["EASTING"]),
        0.001,
    );
    assert!(discrepancies.is_empty());
}

#[test]
fn test_numeric_beyond_tolerance_is_reported() {
    let file = record(&[("EASTING", "100.01")]);
    let reference = record(&[("EASTING", "100")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["EASTING"]),
        &columns(&["EASTING"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 1);
    assert_eq!(
        discrepancies[0].to_string(),
        "  Column 'EASTING' vs 'EASTING': File value = 100.01, Reference value = 100.0"
    );
}

#[test]
fn test_difference_of_exactly_tolerance_is_clean() {
    // Strict inequality: 1.5 - 1.0 is exactly the tolerance, not beyond it.
    // 0.5 is exactly representable, so the comparison has no rounding slack.
    let file = record(&[("KP", "1.0")]);
    let reference = record(&[("KP_NEW", "1.5")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["KP"]),
        &columns(&["KP_NEW"]),
        0.5,
    );
    assert!(discrepancies.is_empty());

    let reference = record(&[("KP_NEW", "1.625")]);
    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["KP"]),
        &columns(&["KP_NEW"]),
        0.5,
    );
    assert_eq!(discrepancies.len(), 1);
}

#[test]
fn test_asymmetric_column_names_pair_positionally() {
    let file = record(&[("EASTING", "1"), ("NORTHING", "2"), ("KP", "3")]);
    let reference = record(&[("EASTING", "1"), ("NORTHING", "2"), ("KP_NEW", "9")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["EASTING", "NORTHING", "KP"]),
        &columns(&["EASTING", "NORTHING", "KP_NEW"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 1);
    assert!(matches!(
        &discrepancies[0],
        Discrepancy::Numeric {
            file_column,
            reference_column,
            ..
        } if file_column == "KP" && reference_column == "KP_NEW"
    ));
}

#[test]
fn test_textual_fallback_trims_before_comparing() {
    let file = record(&[("NAME", " north spur ")]);
    let reference = record(&[("NAME", "north spur")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["NAME"]),
        &columns(&["NAME"]),
        0.001,
    );
    assert!(discrepancies.is_empty());
}

#[test]
fn test_textual_mismatch_names_both_columns_and_values() {
    let file = record(&[("NAME", "north spur")]);
    let reference = record(&[("LABEL", "south spur")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["NAME"]),
        &columns(&["LABEL"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 1);
    assert_eq!(
        discrepancies[0].to_string(),
        "  Column 'NAME' vs 'LABEL': File value = north spur, Reference value = south spur"
    );
}

#[test]
fn test_mixed_numeric_and_text_falls_back_to_string() {
    // One side fails coercion, so both are compared as trimmed strings
    let file = record(&[("KP", "0.0")]);
    let reference = record(&[("KP_NEW", "start")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["KP"]),
        &columns(&["KP_NEW"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 1);
    assert!(matches!(&discrepancies[0], Discrepancy::Textual { .. }));
}

#[test]
fn test_missing_file_column_skips_comparison() {
    let file = record(&[("NORTHING", "200")]);
    let reference = record(&[("EASTING", "100")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["EASTING"]),
        &columns(&["EASTING"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 1);
    assert_eq!(discrepancies[0].to_string(), "  Missing column: 'EASTING'");
}

#[test]
fn test_missing_reference_column_names_reference_key() {
    let file = record(&[("KP", "0.0")]);
    let reference = record(&[("KP", "0.0")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["KP"]),
        &columns(&["KP_NEW"]),
        0.001,
    );

    assert_eq!(
        discrepancies,
        vec![Discrepancy::MissingColumn {
            column: "KP_NEW".to_string()
        }]
    );
}

#[test]
fn test_discrepancies_preserve_pair_order() {
    let file = record(&[("EASTING", "1"), ("NORTHING", "9"), ("KP", "3")]);
    let reference = record(&[("EASTING", "5"), ("NORTHING", "9"), ("KP_NEW", "7")]);

    let discrepancies = compare_records(
        &file,
        &reference,
        &columns(&["EASTING", "NORTHING", "KP"]),
        &columns(&["EASTING", "NORTHING", "KP_NEW"]),
        0.001,
    );

    assert_eq!(discrepancies.len(), 2);
    assert!(matches!(
        &discrepancies[0],
        Discrepancy::Numeric { file_column, .. } if file_column == "EASTING"
    ));
    assert!(matches!(
        &discrepancies[1],
        Discrepancy::Numeric { file_column, .. } if file_column == "KP"
    ));
}

#[test]
fn test_pure_function_same_inputs_same_output() {
    let file = record(&[("EASTING", "100.01")]);
    let reference = record(&[("EASTING", "100")]);
    let file_columns = columns(&["EASTING"]);
    let reference_columns = columns(&["EASTING"]);

    let first = compare_records(&file, &reference, &file_columns, &reference_columns, 0.001);
    let second = compare_records(&file, &reference, &file_columns, &reference_columns, 0.001);
    assert_eq!(first, second);
}

#[test]
fn test_format_numeric() {
    assert_eq!(format_numeric(100.0), "100.0");
    assert_eq!(format_numeric(100.01), "100.01");
    assert_eq!(format_numeric(0.0005), "0.0005");
    assert_eq!(format_numeric(-3.0), "-3.0");
    assert_eq!(format_numeric(0.0), "0.0");
}
