//! Column-pair comparison with numeric tolerance
//!
//! Compares two records over two parallel column lists (positional pairing,
//! e.g. "KP" against "KP_NEW"). Each pair is classified in a single coercion
//! step: numeric when both values parse as floats, textual otherwise, or a
//! missing-column note when either side lacks its column. Numeric coercion
//! failure is not an error; it falls back to trimmed string equality.

use std::fmt;

use serde::Serialize;

use crate::app::models::Record;

/// One column-pair mismatch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Both values parsed as numbers and differ beyond the tolerance
    Numeric {
        file_column: String,
        reference_column: String,
        file_value: f64,
        reference_value: f64,
    },
    /// At least one value is non-numeric and the trimmed strings differ
    Textual {
        file_column: String,
        reference_column: String,
        file_value: String,
        reference_value: String,
    },
    /// A compared column is absent from its record
    MissingColumn { column: String },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::Numeric {
                file_column,
                reference_column,
                file_value,
                reference_value,
            } => write!(
                f,
                "  Column '{}' vs '{}': File value = {}, Reference value = {}",
                file_column,
                reference_column,
                format_numeric(*file_value),
                format_numeric(*reference_value)
            ),
            Discrepancy::Textual {
                file_column,
                reference_column,
                file_value,
                reference_value,
            } => write!(
                f,
                "  Column '{}' vs '{}': File value = {}, Reference value = {}",
                file_column, reference_column, file_value, reference_value
            ),
            Discrepancy::MissingColumn { column } => {
                write!(f, "  Missing column: '{}'", column)
            }
        }
    }
}

/// Compare two records over parallel column lists.
///
/// `file_columns` and `reference_columns` pair up positionally; any extra
/// columns in the longer list are ignored. Returns discrepancies in pair
/// order; an empty vec means the records agree. Pure function of its inputs.
pub fn compare_records(
    file_record: &Record,
    reference_record: &Record,
    file_columns: &[String],
    reference_columns: &[String],
    tolerance: f64,
) -> Vec<Discrepancy> {
    file_columns
        .iter()
        .zip(reference_columns.iter())
        .filter_map(|(file_column, reference_column)| {
            evaluate_pair(
                file_record,
                reference_record,
                file_column,
                reference_column,
                tolerance,
            )
        })
        .collect()
}

/// Classify and evaluate one column pair
fn evaluate_pair(
    file_record: &Record,
    reference_record: &Record,
    file_column: &str,
    reference_column: &str,
    tolerance: f64,
) -> Option<Discrepancy> {
    let Some(file_value) = file_record.get(file_column) else {
        return Some(Discrepancy::MissingColumn {
            column: file_column.to_string(),
        });
    };
    let Some(reference_value) = reference_record.get(reference_column) else {
        return Some(Discrepancy::MissingColumn {
            column: reference_column.to_string(),
        });
    };

    match (
        file_value.trim().parse::<f64>(),
        reference_value.trim().parse::<f64>(),
    ) {
        (Ok(file_number), Ok(reference_number)) => {
            // Strict inequality: a difference of exactly the tolerance passes
            if (file_number - reference_number).abs() > tolerance {
                Some(Discrepancy::Numeric {
                    file_column: file_column.to_string(),
                    reference_column: reference_column.to_string(),
                    file_value: file_number,
                    reference_value: reference_number,
                })
            } else {
                None
            }
        }
        _ => {
            let file_text = file_value.trim();
            let reference_text = reference_value.trim();
            if file_text != reference_text {
                Some(Discrepancy::Textual {
                    file_column: file_column.to_string(),
                    reference_column: reference_column.to_string(),
                    file_value: file_text.to_string(),
                    reference_value: reference_text.to_string(),
                })
            } else {
                None
            }
        }
    }
}

/// Render a numeric value for the report.
///
/// Integral floats keep one decimal place ("100.0" rather than "100") so
/// report lines read as coordinates, matching the established report format.
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}
