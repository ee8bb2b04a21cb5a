//! # Error Taxonomy Tests
//!
//! This module contains unit tests for simulator error types and their
//! display formatting, ensuring reports point at the offending field.

use std::error::Error;
use std::path::PathBuf;

use dockmask_core::common::{InstError, SimError};

/// Produces the `ParseIntError` for a non-numeric lexeme.
fn parse_failure(text: &str) -> std::num::ParseIntError {
    text.parse::<u64>().unwrap_err()
}

/// Verifies that an unrecognized record is reported with its text.
#[test]
fn inst_error_unrecognized_display() {
    let err = InstError::Unrecognized("msk = 101".to_string());
    assert!(format!("{}", err).contains("msk = 101"));
}

/// Verifies that a truncated record is reported with the missing separator.
#[test]
fn inst_error_truncated_display() {
    let err = InstError::Truncated { expected: "]" };
    assert!(format!("{}", err).contains("']'"));
}

/// Verifies that a bad address is reported with the offending lexeme.
#[test]
fn inst_error_address_display() {
    let err = InstError::Address {
        text: "8a".to_string(),
        source: parse_failure("8a"),
    };
    assert!(format!("{}", err).contains("'8a'"));
}

/// Verifies that a bad value keeps the underlying parse error as its source.
#[test]
fn inst_error_value_has_source() {
    let err = InstError::Value {
        text: "eleven".to_string(),
        source: parse_failure("eleven"),
    };
    assert!(err.source().is_some());
}

/// Verifies that a mask width mismatch reports both widths.
#[test]
fn inst_error_mask_width_display() {
    let err = InstError::MaskWidth {
        expected: 36,
        found: 35,
    };
    let text = format!("{}", err);
    assert!(text.contains("36"));
    assert!(text.contains("35"));
}

/// Verifies that a bad mask character reports the character and its index.
#[test]
fn inst_error_mask_char_display() {
    let err = InstError::MaskChar {
        index: 3,
        found: '2',
    };
    let text = format!("{}", err);
    assert!(text.contains("'2'"));
    assert!(text.contains("index 3"));
}

/// Verifies that a line-wrapped error leads with its 1-based line number and
/// keeps the instruction failure as its source.
#[test]
fn sim_error_line_display_and_source() {
    let err = SimError::Line {
        number: 3,
        source: InstError::Unrecognized("bogus".to_string()),
    };
    assert!(format!("{}", err).starts_with("line 3:"));
    assert!(err.source().is_some());
}

/// Verifies that an I/O failure is reported with the offending path.
#[test]
fn sim_error_io_display() {
    let err = SimError::Io {
        path: PathBuf::from("missing/input"),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(format!("{}", err).contains("missing/input"));
}
