//! Program file loader.
//!
//! Reads an initialization program from disk and splits it into records. It
//! performs:
//! 1. **Reading:** The whole file as UTF-8 text, with a path-carrying error
//!    on failure instead of exiting the process.
//! 2. **Record splitting:** One record per line, trimmed, blank lines
//!    dropped, returned as an explicit sequence for the machine to consume.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;

/// Loads an initialization program from disk as a sequence of records.
///
/// Each record is trimmed; blank lines are dropped, so the machine only ever
/// sees non-empty records.
///
/// # Arguments
///
/// * `path` - Path to the program file.
///
/// # Errors
///
/// Returns [`SimError::Io`] with the offending path when the file cannot be
/// read. I/O failure is fatal to the run; the caller owns reporting.
pub fn load_program(path: &Path) -> Result<Vec<String>, SimError> {
    let text = fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|record| !record.is_empty())
        .map(str::to_string)
        .collect())
}
