//! Simulator error taxonomy.
//!
//! This module defines the error types surfaced by the simulator. It provides:
//! 1. **Run Errors:** Fatal I/O failures and per-line instruction failures.
//! 2. **Instruction Errors:** Decode and mask-compilation failures, each
//!    carrying the offending lexeme so reports point at the exact field.
//! 3. **Error Handling:** Integrating with standard Rust error traits for
//!    system-level reporting.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level simulation error.
///
/// An `Io` error aborts the whole run before any instruction executes. A
/// `Line` error wraps the failure of a single instruction with its 1-based
/// line number; the machine stops at the first one (one-shot batch, no
/// recovery).
#[derive(Debug, Error)]
pub enum SimError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path of the unreadable program file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A single instruction failed to decode or execute.
    #[error("line {number}: {source}")]
    Line {
        /// 1-based line number of the failing record.
        number: usize,
        /// The instruction-level failure.
        #[source]
        source: InstError,
    },
}

/// Failure of a single instruction.
///
/// Produced by the record decoder and the mask compiler. Numeric fields that
/// fail to parse are reported explicitly rather than silently defaulting, and
/// a mask character outside `{X, 0, 1}` fails fast.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InstError {
    /// The record does not start with a known instruction token.
    #[error("unrecognized instruction '{0}'")]
    Unrecognized(String),

    /// The record starts with a known token but is missing a separator or delimiter.
    #[error("truncated instruction: expected '{expected}'")]
    Truncated {
        /// The separator or delimiter that was not found.
        expected: &'static str,
    },

    /// The address field is not a non-negative integer.
    #[error("bad address '{text}': {source}")]
    Address {
        /// The offending address lexeme.
        text: String,
        /// Underlying integer parse error.
        #[source]
        source: ParseIntError,
    },

    /// The value field is not a non-negative integer.
    #[error("bad value '{text}': {source}")]
    Value {
        /// The offending value lexeme.
        text: String,
        /// Underlying integer parse error.
        #[source]
        source: ParseIntError,
    },

    /// The textual mask has the wrong number of characters.
    #[error("mask is {found} characters, expected {expected}")]
    MaskWidth {
        /// Configured mask width.
        expected: u32,
        /// Number of characters actually present.
        found: usize,
    },

    /// The textual mask contains a character outside `{X, 0, 1}`.
    #[error("mask character '{found}' at index {index} is not one of X, 0, 1")]
    MaskChar {
        /// 0-based index of the offending character (most significant bit first).
        index: usize,
        /// The offending character.
        found: char,
    },
}
