//! Instruction representation and record decoding.
//!
//! A program record is one trimmed, non-empty line in one of two forms:
//!
//! ```text
//! mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
//! mem[8] = 11
//! ```
//!
//! Records are classified by their whole leading token (`mask` vs `mem[`),
//! not by a character at a fixed offset, so a malformed record is reported
//! instead of misclassified.

use crate::common::addr::MemAddr;
use crate::common::error::InstError;

/// A decoded program instruction.
///
/// Immutable once decoded. Mask text is carried verbatim; it is compiled
/// against the configured width when the instruction executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Install a new write mask from its textual form.
    Mask(String),
    /// Write a raw value to an address; the current mask is applied on store.
    Write {
        /// Target memory address.
        addr: MemAddr,
        /// Raw value before masking.
        value: u64,
    },
}

/// Decodes a single program record into an [`Instruction`].
///
/// The record must already be trimmed and non-empty; the loader guarantees
/// both.
///
/// # Arguments
///
/// * `line` - The record to decode.
///
/// # Errors
///
/// Returns [`InstError::Unrecognized`] when the record starts with neither
/// `mask` nor `mem[`, [`InstError::Truncated`] when a separator or delimiter
/// is missing, and [`InstError::Address`] / [`InstError::Value`] when a
/// numeric field fails to parse. Parse failures are never defaulted to zero.
pub fn decode(line: &str) -> Result<Instruction, InstError> {
    if let Some(rest) = line.strip_prefix("mask") {
        let text = rest
            .strip_prefix(" = ")
            .ok_or(InstError::Truncated { expected: " = " })?;
        return Ok(Instruction::Mask(text.to_string()));
    }

    if let Some(rest) = line.strip_prefix("mem[") {
        let (addr_text, rest) = rest
            .split_once(']')
            .ok_or(InstError::Truncated { expected: "]" })?;
        let value_text = rest
            .strip_prefix(" = ")
            .ok_or(InstError::Truncated { expected: " = " })?;

        let addr = addr_text.parse::<u64>().map_err(|source| InstError::Address {
            text: addr_text.to_string(),
            source,
        })?;
        let value = value_text.parse::<u64>().map_err(|source| InstError::Value {
            text: value_text.to_string(),
            source,
        })?;

        return Ok(Instruction::Write {
            addr: MemAddr::new(addr),
            value,
        });
    }

    Err(InstError::Unrecognized(line.to_string()))
}
