//! Masked-memory initialization program simulator library.
//!
//! This crate executes small text-based initialization programs against a
//! masked-memory write model. It provides the following:
//! 1. **Mask:** Compilation of textual bitmasks into zero/one mask pairs and value masking.
//! 2. **Instructions:** Structured decoding of program records into instructions.
//! 3. **Simulation:** Program loader, the machine that executes instructions, and the checksum.
//! 4. **Support:** Configuration, statistics collection, and error types.

/// Common types (memory addresses, error taxonomy).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Instruction representation and record decoding.
pub mod inst;
/// Bitmask compilation and value masking.
pub mod mask;
/// Program loader and simulation machine.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Compiled zero/one bitmask pair; construct with `MaskPair::compile`.
pub use crate::mask::MaskPair;
/// Simulation machine; owns mask state, memory, and stats.
pub use crate::sim::machine::Machine;
