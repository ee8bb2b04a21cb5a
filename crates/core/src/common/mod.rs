//! Common types shared across the simulator.
//!
//! This module collects the small building blocks used by the decoder, the
//! mask compiler, and the machine:
//! 1. **Addresses:** A strong type for memory addresses.
//! 2. **Errors:** The simulator error taxonomy.

/// Memory address type.
pub mod addr;
/// Simulator and instruction error types.
pub mod error;

pub use addr::MemAddr;
pub use error::{InstError, SimError};
