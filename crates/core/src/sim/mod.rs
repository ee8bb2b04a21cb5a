//! Program loading and simulation.
//!
//! The loader turns a program file into an explicit record sequence; the
//! machine executes that sequence and produces the checksum.

/// Program file loader.
pub mod loader;
/// Simulation machine (mask state, memory, checksum).
pub mod machine;
