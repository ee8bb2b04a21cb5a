//! Memory address type.
//!
//! This module defines a strong type for memory addresses to prevent
//! accidental mixing of addresses and raw values. It provides:
//! 1. **Type Safety:** Distinguishes addresses from stored values at compile time.
//! 2. **Map Keys:** Hashable and ordered, usable as the key of the memory map.

use std::fmt;

/// An address in the simulated memory.
///
/// Addresses name slots in the sparse memory map. They are never masked;
/// only the values written through them are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemAddr(pub u64);

impl MemAddr {
    /// Creates a new memory address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// A new `MemAddr` instance wrapping the provided address.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// The underlying 64-bit address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
