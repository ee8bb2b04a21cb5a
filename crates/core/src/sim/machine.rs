//! Simulation machine.
//!
//! The machine owns the current mask pair and the sparse memory map, executes
//! decoded instructions in program order, and produces the checksum. It
//! performs:
//! 1. **Mask definitions:** Recompiles the pair via [`MaskPair::compile`],
//!    replacing the previous pair wholesale.
//! 2. **Memory writes:** Applies the *current* pair to the raw value and
//!    stores the result, overwriting any prior value at that address.
//! 3. **Checksum:** Sums all values present in memory after the program ends.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::common::addr::MemAddr;
use crate::common::error::{InstError, SimError};
use crate::config::Config;
use crate::inst::{self, Instruction};
use crate::mask::MaskPair;
use crate::stats::SimStats;

/// The simulation machine: mask state, sparse memory, and statistics.
///
/// Memory entries are created by write instructions and never deleted; an
/// address that was never written reads as 0 (the whole address space starts
/// initialized to 0).
#[derive(Debug)]
pub struct Machine {
    mask: MaskPair,
    mem: HashMap<MemAddr, u64>,
    mask_width: u32,
    trace_writes: bool,
    /// Statistics collected over the run.
    pub stats: SimStats,
}

impl Machine {
    /// Creates a fresh machine from the configuration.
    ///
    /// The initial mask pair is `(0, 0)`: a write executed before the first
    /// mask definition stores 0.
    pub fn new(config: &Config) -> Self {
        Self {
            mask: MaskPair::default(),
            mem: HashMap::new(),
            mask_width: config.machine.mask_width,
            trace_writes: config.general.trace_writes,
            stats: SimStats::new(),
        }
    }

    /// Executes a single decoded instruction against the machine state.
    ///
    /// # Errors
    ///
    /// Returns a mask-compilation error ([`InstError::MaskWidth`] or
    /// [`InstError::MaskChar`]) when a mask definition is malformed. Writes
    /// are infallible once decoded.
    pub fn execute(&mut self, instruction: &Instruction) -> Result<(), InstError> {
        self.stats.instructions += 1;

        match instruction {
            Instruction::Mask(text) => {
                self.mask = MaskPair::compile(text, self.mask_width)?;
                self.stats.mask_loads += 1;
                debug!(
                    zero_mask = self.mask.zero_mask(),
                    one_mask = self.mask.one_mask(),
                    "mask reloaded"
                );
            }
            Instruction::Write { addr, value } => {
                let stored = self.mask.apply(*value);
                trace!(addr = addr.val(), raw = *value, stored, "store");
                if self.trace_writes {
                    eprintln!("[store] mem[{addr}] = {stored} (raw {value})");
                }
                if self.mem.insert(*addr, stored).is_some() {
                    self.stats.overwrites += 1;
                }
                self.stats.writes += 1;
            }
        }

        Ok(())
    }

    /// Runs a whole program: decodes and executes each record in order.
    ///
    /// Records must be trimmed and non-empty, as produced by
    /// [`loader::load_program`](crate::sim::loader::load_program).
    ///
    /// # Arguments
    ///
    /// * `records` - The program records, in program order.
    ///
    /// # Returns
    ///
    /// The checksum: the sum of all values left in memory.
    ///
    /// # Errors
    ///
    /// Stops at the first record that fails to decode or execute and returns
    /// it as [`SimError::Line`] with its 1-based line number.
    pub fn run<S: AsRef<str>>(&mut self, records: &[S]) -> Result<u64, SimError> {
        for (index, record) in records.iter().enumerate() {
            inst::decode(record.as_ref())
                .and_then(|instruction| self.execute(&instruction))
                .map_err(|source| SimError::Line {
                    number: index + 1,
                    source,
                })?;
        }

        self.stats.resident = self.mem.len() as u64;
        Ok(self.checksum())
    }

    /// Reads the value at an address; unwritten addresses read as 0.
    pub fn read(&self, addr: MemAddr) -> u64 {
        self.mem.get(&addr).copied().unwrap_or(0)
    }

    /// Returns the current mask pair.
    pub const fn mask(&self) -> MaskPair {
        self.mask
    }

    /// Sums all values currently present in memory.
    pub fn checksum(&self) -> u64 {
        self.mem.values().sum()
    }
}
