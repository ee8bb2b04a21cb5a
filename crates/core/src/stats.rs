//! Simulation statistics collection and reporting.
//!
//! This module tracks counters for the simulator. It provides:
//! 1. **Instruction mix:** Total instructions, mask reloads, and memory writes.
//! 2. **Memory behavior:** Overwrites and the number of populated addresses.
//! 3. **Reporting:** A plain-text summary printed after the run.

use std::time::Instant;

/// Statistics collected over a single simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total instructions executed.
    pub instructions: u64,
    /// Number of mask-definition instructions executed.
    pub mask_loads: u64,
    /// Number of memory-write instructions executed.
    pub writes: u64,
    /// Writes that replaced an existing value at the same address.
    pub overwrites: u64,
    /// Addresses holding a value when the program finished.
    pub resident: u64,
}

impl SimStats {
    /// Creates a zeroed statistics block; the host clock starts now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            instructions: 0,
            mask_loads: 0,
            writes: 0,
            overwrites: 0,
            resident: 0,
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================================");
        println!("DOCKMASK SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("instructions             {}", self.instructions);
        println!("mask_loads               {}", self.mask_loads);
        println!("mem_writes               {}", self.writes);
        println!("overwrites               {}", self.overwrites);
        println!("resident_addresses       {}", self.resident);
        println!("==========================================================");
    }
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}
