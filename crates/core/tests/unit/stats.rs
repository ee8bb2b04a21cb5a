//! # Statistics Tests
//!
//! This module contains tests that ensure the
//! [`SimStats`](dockmask_core::stats::SimStats) structure correctly tracks
//! instruction counts, writes, overwrites, and resident addresses over a run.

use dockmask_core::stats::SimStats;
use dockmask_core::{Config, Machine};

/// Verifies that a fresh statistics block starts zeroed.
#[test]
fn stats_start_zeroed() {
    let stats = SimStats::new();
    assert_eq!(stats.instructions, 0);
    assert_eq!(stats.mask_loads, 0);
    assert_eq!(stats.writes, 0);
    assert_eq!(stats.overwrites, 0);
    assert_eq!(stats.resident, 0);
}

/// Verifies the counters after the worked example program: four
/// instructions, one mask load, three writes, one overwrite, two resident
/// addresses.
#[test]
fn stats_track_example_program() {
    let mut machine = Machine::new(&Config::default());
    let _ = machine
        .run(&[
            "mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X",
            "mem[8] = 11",
            "mem[7] = 101",
            "mem[8] = 0",
        ])
        .unwrap();

    assert_eq!(machine.stats.instructions, 4);
    assert_eq!(machine.stats.mask_loads, 1);
    assert_eq!(machine.stats.writes, 3);
    assert_eq!(machine.stats.overwrites, 1);
    assert_eq!(machine.stats.resident, 2);
}

/// Verifies that instructions before a failing record are still counted.
#[test]
fn stats_count_instructions_up_to_failure() {
    let mut machine = Machine::new(&Config::default());
    let program = [
        "mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
        "mem[8] = 11",
        "bogus",
    ];
    assert!(machine.run(&program).is_err());
    assert_eq!(machine.stats.instructions, 2);
    assert_eq!(machine.stats.writes, 1);
}
