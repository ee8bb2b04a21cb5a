//! Masked-memory initialization simulator CLI.
//!
//! This binary is the single entry point for batch runs. It performs:
//! 1. **Loading:** Reads the initialization program into a record sequence.
//! 2. **Execution:** Runs the machine over the records.
//! 3. **Reporting:** Prints the checksum to stdout; optional statistics report.

use clap::Parser;
use std::path::PathBuf;
use std::{fs, process};

use dockmask_core::sim::loader;
use dockmask_core::{Config, Machine};

#[derive(Parser, Debug)]
#[command(
    name = "dockmask",
    version,
    about = "Masked-memory initialization program simulator",
    long_about = "Execute an initialization program (mask definitions and masked memory \
writes) and print the checksum: the sum of all values left in memory.\n\n\
Examples:\n  dockmask input\n  dockmask input --stats\n  dockmask input --config sim.json"
)]
struct Cli {
    /// Initialization program to execute.
    #[arg(default_value = "input")]
    program: PathBuf,

    /// JSON configuration file (built-in defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Echo every store to stderr.
    #[arg(long)]
    trace: bool,

    /// Print the statistics report after the run.
    #[arg(long)]
    stats: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("\n[!] FATAL: Could not read config '{}': {}", path.display(), e);
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("\n[!] FATAL: Bad config '{}': {}", path.display(), e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };
    if cli.trace {
        config.general.trace_writes = true;
    }

    let records = loader::load_program(&cli.program).unwrap_or_else(|e| {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    });

    let mut machine = Machine::new(&config);
    match machine.run(&records) {
        Ok(checksum) => {
            println!("{checksum}");
            if cli.stats {
                machine.stats.print();
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}
