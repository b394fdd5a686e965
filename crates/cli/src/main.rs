//! Snooping coherence simulator CLI.
//!
//! This binary replays a memory trace against a bus of private caches. It performs:
//! 1. **Configuration:** Built-in defaults, optionally a JSON config file, then flag overrides.
//! 2. **Replay:** Feeds every trace record to the issuing core's cache.
//! 3. **Reporting:** Prints one fixed-format report per cache, or JSON with `--json`.

use std::path::PathBuf;
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use snoopsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "snoopsim",
    author,
    version,
    about = "Trace-driven snooping cache coherence simulator",
    long_about = "Replay a `<core> <r|w> <hex address>` trace against one private cache per core.\n\nExamples:\n  snoopsim traces/canneal.trace\n  snoopsim --cores 8 --size 32768 --assoc 4 --line 64 traces/canneal.trace\n  snoopsim --config sweep.json --json traces/canneal.trace"
)]
struct Cli {
    /// Trace file to replay.
    trace: PathBuf,

    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cores (one private cache each).
    #[arg(long)]
    cores: Option<usize>,

    /// Cache size in bytes.
    #[arg(long)]
    size: Option<usize>,

    /// Associativity.
    #[arg(long)]
    assoc: Option<usize>,

    /// Line size in bytes.
    #[arg(long)]
    line: Option<usize>,

    /// Do not let a requester snoop its own broadcasts.
    #[arg(long)]
    no_snoop_self: bool,

    /// Print reports as a JSON array instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    if let Err(e) = sim.run_file(&cli.trace) {
        eprintln!("[!] FATAL: {}: {e}", cli.trace.display());
        process::exit(1);
    }

    let reports = sim.reports();
    if cli.json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("[!] FATAL: {e}");
                process::exit(1);
            }
        }
        return;
    }

    print_banner(&cli, &config, sim.records());
    for (core, report) in reports.iter().enumerate() {
        println!("============ Simulation results (Cache {core}) ============");
        report.print();
    }
}

/// Loads the JSON config (if any) and applies command-line overrides.
///
/// Exits the process with an error message if the file cannot be read or parsed.
fn load_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: Could not read config '{}': {e}", path.display());
                process::exit(1);
            });
            Config::from_json(&text).unwrap_or_else(|e| {
                eprintln!("[!] FATAL: {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if let Some(cores) = cli.cores {
        config.coherence.cores = cores;
    }
    if let Some(size) = cli.size {
        config.cache.size_bytes = size;
    }
    if let Some(assoc) = cli.assoc {
        config.cache.ways = assoc;
    }
    if let Some(line) = cli.line {
        config.cache.line_bytes = line;
    }
    if cli.no_snoop_self {
        config.coherence.snoop_self = false;
    }
    config
}

/// Prints the simulator configuration ahead of the per-cache reports.
fn print_banner(cli: &Cli, config: &Config, records: u64) {
    println!("===== snoopsim configuration =====");
    println!("L1_SIZE:                 {}", config.cache.size_bytes);
    println!("L1_ASSOC:                {}", config.cache.ways);
    println!("L1_BLOCKSIZE:            {}", config.cache.line_bytes);
    println!("NUMBER OF PROCESSORS:    {}", config.coherence.cores);
    println!("SELF SNOOP:              {}", config.coherence.snoop_self);
    println!("TRACE FILE:              {}", cli.trace.display());
    println!("TRACE RECORDS:           {records}");
}
