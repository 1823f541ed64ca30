//! Headless Flappy Bird simulator CLI.
//!
//! Plays the real game logic with the autopilot to check tuning changes.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 100 runs, random seed
//!   cargo run --bin simulate -- -n 20 --seed 42  # Reproducible run
//!   cargo run --bin simulate -- --json           # JSON report on stdout

use flappy::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let (mut config, json) = parse_args(&args);

    if json {
        // Keep stdout parseable
        config.verbosity = 0;
        let report = run_simulation(&config);
        println!("{}", report.to_json());
        return;
    }

    if config.verbosity >= 1 {
        print_header(&config);
    }

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn print_header(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 FLAPPY BIRD SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Margin:         {}", config.autopilot.margin);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, i);
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(parse_value(args, i));
                i += 1;
            }
            "-t" | "--max-ticks" => {
                config.max_ticks_per_run = parse_value(args, i);
                i += 1;
            }
            "-m" | "--margin" => {
                config.autopilot.margin = parse_value(args, i);
                i += 1;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                eprintln!("Run 'simulate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (config, json)
}

/// Parse the value following flag `args[i]`, exiting on a missing or bad value.
fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> T {
    match args.get(i + 1).map(|v| v.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("Missing or invalid value for {}", args[i]);
            std::process::exit(1);
        }
    }
}

fn print_help() {
    println!("Flappy Bird Simulator\n");
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --runs <N>      Number of runs (default 100)");
    println!("  -s, --seed <SEED>   Seed for reproducible runs");
    println!("  -t, --max-ticks <N> Tick limit per run (default 18000)");
    println!("  -m, --margin <U>    Autopilot clearance above the gap bottom");
    println!("  -v, --verbose       Print every run");
    println!("  -q, --quiet         Print only the report");
    println!("      --json          Print the report as JSON");
    println!("  -h, --help          Show this help message");
}
