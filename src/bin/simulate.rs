//! Headless balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # 100k ticks at 50x
//!   cargo run --bin simulate -- --seed 42 --year      # Reproducible year at 500x
//!   cargo run --bin simulate -- -a j3 --json          # JSON summary on stdout

use std::env;
use tracing_subscriber::EnvFilter;
use wireframe::build_info;
use wireframe::economy::ThreatLevel;
use wireframe::simulator::{run_simulation, SimConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !json && config.verbosity > 0 {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              WIREFRAME BALANCE SIMULATOR                      ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Archetype:      {}", config.archetype);
        println!("  Ticks:          {}", config.ticks);
        println!("  Speed:          {}x", config.speed);
        println!("  Virtual Days:   {:.1}", config.virtual_days());
        println!("  Threat:         {}", config.threat.config().label);
        println!("  Auto-buy:       {}", config.auto_buy);
        if let Some(seed) = config.seed {
            println!("  Seed:           {}", seed);
        }
        println!();
    }

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.ticks = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--speed" => {
                if i + 1 < args.len() {
                    config.speed = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "-a" | "--archetype" => {
                if i + 1 < args.len() {
                    config.archetype = args[i + 1].clone();
                    i += 1;
                }
            }
            "--threat" => {
                if i + 1 < args.len() {
                    config.threat = ThreatLevel::parse(&args[i + 1]).unwrap_or_default();
                    i += 1;
                }
            }
            "--no-auto-buy" => {
                config.auto_buy = false;
            }
            "--year" => {
                let seed = config.seed;
                config = SimConfig {
                    seed,
                    ..SimConfig::one_year()
                };
            }
            "--json" => {
                json = true;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--version" => {
                println!("{}", build_info::version_string("simulate"));
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Wireframe Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --ticks <T>       Real-time ticks to run (default: 100,000)");
    println!("    --speed <N>           Speed preset 1, 50 or 500 (default: 50)");
    println!("    -a, --archetype <ID>  Starting archetype j1..j7 (default: j1)");
    println!("    --threat <LEVEL>      1-6 or SAFE..SUICIDAL (default: STANDARD)");
    println!("    --no-auto-buy         Disable hardware auto-buy");
    println!("    --year                About one virtual year at 500x");
    println!("    --json                Print the report as JSON");
    println!("    -v, --verbose         Print level-ups as they happen");
    println!("    -q, --quiet           Only the report");
    println!("    --version             Show version");
    println!("    -h, --help            Show this help");
}
