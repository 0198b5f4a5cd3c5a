use chrono::Utc;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use wireframe::build_info;
use wireframe::console::CommandOutcome;
use wireframe::core::clock::format_clock;
use wireframe::core::constants::REAL_TICK_INTERVAL_MS;
use wireframe::core::{Engine, RandomSource, TickContext};
use wireframe::save::SaveManager;

struct Options {
    new_archetype: Option<String>,
    save_path: Option<PathBuf>,
    speed: Option<u32>,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);
    init_tracing();

    let manager = match &options.save_path {
        Some(path) => SaveManager::at_path(path.clone()),
        None => SaveManager::new()?,
    };

    let mut engine = Engine::new(rand::thread_rng());
    if options.new_archetype.is_none() && manager.save_exists() {
        match manager.load() {
            Ok(state) => engine.load(state),
            Err(e) => {
                warn!(error = %e, "save could not be loaded");
                eprintln!("Could not load {}: {}", manager.path().display(), e);
                eprintln!("Starting a new session instead.");
            }
        }
    }
    if !engine.has_state() {
        let archetype = options.new_archetype.as_deref().unwrap_or("j1");
        if let Err(e) = engine.start_new(archetype) {
            eprintln!("Cannot start as {}: {}", archetype, e);
            std::process::exit(2);
        }
    }
    if let Some(speed) = options.speed {
        if let Err(e) = engine.set_speed(speed) {
            eprintln!("{}", e);
        }
    }

    let input = spawn_stdin_reader();
    run(&mut engine, &input);

    if let Some(state) = engine.state() {
        match manager.save(state) {
            Ok(()) => println!("Saved to {}", manager.path().display()),
            Err(e) => {
                eprintln!("Save failed: {}", e);
                return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
            }
        }
    }
    Ok(())
}

/// Real-time driver: one tick per interval, console lines between ticks.
fn run<R: RandomSource>(engine: &mut Engine<R>, input: &Receiver<String>) {
    let interval = Duration::from_millis(REAL_TICK_INTERVAL_MS);
    let mut printed = 0;

    'running: loop {
        let started = Instant::now();

        loop {
            match input.try_recv() {
                Ok(line) => {
                    if engine.command(&line) == CommandOutcome::Exit {
                        break 'running;
                    }
                }
                Err(TryRecvError::Empty) => break,
                // stdin closed
                Err(TryRecvError::Disconnected) => break 'running,
            }
        }

        engine.tick(&TickContext {
            real_now_ms: Utc::now().timestamp_millis(),
        });
        printed = print_new_entries(engine, printed);

        if let Some(remaining) = interval.checked_sub(started.elapsed()) {
            thread::sleep(remaining);
        }
    }
    print_new_entries(engine, printed);
}

/// Prints log entries from `since` on. Returns the next unprinted sequence number.
fn print_new_entries<R: RandomSource>(engine: &Engine<R>, since: u64) -> u64 {
    let Some(state) = engine.state() else {
        return since;
    };
    for entry in state.log.since(since) {
        println!(
            "[{}] {:<8} {}",
            format_clock(entry.virtual_time),
            entry.tag,
            entry.message
        );
    }
    state.log.next_seq()
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        new_archetype: None,
        save_path: None,
        speed: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string("wireframe"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--new" => {
                if i + 1 < args.len() {
                    options.new_archetype = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--save" => {
                if i + 1 < args.len() {
                    options.save_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--speed" => {
                if i + 1 < args.len() {
                    options.speed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'wireframe --help' for usage.");
                std::process::exit(2);
            }
        }
        i += 1;
    }
    options
}

fn print_help() {
    println!("Wireframe - idle hacking terminal");
    println!();
    println!("USAGE:");
    println!("    wireframe [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --new <ID>        Start a new session as archetype j1..j7");
    println!("    --save <PATH>     Save file (default: config directory)");
    println!("    --speed <N>       Game speed: 0, 1, 50 or 500");
    println!("    -v, --version     Show version");
    println!("    -h, --help        Show this help");
    println!();
    println!("Type 'help' at the prompt for terminal commands.");
    println!("Diagnostics go to stderr; set RUST_LOG=debug for more.");
}
