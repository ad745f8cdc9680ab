//! Quantum vault CLI - binary entry point and menu shell.
//!
//! # Architecture
//!
//! The binary is IO glue around [`vault_engine::Session`]: it owns stdin and
//! stdout, while the engine owns the inventory and the failure-propagation
//! contract.
//!
//! ```text
//! main() -> menu loop -> Command::parse -> Session op -> SessionEvent
//!                                                           |
//!                                                           v
//!                                          render to stdout | collapse banner
//! ```
//!
//! A `SessionEvent::Collapsed` ends the process with a normal (zero) exit
//! status: the collapse is a deliberate game-over, not a crash. Logs go to a
//! file, never to stdout/stderr, which carry the menu.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use vault_engine::{
    Command, RandomVariantSource, Session, SessionEvent, SessionPhase, command_specs,
};
use vault_types::ObjectId;

const BANNER: &str = "**************************************";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && fs::create_dir_all(parent).is_err()
        {
            continue;
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(&candidate) else {
            continue;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
        tracing::info!(path = %candidate.display(), "logging initialized");
        return;
    }

    // No writable log location: prefer "no logs" over corrupting the menu
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(data_dir) = dirs::data_local_dir() {
        candidates.push(
            data_dir
                .join("quantum-vault")
                .join("logs")
                .join("vault.log"),
        );
    }
    // Useful in constrained environments.
    candidates.push(PathBuf::from(".quantum-vault").join("logs").join("vault.log"));
    candidates
}

fn main() -> Result<()> {
    init_tracing();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut session = Session::new(RandomVariantSource::default());

    println!("Welcome to the Omega Sector Quantum Data Warehouse...");

    loop {
        print_menu()?;
        let Some(choice) = next_line(&mut input)? else {
            // EOF counts as a graceful exit.
            println!("Shutting down...");
            break;
        };

        match Command::parse(&choice) {
            Command::AddObject => render(&session.add_object()),
            Command::ListInventory => render(&session.list_inventory()),
            Command::Analyze => {
                let Some(id) = prompt_id("ID to analyze: ", &mut input)? else {
                    println!("Shutting down...");
                    break;
                };
                render(&session.analyze(&id));
            }
            Command::EmergencyCool => {
                let Some(id) = prompt_id("ID to cool: ", &mut input)? else {
                    println!("Shutting down...");
                    break;
                };
                render(&session.emergency_cool(&id));
            }
            Command::Exit => {
                session.close();
                println!("Shutting down...");
                break;
            }
            // No state change, no output: the loop re-prompts.
            Command::Unknown => {}
        }

        if session.phase() == SessionPhase::Halted {
            // Only a collapse gets here; the banner is already printed.
            break;
        }
    }

    Ok(())
}

fn print_menu() -> io::Result<()> {
    println!();
    println!("--- QUANTUM WAREHOUSE CONTROL PANEL ---");
    for spec in command_specs() {
        println!("{}. {}", spec.choice, spec.description);
    }
    print!("Your choice: ");
    io::stdout().flush()
}

fn next_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<String>> {
    match input.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn prompt_id(
    prompt: &str,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<ObjectId>> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(next_line(input)?.map(|line| ObjectId::new(line.trim())))
}

fn render(event: &SessionEvent) {
    match event {
        SessionEvent::ObjectAdded { kind, id } => {
            println!("{} added: {}", kind.label(), id);
        }
        SessionEvent::InventoryListed { lines } => {
            println!();
            println!("--- INVENTORY STATUS ---");
            for line in lines {
                println!("{line}");
            }
        }
        SessionEvent::Analyzed { stability, note, .. } => {
            if let Some(note) = note {
                println!("{note}");
            }
            println!("Current stability: {stability}");
        }
        SessionEvent::Cooled { message, status } => {
            println!("{message}");
            println!("{status}");
        }
        SessionEvent::CoolingRefused { .. } => {
            println!("This object cannot be cooled!");
        }
        SessionEvent::ObjectMissing(_) => {
            println!("Object not found!");
        }
        SessionEvent::Collapsed(failure) => {
            println!();
            println!("{BANNER}");
            println!("{failure}");
            println!("{BANNER}");
        }
        SessionEvent::Halted => {}
    }
}
