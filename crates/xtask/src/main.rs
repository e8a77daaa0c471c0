//! Development tasks for the lane runner
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Clean, Simulate, TailLogs};

/// Development tasks for the lane runner
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the lane runner", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Monitor client logs in real-time
    TailLogs(TailLogs),

    /// Clean client logs
    Clean(Clean),

    /// Run a seeded headless simulation with an autopilot
    Simulate(Simulate),
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
    }
}
