//! Clean client logs command
//!
//! Removes either one session's logs or the whole log directory. Prompts for
//! confirmation unless `-y` is passed.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::io::{self, Write};

use crate::dirs;

/// Clean client logs
#[derive(Parser, Debug)]
pub struct Clean {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Specific session to clean (defaults to all sessions)
    #[arg(long)]
    pub session: Option<String>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let log_dir = dirs::log_dir();

        let (label, target) = match self.session.as_deref() {
            Some(session_id) => {
                let session_dir = log_dir.join(session_id);
                if !session_dir.exists() {
                    eprintln!(
                        "{} Session not found: {}",
                        style("✗").red().bold(),
                        style(session_id).cyan()
                    );
                    anyhow::bail!("Session directory does not exist");
                }
                (format!("Session logs ({})", session_id), session_dir)
            }
            None => {
                if !log_dir.exists() {
                    println!("{}", style("Nothing to clean - no logs yet").dim());
                    return Ok(());
                }
                let count = dirs::list_sessions(&log_dir)?.len();
                (format!("All logs ({} sessions)", count), log_dir)
            }
        };

        println!("{}", style("Clean lane-runner logs").yellow().bold());
        println!();
        println!("The following will be deleted:");
        println!("  {} {}", style("→").cyan(), style(&label).bold());
        println!("    {}", style(target.display()).dim());
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        print!("Deleting {}... ", label);
        io::stdout().flush()?;
        std::fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to delete: {}", target.display()))?;
        println!("{}", style("✓").green());

        Ok(())
    }
}

fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
