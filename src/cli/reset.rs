//! CLI `reset` command: delete all reminders after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use thrive::config::ThriveConfig;

use super::open_board;

pub fn reset(config: &ThriveConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL reminders.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let board = open_board(config)?;
    board.store().clear()?;

    println!("All reminders deleted.");
    Ok(())
}
