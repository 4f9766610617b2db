//! CLI `remind` commands: add, list, and delete reminders.

use anyhow::{bail, Result};

use thrive::config::ThriveConfig;
use thrive::reminders::ReminderViews;

use super::open_board;

pub fn add(config: &ThriveConfig, name: &str, time: &str) -> Result<()> {
    let board = open_board(config)?;
    let (added, views) = board.add(name, time)?;
    println!("Added reminder: {}", added.label());
    println!();
    print_views(&views);
    Ok(())
}

pub fn list(config: &ThriveConfig) -> Result<()> {
    let board = open_board(config)?;
    print!("{}", board.views().list);
    Ok(())
}

/// Delete by the 1-based number shown in `remind list`.
pub fn delete(config: &ThriveConfig, number: usize) -> Result<()> {
    let index = row_index(number)?;
    let board = open_board(config)?;
    let (removed, views) = board.delete_at(index)?;
    println!("Deleted reminder: {}", removed.label());
    println!();
    print_views(&views);
    Ok(())
}

/// Position in the stored list for a row number printed by `remind list`.
fn row_index(number: usize) -> Result<usize> {
    let Some(index) = number.checked_sub(1) else {
        bail!("reminder numbers start at 1");
    };
    Ok(index)
}

fn print_views(views: &ReminderViews) {
    println!("Reminders");
    println!("{}", "=".repeat(40));
    print!("{}", views.list);
    if !views.preview.lines.is_empty() {
        println!();
        println!("Next up:");
        print!("{}", views.preview);
    }
}
