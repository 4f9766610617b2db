//! CLI `home` command.

use anyhow::Result;

use thrive::config::ThriveConfig;

use super::open_board;

pub fn home(config: &ThriveConfig) -> Result<()> {
    let board = open_board(config)?;
    let views = board.views();

    println!("Thrive Up");
    println!("{}", "=".repeat(40));
    println!();
    println!("Next reminders:");
    if views.preview.lines.is_empty() {
        println!("  (none yet, add one with `thrive remind add <name> <time>`)");
    } else {
        print!("{}", views.preview);
    }
    println!();
    println!("Quick actions:");
    println!("  thrive symptom <text>    get a hint for a symptom");
    println!("  thrive drug <name>       look up a drug");
    println!("  thrive search <query>    try drugs first, then symptoms");
    println!("  thrive ask <message>     ask the assistant");
    Ok(())
}
