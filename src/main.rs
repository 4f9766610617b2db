mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use thrive::config::ThriveConfig;

#[derive(Parser)]
#[command(name = "thrive", version, about = "Medication reminders, symptom hints, and a drug reference")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the next reminders and what else Thrive can do
    Home,
    /// Manage medication reminders
    Remind {
        #[command(subcommand)]
        action: RemindAction,
    },
    /// Get a hint for a symptom
    Symptom {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Look up a drug in the built-in reference
    Drug { name: String },
    /// Search drugs first, then symptoms
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Ask the assistant
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Check the database and the stored reminders
    Doctor,
    /// Delete all reminders
    Reset,
}

#[derive(Subcommand)]
enum RemindAction {
    /// Add a reminder
    Add {
        /// Medication name
        name: String,
        /// Time of day, e.g. 08:00
        time: String,
    },
    /// List all reminders
    List,
    /// Delete a reminder by its number in `remind list`
    Delete { number: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ThriveConfig::load()?;

    // Log to stderr so stdout carries only command output.
    let filter = EnvFilter::try_new(&config.logging.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Home => cli::home::home(&config)?,
        Command::Remind { action } => match action {
            RemindAction::Add { name, time } => cli::remind::add(&config, &name, &time)?,
            RemindAction::List => cli::remind::list(&config)?,
            RemindAction::Delete { number } => cli::remind::delete(&config, number)?,
        },
        Command::Symptom { text } => cli::lookup::symptom(&text.join(" "))?,
        Command::Drug { name } => cli::lookup::drug(&name)?,
        Command::Search { query } => cli::lookup::search(&query.join(" ")),
        Command::Ask { message } => cli::ask::ask(&config, &message.join(" "))?,
        Command::Doctor => cli::doctor::doctor(&config)?,
        Command::Reset => cli::reset::reset(&config)?,
    }

    Ok(())
}
