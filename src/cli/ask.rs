//! CLI `ask` command: one assistant exchange, then the section it pointed at.

use anyhow::Result;

use thrive::assistant::{self, Section};
use thrive::config::ThriveConfig;

pub fn ask(config: &ThriveConfig, message: &str) -> Result<()> {
    let Some(reply) = assistant::respond(message) else {
        return Ok(());
    };

    println!("> {}", message.trim());
    println!("{}", reply.text);

    if let Some(section) = reply.navigate_to {
        println!();
        show_section(config, section)?;
    }
    Ok(())
}

fn show_section(config: &ThriveConfig, section: Section) -> Result<()> {
    match section {
        Section::Home => super::home::home(config),
        Section::Reminder => super::remind::list(config),
        Section::Symptoms => {
            println!("Describe a symptom with `thrive symptom <text>`.");
            Ok(())
        }
        Section::DrugInfo => {
            println!("Look up a drug with `thrive drug <name>`.");
            Ok(())
        }
    }
}
