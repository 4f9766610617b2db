//! CLI `symptom`, `drug`, and `search` commands.

use anyhow::Result;

use thrive::lookup::{self, Drug, LookupError, QuickSearchHit, SymptomAdvice};

pub fn symptom(text: &str) -> Result<()> {
    let advice = lookup::check_symptom(text)?;
    print_advice(&advice);
    Ok(())
}

pub fn drug(name: &str) -> Result<()> {
    match lookup::lookup_drug(name) {
        Ok(drug) => print_drug(drug),
        Err(LookupError::UnknownDrug(_)) => {
            println!("Not found");
            println!("  {}", lookup::drugs::NOT_FOUND_HINT);
            println!(
                "  Known drugs: {}",
                lookup::drugs::all_drugs()
                    .map(|d| d.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Blank queries print nothing.
pub fn search(query: &str) {
    match lookup::quick_search(query) {
        Some(QuickSearchHit::Drug(drug)) => print_drug(drug),
        Some(QuickSearchHit::Symptom(advice)) => print_advice(&advice),
        None => {}
    }
}

fn print_advice(advice: &SymptomAdvice) {
    println!("Symptom");
    println!("  {}", advice.symptom);
    println!("{}", "-".repeat(40));
    println!("{}", advice.recommendation);
}

fn print_drug(drug: &Drug) {
    println!("💊 {}", drug.name);
    println!("  Use:           {}", drug.use_);
    println!("  Dose:          {}", drug.dose);
    println!("  Side effects:  {}", drug.side_effects);
    if let Some(avoid) = drug.avoid_in {
        println!("  Avoid in:      {avoid}");
    }
}
