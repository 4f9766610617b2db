//! Symptom hints, the drug reference, and the quick search that picks
//! between them.

pub mod drugs;
pub mod symptoms;

pub use drugs::{find_drug, lookup_drug, Drug};
pub use symptoms::{check_symptom, SymptomAdvice};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Please enter a symptom.")]
    EmptySymptom,

    #[error("Please enter a drug name.")]
    EmptyDrugName,

    #[error("{}", drugs::NOT_FOUND_HINT)]
    UnknownDrug(String),
}

/// What the quick search resolved a query to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickSearchHit {
    Drug(&'static Drug),
    Symptom(SymptomAdvice),
}

/// Trim and lower-case; `None` if nothing is left.
pub(crate) fn normalize_query(input: &str) -> Option<String> {
    let q = input.trim().to_lowercase();
    (!q.is_empty()).then_some(q)
}

/// A known drug name opens the drug reference; anything else goes to the
/// symptom checker. Blank queries resolve to nothing.
pub fn quick_search(query: &str) -> Option<QuickSearchHit> {
    let q = normalize_query(query)?;
    match find_drug(&q) {
        Some(drug) => Some(QuickSearchHit::Drug(drug)),
        None => check_symptom(&q).ok().map(QuickSearchHit::Symptom),
    }
}
