//! Keyword-matched symptom hints.

use super::{normalize_query, LookupError};

/// Keyword rules, checked in order; the first substring match wins.
const RULES: &[(&str, &str)] = &[
    ("headache", "Recommendation: Paracetamol 500mg, rest, hydrate."),
    (
        "fever",
        "Recommendation: Paracetamol; monitor temperature and see doctor if >38.5°C.",
    ),
    (
        "cough",
        "Recommendation: Stay hydrated; seek medical care if persistent.",
    ),
    (
        "pain",
        "Recommendation: Ibuprofen for inflammation/pain (if suitable).",
    ),
];

pub const DEFAULT_RECOMMENDATION: &str = "Please consult a doctor for accurate diagnosis.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomAdvice {
    /// The normalized (trimmed, lower-cased) symptom text.
    pub symptom: String,
    pub recommendation: &'static str,
}

pub fn check_symptom(input: &str) -> Result<SymptomAdvice, LookupError> {
    let symptom = normalize_query(input).ok_or(LookupError::EmptySymptom)?;
    let recommendation = RULES
        .iter()
        .find(|(keyword, _)| symptom.contains(*keyword))
        .map_or(DEFAULT_RECOMMENDATION, |(_, rec)| *rec);

    tracing::debug!(%symptom, recommendation, "symptom checked");
    Ok(SymptomAdvice {
        symptom,
        recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_match_case_insensitively() {
        let advice = check_symptom("  Bad HEADACHE since morning ").unwrap();
        assert_eq!(advice.symptom, "bad headache since morning");
        assert_eq!(
            advice.recommendation,
            "Recommendation: Paracetamol 500mg, rest, hydrate."
        );
    }

    #[test]
    fn earlier_rule_wins() {
        // both "fever" and "pain" appear; fever is checked first
        let advice = check_symptom("fever and joint pain").unwrap();
        assert!(advice.recommendation.contains("38.5°C"));
    }

    #[test]
    fn unknown_symptom_gets_default() {
        let advice = check_symptom("dizzy").unwrap();
        assert_eq!(advice.recommendation, DEFAULT_RECOMMENDATION);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(check_symptom("   "), Err(LookupError::EmptySymptom));
    }
}
