//! Built-in drug reference.

use super::{normalize_query, LookupError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drug {
    pub name: &'static str,
    pub use_: &'static str,
    pub dose: &'static str,
    pub side_effects: &'static str,
    pub avoid_in: Option<&'static str>,
}

/// Keyed by lower-case name.
const DRUGS: &[(&str, Drug)] = &[
    (
        "paracetamol",
        Drug {
            name: "Paracetamol",
            use_: "Pain relief and fever reducer.",
            dose: "Usually 500mg every 4-6 hours (adult).",
            side_effects: "Rare: nausea, allergic reaction.",
            avoid_in: None,
        },
    ),
    (
        "ibuprofen",
        Drug {
            name: "Ibuprofen",
            use_: "Anti-inflammatory for pain and swelling.",
            dose: "200-400mg every 4-6 hours (adult).",
            side_effects: "Stomach upset, avoid if allergic.",
            avoid_in: None,
        },
    ),
    (
        "amoxicillin",
        Drug {
            name: "Amoxicillin",
            use_: "Antibiotic for bacterial infections.",
            dose: "Follow prescription.",
            side_effects: "Diarrhea, possible allergy.",
            avoid_in: None,
        },
    ),
    (
        "omeprazole",
        Drug {
            name: "Omeprazole",
            use_: "Reduces stomach acid (ulcer, reflux).",
            dose: "20 mg once daily.",
            side_effects: "Headache, low magnesium (long-term use).",
            avoid_in: Some("Severe liver disease (with caution)."),
        },
    ),
];

pub const NOT_FOUND_HINT: &str = "Drug not found in local DB. You can extend the DB later.";

/// Exact-name lookup, ignoring case and surrounding whitespace.
pub fn find_drug(query: &str) -> Option<&'static Drug> {
    let key = normalize_query(query)?;
    DRUGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, drug)| drug)
}

/// Like [`find_drug`] but distinguishes an empty query from an unknown name.
pub fn lookup_drug(query: &str) -> Result<&'static Drug, LookupError> {
    let key = normalize_query(query).ok_or(LookupError::EmptyDrugName)?;
    find_drug(&key).ok_or(LookupError::UnknownDrug(key))
}

/// Every drug in the reference, in table order.
pub fn all_drugs() -> impl Iterator<Item = &'static Drug> {
    DRUGS.iter().map(|(_, drug)| drug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let drug = lookup_drug("  IbuProfen\n").unwrap();
        assert_eq!(drug.name, "Ibuprofen");
        assert_eq!(drug.dose, "200-400mg every 4-6 hours (adult).");
    }

    #[test]
    fn omeprazole_is_reachable_and_has_cautions() {
        let drug = find_drug("omeprazole").unwrap();
        assert_eq!(drug.dose, "20 mg once daily.");
        assert!(drug.avoid_in.is_some());
    }

    #[test]
    fn partial_names_do_not_match() {
        assert_eq!(
            lookup_drug("para"),
            Err(LookupError::UnknownDrug("para".into()))
        );
    }

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(lookup_drug(""), Err(LookupError::EmptyDrugName));
        assert!(find_drug(" ").is_none());
    }

    #[test]
    fn table_keys_match_display_names() {
        for (key, drug) in DRUGS {
            assert_eq!(*key, drug.name.to_lowercase());
        }
        assert_eq!(all_drugs().count(), 4);
    }
}
