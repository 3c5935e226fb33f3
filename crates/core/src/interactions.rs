use serde::{Deserialize, Serialize};

/// Known interacting pairs, checked by exact name match. Deliberately a
/// tiny illustrative list; expanding it needs a proper drug database.
const KNOWN_INTERACTIONS: &[(&str, &str)] = &[
    ("Aspirin", "Warfarin"),
    ("Clopidogrel", "Omeprazole"),
];

pub const INTERACTION_DISCLAIMER: &str =
    "For reference only. Always consult a physician or pharmacist before acting on this information.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionReport {
    pub interaction: bool,
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

/// Checks a list of medication names against the known-pair list.
pub fn check_known_interactions(medication_names: &[String]) -> InteractionReport {
    let mut warnings = Vec::new();

    for (a, b) in KNOWN_INTERACTIONS {
        let has_a = medication_names.iter().any(|name| name == a);
        let has_b = medication_names.iter().any(|name| name == b);
        if has_a && has_b {
            warnings.push(format!("{} and {} may interact", a, b));
        }
    }

    InteractionReport {
        interaction: !warnings.is_empty(),
        warnings,
        disclaimer: INTERACTION_DISCLAIMER.to_string(),
    }
}
