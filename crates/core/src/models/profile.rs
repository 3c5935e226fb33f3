use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-user health profile: a fixed set of boolean flags grouped into diet
/// triggers, supplement/herbal use, medical history and special
/// physiological states. All flags default to false; a row is auto-created
/// on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: String,

    // Dietary habits
    pub diet_alcohol: bool,
    pub diet_caffeine: bool,
    pub diet_grapefruit: bool,
    pub diet_milk: bool,
    pub diet_high_fat: bool,
    pub diet_high_vitamin_k: bool,
    pub diet_tyramine: bool,

    // Supplements / herbal medicine currently in use
    pub supp_st_johns_wort: bool,
    pub supp_ginkgo: bool,
    pub supp_ginseng: bool,
    pub supp_garlic: bool,
    pub supp_grape_seed: bool,
    pub supp_fish_oil: bool,
    pub supp_omega3: bool,
    pub supp_licorice: bool,
    pub supp_red_yeast_rice: bool,

    // Medical history
    pub history_asthma: bool,
    pub history_diabetes: bool,
    pub history_hypertension: bool,
    pub history_liver_dysfunction: bool,
    pub history_kidney_dysfunction: bool,
    pub history_gastric_ulcer: bool,
    pub history_epilepsy: bool,
    pub history_arrhythmia: bool,

    // Special physiological states
    pub condition_pregnancy: bool,
    pub condition_breastfeeding: bool,
    pub condition_infant: bool,
    pub condition_elderly: bool,
    pub condition_obesity: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Human-readable labels for the diet flags that are set.
    pub fn diet_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.diet_alcohol {
            labels.push("alcohol");
        }
        if self.diet_caffeine {
            labels.push("caffeine");
        }
        if self.diet_grapefruit {
            labels.push("grapefruit");
        }
        if self.diet_milk {
            labels.push("milk/dairy");
        }
        if self.diet_high_fat {
            labels.push("high-fat meals");
        }
        if self.diet_high_vitamin_k {
            labels.push("high vitamin K foods");
        }
        if self.diet_tyramine {
            labels.push("tyramine-rich foods");
        }
        labels
    }

    /// Human-readable labels for the supplement flags that are set.
    pub fn supplement_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.supp_st_johns_wort {
            labels.push("St. John's wort");
        }
        if self.supp_ginkgo {
            labels.push("ginkgo");
        }
        if self.supp_ginseng {
            labels.push("ginseng");
        }
        if self.supp_garlic {
            labels.push("garlic");
        }
        if self.supp_grape_seed {
            labels.push("grape seed");
        }
        if self.supp_fish_oil {
            labels.push("fish oil");
        }
        if self.supp_omega3 {
            labels.push("omega-3");
        }
        if self.supp_licorice {
            labels.push("licorice");
        }
        if self.supp_red_yeast_rice {
            labels.push("red yeast rice");
        }
        labels
    }

    /// Human-readable labels for the medical-history flags that are set.
    pub fn history_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.history_asthma {
            labels.push("asthma");
        }
        if self.history_diabetes {
            labels.push("diabetes");
        }
        if self.history_hypertension {
            labels.push("hypertension");
        }
        if self.history_liver_dysfunction {
            labels.push("liver dysfunction");
        }
        if self.history_kidney_dysfunction {
            labels.push("kidney dysfunction");
        }
        if self.history_gastric_ulcer {
            labels.push("gastric ulcer or GI bleeding");
        }
        if self.history_epilepsy {
            labels.push("epilepsy");
        }
        if self.history_arrhythmia {
            labels.push("arrhythmia");
        }
        labels
    }

    /// Human-readable labels for the physiological-state flags that are set.
    pub fn condition_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.condition_pregnancy {
            labels.push("pregnancy");
        }
        if self.condition_breastfeeding {
            labels.push("breastfeeding");
        }
        if self.condition_infant {
            labels.push("infant");
        }
        if self.condition_elderly {
            labels.push("elderly");
        }
        if self.condition_obesity {
            labels.push("obesity");
        }
        labels
    }
}

/// Patch semantics: only supplied flags are applied. Unknown keys are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserProfileRequest {
    // Dietary habits
    pub diet_alcohol: Option<bool>,
    pub diet_caffeine: Option<bool>,
    pub diet_grapefruit: Option<bool>,
    pub diet_milk: Option<bool>,
    pub diet_high_fat: Option<bool>,
    pub diet_high_vitamin_k: Option<bool>,
    pub diet_tyramine: Option<bool>,

    // Supplements / herbal medicine currently in use
    pub supp_st_johns_wort: Option<bool>,
    pub supp_ginkgo: Option<bool>,
    pub supp_ginseng: Option<bool>,
    pub supp_garlic: Option<bool>,
    pub supp_grape_seed: Option<bool>,
    pub supp_fish_oil: Option<bool>,
    pub supp_omega3: Option<bool>,
    pub supp_licorice: Option<bool>,
    pub supp_red_yeast_rice: Option<bool>,

    // Medical history
    pub history_asthma: Option<bool>,
    pub history_diabetes: Option<bool>,
    pub history_hypertension: Option<bool>,
    pub history_liver_dysfunction: Option<bool>,
    pub history_kidney_dysfunction: Option<bool>,
    pub history_gastric_ulcer: Option<bool>,
    pub history_epilepsy: Option<bool>,
    pub history_arrhythmia: Option<bool>,

    // Special physiological states
    pub condition_pregnancy: Option<bool>,
    pub condition_breastfeeding: Option<bool>,
    pub condition_infant: Option<bool>,
    pub condition_elderly: Option<bool>,
    pub condition_obesity: Option<bool>,
}
