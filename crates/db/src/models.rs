use chrono::{DateTime, NaiveDate, Utc};
use meditrack_core::models::medication::{MedicationStatus, RemindTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub platform_user_id: String,
    pub name: Option<String>,
    pub timezone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMedication {
    pub id: Uuid,
    pub user_id: String,
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub effect: String,
    pub remind_times: Json<Vec<RemindTime>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbMedication {
    pub fn status(&self) -> MedicationStatus {
        MedicationStatus::parse(&self.status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUserProfile {
    pub id: Uuid,
    pub user_id: String,

    pub diet_alcohol: bool,
    pub diet_caffeine: bool,
    pub diet_grapefruit: bool,
    pub diet_milk: bool,
    pub diet_high_fat: bool,
    pub diet_high_vitamin_k: bool,
    pub diet_tyramine: bool,

    pub supp_st_johns_wort: bool,
    pub supp_ginkgo: bool,
    pub supp_ginseng: bool,
    pub supp_garlic: bool,
    pub supp_grape_seed: bool,
    pub supp_fish_oil: bool,
    pub supp_omega3: bool,
    pub supp_licorice: bool,
    pub supp_red_yeast_rice: bool,

    pub history_asthma: bool,
    pub history_diabetes: bool,
    pub history_hypertension: bool,
    pub history_liver_dysfunction: bool,
    pub history_kidney_dysfunction: bool,
    pub history_gastric_ulcer: bool,
    pub history_epilepsy: bool,
    pub history_arrhythmia: bool,

    pub condition_pregnancy: bool,
    pub condition_breastfeeding: bool,
    pub condition_infant: bool,
    pub condition_elderly: bool,
    pub condition_obesity: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DbUserProfile> for meditrack_core::models::profile::UserProfile {
    fn from(profile: DbUserProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            diet_alcohol: profile.diet_alcohol,
            diet_caffeine: profile.diet_caffeine,
            diet_grapefruit: profile.diet_grapefruit,
            diet_milk: profile.diet_milk,
            diet_high_fat: profile.diet_high_fat,
            diet_high_vitamin_k: profile.diet_high_vitamin_k,
            diet_tyramine: profile.diet_tyramine,
            supp_st_johns_wort: profile.supp_st_johns_wort,
            supp_ginkgo: profile.supp_ginkgo,
            supp_ginseng: profile.supp_ginseng,
            supp_garlic: profile.supp_garlic,
            supp_grape_seed: profile.supp_grape_seed,
            supp_fish_oil: profile.supp_fish_oil,
            supp_omega3: profile.supp_omega3,
            supp_licorice: profile.supp_licorice,
            supp_red_yeast_rice: profile.supp_red_yeast_rice,
            history_asthma: profile.history_asthma,
            history_diabetes: profile.history_diabetes,
            history_hypertension: profile.history_hypertension,
            history_liver_dysfunction: profile.history_liver_dysfunction,
            history_kidney_dysfunction: profile.history_kidney_dysfunction,
            history_gastric_ulcer: profile.history_gastric_ulcer,
            history_epilepsy: profile.history_epilepsy,
            history_arrhythmia: profile.history_arrhythmia,
            condition_pregnancy: profile.condition_pregnancy,
            condition_breastfeeding: profile.condition_breastfeeding,
            condition_infant: profile.condition_infant,
            condition_elderly: profile.condition_elderly,
            condition_obesity: profile.condition_obesity,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReminder {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub remind_time: DateTime<Utc>,
    pub taken: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAlert {
    pub id: Uuid,
    pub user_id: String,
    pub alert_time: DateTime<Utc>,
    pub result: serde_json::Value,
}
