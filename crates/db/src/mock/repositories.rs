use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAlert, DbMedication, DbReminder, DbUser, DbUserProfile};
use meditrack_core::models::{
    medication::{CreateMedicationRequest, UpdateMedicationRequest},
    profile::UpdateUserProfileRequest,
};

// Mock repositories for testing
mock! {
    pub UserRepo {
        pub async fn create_user(
            &self,
            platform_user_id: &'static str,
            name: Option<&'static str>,
            timezone: Option<&'static str>,
        ) -> eyre::Result<DbUser>;

        pub async fn get_user_by_platform_id(
            &self,
            platform_user_id: &'static str,
        ) -> eyre::Result<Option<DbUser>>;

        pub async fn update_user(
            &self,
            platform_user_id: &'static str,
            name: Option<&'static str>,
            timezone: Option<&'static str>,
        ) -> eyre::Result<Option<DbUser>>;
    }
}

mock! {
    pub MedicationRepo {
        pub async fn create_medications_batch(
            &self,
            medications: Vec<CreateMedicationRequest>,
        ) -> eyre::Result<Vec<DbMedication>>;

        pub async fn list_medications_by_user(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<Vec<DbMedication>>;

        pub async fn list_active_medications_by_user(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<Vec<DbMedication>>;

        pub async fn get_medication_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbMedication>>;

        pub async fn update_medication(
            &self,
            id: Uuid,
            patch: UpdateMedicationRequest,
        ) -> eyre::Result<Option<DbMedication>>;

        pub async fn delete_medication(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ProfileRepo {
        pub async fn get_or_create_profile(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<DbUserProfile>;

        pub async fn update_profile(
            &self,
            user_id: &'static str,
            patch: UpdateUserProfileRequest,
        ) -> eyre::Result<DbUserProfile>;

        pub async fn delete_profile(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ReminderRepo {
        pub async fn create_reminder(
            &self,
            medication_id: Uuid,
            remind_time: DateTime<Utc>,
            taken: bool,
        ) -> eyre::Result<DbReminder>;

        pub async fn get_reminders_by_medication_id(
            &self,
            medication_id: Uuid,
        ) -> eyre::Result<Vec<DbReminder>>;

        pub async fn get_reminder_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbReminder>>;

        pub async fn update_reminder(
            &self,
            id: Uuid,
            remind_time: Option<DateTime<Utc>>,
            taken: Option<bool>,
        ) -> eyre::Result<Option<DbReminder>>;

        pub async fn delete_reminder(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub AlertRepo {
        pub async fn create_alert(
            &self,
            user_id: &'static str,
            result: serde_json::Value,
        ) -> eyre::Result<DbAlert>;

        pub async fn get_alerts_by_user_id(
            &self,
            user_id: &'static str,
        ) -> eyre::Result<Vec<DbAlert>>;
    }
}
