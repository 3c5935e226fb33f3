use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use meditrack_core::{
    errors::MedError,
    models::profile::{UpdateUserProfileRequest, UserProfile},
};
use meditrack_db::models::DbUserProfile;

use crate::test_utils::TestContext;
use meditrack_api::middleware::error_handling::AppError;

fn default_profile(user_id: &str) -> DbUserProfile {
    DbUserProfile {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        diet_alcohol: false,
        diet_caffeine: false,
        diet_grapefruit: false,
        diet_milk: false,
        diet_high_fat: false,
        diet_high_vitamin_k: false,
        diet_tyramine: false,
        supp_st_johns_wort: false,
        supp_ginkgo: false,
        supp_ginseng: false,
        supp_garlic: false,
        supp_grape_seed: false,
        supp_fish_oil: false,
        supp_omega3: false,
        supp_licorice: false,
        supp_red_yeast_rice: false,
        history_asthma: false,
        history_diabetes: false,
        history_hypertension: false,
        history_liver_dysfunction: false,
        history_kidney_dysfunction: false,
        history_gastric_ulcer: false,
        history_epilepsy: false,
        history_arrhythmia: false,
        condition_pregnancy: false,
        condition_breastfeeding: false,
        condition_infant: false,
        condition_elderly: false,
        condition_obesity: false,
        created_at: Utc::now(),
        updated_at: None,
    }
}

async fn test_delete_wrapper(ctx: &mut TestContext, user_id: &'static str) -> Result<(), AppError> {
    let deleted = ctx.profile_repo.delete_profile(user_id).await?;
    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Profile for user {} not found",
            user_id
        ))));
    }
    Ok(())
}

#[tokio::test]
async fn test_first_read_auto_creates_all_false_profile() {
    let mut ctx = TestContext::new();

    ctx.profile_repo
        .expect_get_or_create_profile()
        .times(1)
        .returning(|user_id| Ok(default_profile(user_id)));

    let profile: UserProfile = ctx
        .profile_repo
        .get_or_create_profile("U1")
        .await
        .unwrap()
        .into();

    assert_eq!(profile.user_id, "U1");
    assert!(profile.diet_labels().is_empty());
    assert!(profile.supplement_labels().is_empty());
    assert!(profile.history_labels().is_empty());
    assert!(profile.condition_labels().is_empty());
}

#[tokio::test]
async fn test_update_applies_only_supplied_flags() {
    let mut ctx = TestContext::new();

    ctx.profile_repo
        .expect_update_profile()
        .times(1)
        .returning(|user_id, patch| {
            let mut profile = default_profile(user_id);
            if let Some(value) = patch.diet_alcohol {
                profile.diet_alcohol = value;
            }
            if let Some(value) = patch.history_diabetes {
                profile.history_diabetes = value;
            }
            if let Some(value) = patch.condition_pregnancy {
                profile.condition_pregnancy = value;
            }
            profile.updated_at = Some(Utc::now());
            Ok(profile)
        });

    let patch = UpdateUserProfileRequest {
        diet_alcohol: Some(true),
        condition_pregnancy: Some(true),
        ..Default::default()
    };

    let profile: UserProfile = ctx
        .profile_repo
        .update_profile("U1", patch)
        .await
        .unwrap()
        .into();

    assert!(profile.diet_alcohol);
    assert!(profile.condition_pregnancy);
    // Untouched flags stay false
    assert!(!profile.history_diabetes);
    assert!(!profile.diet_caffeine);
    assert!(profile.updated_at.is_some());
}

#[tokio::test]
async fn test_delete_missing_profile_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.profile_repo
        .expect_delete_profile()
        .times(1)
        .returning(|_| Ok(false));

    let result = test_delete_wrapper(&mut ctx, "U404").await;

    assert!(matches!(result, Err(AppError(MedError::NotFound(_)))));
}
