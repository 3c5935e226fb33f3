use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use sqlx::types::Json;
use uuid::Uuid;

use meditrack_core::{
    errors::MedError,
    models::medication::{
        CreateMedicationRequest, MedicationResponse, MedicationStatus, RemindTime,
        UpdateMedicationRequest,
    },
};
use meditrack_db::models::DbMedication;

use crate::test_utils::TestContext;
use meditrack_api::middleware::error_handling::AppError;

fn create_request(user_id: &str, name: &str) -> CreateMedicationRequest {
    CreateMedicationRequest {
        user_id: user_id.to_string(),
        name: name.to_string(),
        dose: "100mg".to_string(),
        frequency: "once daily".to_string(),
        effect: "pain relief".to_string(),
        remind_times: vec![RemindTime { hour: 9, minute: 0 }],
        start_date: NaiveDate::from_ymd_opt(2025, 6, 1),
        end_date: None,
        status: MedicationStatus::InProgress,
    }
}

fn db_medication_from(request: &CreateMedicationRequest) -> DbMedication {
    DbMedication {
        id: Uuid::new_v4(),
        user_id: request.user_id.clone(),
        name: request.name.clone(),
        dose: request.dose.clone(),
        frequency: request.frequency.clone(),
        effect: request.effect.clone(),
        remind_times: Json(request.remind_times.clone()),
        start_date: request.start_date,
        end_date: request.end_date,
        status: request.status.as_str().to_string(),
        created_at: Utc::now(),
    }
}

fn medication_response(medication: DbMedication) -> MedicationResponse {
    let status = MedicationStatus::parse(&medication.status);
    MedicationResponse {
        id: medication.id,
        user_id: medication.user_id,
        name: medication.name,
        dose: medication.dose,
        frequency: medication.frequency,
        effect: medication.effect,
        remind_times: medication.remind_times.0,
        start_date: medication.start_date,
        end_date: medication.end_date,
        status,
    }
}

// Mirrors the handler's batch-create logic against the mock repository
async fn test_create_batch_wrapper(
    ctx: &mut TestContext,
    items: Vec<CreateMedicationRequest>,
) -> Result<Vec<MedicationResponse>, AppError> {
    for item in &items {
        if item.user_id.is_empty() {
            return Err(AppError(MedError::Validation(
                "Every medication record must include a user_id".to_string(),
            )));
        }
        if item.name.is_empty() {
            return Err(AppError(MedError::Validation(
                "Every medication record must include a name".to_string(),
            )));
        }
    }

    let created = ctx.medication_repo.create_medications_batch(items).await?;
    Ok(created.into_iter().map(medication_response).collect())
}

async fn test_delete_wrapper(ctx: &mut TestContext, id: Uuid) -> Result<(), AppError> {
    let deleted = ctx.medication_repo.delete_medication(id).await?;
    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Medication with ID {} not found",
            id
        ))));
    }
    Ok(())
}

#[tokio::test]
async fn test_batch_without_user_id_fails_before_any_insert() {
    let mut ctx = TestContext::new();

    // The repository must never be reached when validation fails
    ctx.medication_repo.expect_create_medications_batch().times(0);

    let items = vec![create_request("U1", "Aspirin"), create_request("", "Warfarin")];
    let result = test_create_batch_wrapper(&mut ctx, items).await;

    match result {
        Err(AppError(MedError::Validation(message))) => {
            assert!(message.contains("user_id"));
        }
        other => panic!("Expected a validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_batch_without_name_fails_before_any_insert() {
    let mut ctx = TestContext::new();

    ctx.medication_repo.expect_create_medications_batch().times(0);

    let items = vec![create_request("U1", "")];
    let result = test_create_batch_wrapper(&mut ctx, items).await;

    assert!(matches!(result, Err(AppError(MedError::Validation(_)))));
}

#[tokio::test]
async fn test_batch_create_returns_all_rows() {
    let mut ctx = TestContext::new();

    ctx.medication_repo
        .expect_create_medications_batch()
        .times(1)
        .returning(|items| Ok(items.iter().map(db_medication_from).collect()));

    let items = vec![create_request("U1", "Aspirin"), create_request("U1", "Metformin")];
    let created = test_create_batch_wrapper(&mut ctx, items).await.unwrap();

    assert_eq!(created.len(), 2);
    assert_eq!(created[0].name, "Aspirin");
    assert_eq!(created[1].name, "Metformin");
}

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let mut ctx = TestContext::new();

    let request = create_request("U1", "Aspirin");
    let stored = db_medication_from(&request);
    let stored_clone = stored.clone();

    ctx.medication_repo
        .expect_create_medications_batch()
        .times(1)
        .returning(move |_| Ok(vec![stored.clone()]));
    ctx.medication_repo
        .expect_get_medication_by_id()
        .times(1)
        .returning(move |_| Ok(Some(stored_clone.clone())));

    let created = test_create_batch_wrapper(&mut ctx, vec![request.clone()])
        .await
        .unwrap();
    let fetched = ctx
        .medication_repo
        .get_medication_by_id(created[0].id)
        .await
        .unwrap()
        .map(medication_response)
        .unwrap();

    // Field-for-field identical, server-assigned id aside
    assert_eq!(fetched.user_id, request.user_id);
    assert_eq!(fetched.name, request.name);
    assert_eq!(fetched.dose, request.dose);
    assert_eq!(fetched.frequency, request.frequency);
    assert_eq!(fetched.effect, request.effect);
    assert_eq!(fetched.remind_times, request.remind_times);
    assert_eq!(fetched.start_date, request.start_date);
    assert_eq!(fetched.end_date, request.end_date);
    assert_eq!(fetched.status, request.status);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let mut ctx = TestContext::new();

    let existing = db_medication_from(&create_request("U1", "Aspirin"));
    let existing_clone = existing.clone();

    // Repository merge semantics: absent patch fields keep stored values
    ctx.medication_repo
        .expect_update_medication()
        .times(1)
        .returning(move |_, patch| {
            let mut merged = existing_clone.clone();
            if let Some(name) = patch.name {
                merged.name = name;
            }
            if let Some(dose) = patch.dose {
                merged.dose = dose;
            }
            if let Some(frequency) = patch.frequency {
                merged.frequency = frequency;
            }
            if let Some(effect) = patch.effect {
                merged.effect = effect;
            }
            if let Some(remind_times) = patch.remind_times {
                merged.remind_times = Json(remind_times);
            }
            if let Some(status) = patch.status {
                merged.status = status.as_str().to_string();
            }
            Ok(Some(merged))
        });

    let patch = UpdateMedicationRequest {
        dose: Some("200mg".to_string()),
        ..Default::default()
    };

    let updated = ctx
        .medication_repo
        .update_medication(existing.id, patch)
        .await
        .unwrap()
        .map(medication_response)
        .unwrap();

    assert_eq!(updated.dose, "200mg");
    assert_eq!(updated.name, existing.name);
    assert_eq!(updated.frequency, existing.frequency);
    assert_eq!(updated.effect, existing.effect);
    assert_eq!(updated.remind_times, existing.remind_times.0);
    assert_eq!(updated.status, MedicationStatus::InProgress);
}

#[tokio::test]
async fn test_delete_nonexistent_medication_is_not_found() {
    let mut ctx = TestContext::new();

    ctx.medication_repo
        .expect_delete_medication()
        .times(1)
        .returning(|_| Ok(false));

    let result = test_delete_wrapper(&mut ctx, Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError(MedError::NotFound(_)))));
}
