use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use meditrack_core::errors::MedError;
use meditrack_db::models::DbReminder;

use crate::test_utils::TestContext;
use meditrack_api::middleware::error_handling::AppError;
use meditrack_api::scheduler::{ReminderScheduler, reminder_job_key};

fn reminder(medication_id: Uuid) -> DbReminder {
    DbReminder {
        id: Uuid::new_v4(),
        medication_id,
        remind_time: Utc::now() + Duration::hours(1),
        taken: false,
        created_at: Utc::now(),
    }
}

async fn test_delete_wrapper(
    ctx: &mut TestContext,
    scheduler: &ReminderScheduler,
    id: Uuid,
) -> Result<(), AppError> {
    scheduler.cancel(&reminder_job_key(id));

    let deleted = ctx.reminder_repo.delete_reminder(id).await?;
    if !deleted {
        return Err(AppError(MedError::NotFound(format!(
            "Reminder with ID {} not found",
            id
        ))));
    }
    Ok(())
}

#[tokio::test]
async fn test_create_reminder_schedules_a_job() {
    let mut ctx = TestContext::new();
    let scheduler = ReminderScheduler::new();
    scheduler.start();

    let medication_id = Uuid::new_v4();
    ctx.reminder_repo
        .expect_create_reminder()
        .times(1)
        .returning(|medication_id, remind_time, taken| {
            Ok(DbReminder {
                id: Uuid::new_v4(),
                medication_id,
                remind_time,
                taken,
                created_at: Utc::now(),
            })
        });

    let created = ctx
        .reminder_repo
        .create_reminder(medication_id, Utc::now() + Duration::hours(1), false)
        .await
        .unwrap();

    scheduler.schedule_at(&reminder_job_key(created.id), created.remind_time, async {});

    assert_eq!(scheduler.pending_jobs(), 1);
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let mut ctx = TestContext::new();

    let existing = reminder(Uuid::new_v4());
    let existing_clone = existing.clone();

    ctx.reminder_repo
        .expect_update_reminder()
        .times(1)
        .returning(move |_, remind_time, taken| {
            let mut merged = existing_clone.clone();
            merged.remind_time = remind_time.unwrap_or(merged.remind_time);
            merged.taken = taken.unwrap_or(merged.taken);
            Ok(Some(merged))
        });

    let updated = ctx
        .reminder_repo
        .update_reminder(existing.id, None, Some(true))
        .await
        .unwrap()
        .unwrap();

    assert!(updated.taken);
    assert_eq!(updated.remind_time, existing.remind_time);
    assert_eq!(updated.medication_id, existing.medication_id);
}

#[tokio::test]
async fn test_delete_missing_reminder_is_not_found() {
    let mut ctx = TestContext::new();
    let scheduler = ReminderScheduler::new();
    scheduler.start();

    ctx.reminder_repo
        .expect_delete_reminder()
        .times(1)
        .returning(|_| Ok(false));

    // Cancelling the never-scheduled job key must not fail the request
    let result = test_delete_wrapper(&mut ctx, &scheduler, Uuid::new_v4()).await;

    assert!(matches!(result, Err(AppError(MedError::NotFound(_)))));
}
