//! # Reminder Scheduler
//!
//! An in-process, in-memory one-shot job runner for medication reminders.
//! Jobs are keyed by a caller-supplied string, fire once at an absolute
//! instant, and are lost on process restart. There is no recurring
//! scheduling and no job persistence.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Default)]
struct SchedulerInner {
    started: AtomicBool,
    // Generation guards a fired job's self-removal against a concurrent
    // re-schedule under the same key.
    generation: AtomicU64,
    jobs: Mutex<HashMap<String, (u64, JoinHandle<()>)>>,
}

/// One-shot reminder job scheduler backed by tokio tasks.
///
/// Cloning is cheap; clones share the same job table.
#[derive(Clone, Default)]
pub struct ReminderScheduler {
    inner: Arc<SchedulerInner>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the scheduler. Idempotent: starting a running scheduler is a
    /// no-op.
    pub fn start(&self) {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            debug!("Reminder scheduler already running");
        } else {
            info!("Reminder scheduler started");
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst)
    }

    /// Schedules `job` to run once at `when`. An instant in the past fires
    /// immediately. Scheduling an existing key replaces the pending job.
    pub fn schedule_at<F>(&self, job_key: &str, when: DateTime<Utc>, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = (when - Utc::now()).to_std().unwrap_or_default();
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst);
        let key = job_key.to_string();
        let inner = Arc::clone(&self.inner);

        debug!(
            "Scheduling job '{}' to fire at {} (in {:?})",
            job_key, when, delay
        );

        // Hold the table lock across spawn and insert so an immediately
        // firing job cannot observe its own entry missing.
        let mut jobs = self.inner.jobs.lock().expect("scheduler job table poisoned");

        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            job.await;

            // Remove our own entry unless the key was re-scheduled meanwhile
            let mut jobs = inner.jobs.lock().expect("scheduler job table poisoned");
            if let Some((stored_generation, _)) = jobs.get(&task_key) {
                if *stored_generation == generation {
                    jobs.remove(&task_key);
                }
            }
        });

        if let Some((_, old_handle)) = jobs.insert(key, (generation, handle)) {
            debug!("Replacing pending job '{}'", job_key);
            old_handle.abort();
        }
    }

    /// Cancels a pending job. Unknown keys (never scheduled, already fired)
    /// are a silent no-op.
    pub fn cancel(&self, job_key: &str) {
        let mut jobs = self.inner.jobs.lock().expect("scheduler job table poisoned");
        match jobs.remove(job_key) {
            Some((_, handle)) => {
                handle.abort();
                debug!("Cancelled job '{}'", job_key);
            }
            None => {
                debug!("No pending job '{}' to cancel", job_key);
            }
        }
    }

    /// Number of jobs currently pending.
    pub fn pending_jobs(&self) -> usize {
        self.inner
            .jobs
            .lock()
            .expect("scheduler job table poisoned")
            .len()
    }
}

/// Job key for a reminder's scheduled notification.
pub fn reminder_job_key(reminder_id: uuid::Uuid) -> String {
    format!("reminder-{}", reminder_id)
}
