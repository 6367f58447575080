// Background worker that runs the sleep auto-fill on a fixed interval.
//
// Responsibilities
// - Ask the record store for every known owner on each tick.
// - Keep the per-owner time of the last run and pass it as the explicit debounce.
//   Owners missing from a tick are forgotten.
// - Log each report; a failing owner never stops the others.

use crate::modules::activity_records::core::ports::RecordStore;
use crate::modules::activity_records::use_cases::auto_fill_sleep::command::{
    AutoFillSleep, Debounce,
};
use crate::modules::activity_records::use_cases::auto_fill_sleep::handler::AutoFillSleepHandler;
use crate::modules::activity_records::use_cases::auto_fill_sleep::report::{
    AutoFillOutcome, AutoFillReport,
};
use crate::shared::core::primitives::Timestamp;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;

pub struct AutoFillWorker<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TRecordStore>,
    handler: Arc<AutoFillSleepHandler<TRecordStore>>,
    debounce: Duration,
    last_runs: Mutex<HashMap<String, Timestamp>>,
}

impl<TRecordStore> AutoFillWorker<TRecordStore>
where
    TRecordStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<TRecordStore>,
        handler: Arc<AutoFillSleepHandler<TRecordStore>>,
        debounce: Duration,
    ) -> Self {
        Self {
            store,
            handler,
            debounce,
            last_runs: Mutex::new(HashMap::new()),
        }
    }

    /// One pass over all owners.
    pub async fn tick(&self, now: Timestamp) -> Vec<(String, AutoFillReport)> {
        let owners = match self.store.owners().await {
            Ok(owners) => owners,
            Err(error) => {
                tracing::error!(%error, "auto-fill worker could not list owners");
                return Vec::new();
            }
        };

        self.last_runs
            .lock()
            .await
            .retain(|owner_id, _| owners.contains(owner_id));

        let min_interval_ms = i64::try_from(self.debounce.as_millis()).unwrap_or(i64::MAX);
        let mut reports = Vec::with_capacity(owners.len());
        for owner_id in owners {
            let last_run_at = self.last_runs.lock().await.get(&owner_id).copied();
            let command = AutoFillSleep {
                owner_id: owner_id.clone(),
                as_of: now,
                debounce: last_run_at.map(|last_run_at| Debounce {
                    last_run_at,
                    min_interval_ms,
                }),
            };
            let result = self.handler.handle(command).await;
            if !matches!(result, Ok(AutoFillOutcome::Debounced)) {
                self.last_runs.lock().await.insert(owner_id.clone(), now);
            }
            let report = AutoFillReport::from_result(&result);
            if report.success {
                tracing::info!(%owner_id, updated = report.updated, created = report.created, message = %report.message, "auto-fill ran");
            } else {
                tracing::warn!(%owner_id, message = %report.message, "auto-fill failed");
            }
            reports.push((owner_id, report));
        }
        reports
    }

    /// Owners with a remembered last run, sorted.
    pub async fn tracked_owners(&self) -> Vec<String> {
        let mut owners: Vec<String> = self.last_runs.lock().await.keys().cloned().collect();
        owners.sort();
        owners
    }

    pub async fn run(self: Arc<Self>, every: Duration) {
        let mut interval = tokio::time::interval(every);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            self.tick(Utc::now().timestamp_millis()).await;
        }
    }
}
