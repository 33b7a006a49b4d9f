//! Background job scheduler.
//!
//! Runs the collect-then-analyze pipeline on a fixed interval. Ticks never
//! overlap: a tick that fires while the previous run is still going is
//! skipped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::analyzer::analyze_trends;
use crate::api::AppState;
use crate::collector::{collect_posts, CollectOutcome};

/// Shared pipeline handle; the mutex serializes runs.
#[derive(Clone)]
pub struct Pipeline {
    state: AppState,
    running: Arc<Mutex<()>>,
}

impl Pipeline {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            running: Arc::new(Mutex::new(())),
        }
    }

    /// Run the pipeline unless a run is already in progress.
    ///
    /// Returns `false` if the run was skipped.
    pub async fn run_exclusive(&self) -> bool {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!("scheduler: previous run still in progress; skipping tick");
            return false;
        };
        run_collection_and_analysis(&self.state).await;
        true
    }
}

/// Collect one batch, then log the resulting trend report.
pub async fn run_collection_and_analysis(state: &AppState) {
    let collected = match collect_posts(&state.pool, &state.twitter, state.model.as_ref()).await {
        CollectOutcome::Stored(n) => n,
        CollectOutcome::Failed => 0,
    };

    match analyze_trends(&state.pool).await {
        Some(report) => tracing::info!(
            collected,
            top_words = ?report.top_words,
            top_hashtags = ?report.top_hashtags,
            sentiment_distribution = ?report.sentiment_distribution,
            "fashion trend report"
        ),
        None => tracing::warn!(collected, "failed to generate trend report"),
    }
}

/// Builds and starts the background job scheduler.
///
/// Returns the running [`JobScheduler`] handle, which must be kept alive for
/// the lifetime of the process and shut down on exit.
///
/// # Errors
///
/// Returns [`JobSchedulerError`] if the scheduler cannot be initialised,
/// the job cannot be registered, or the scheduler fails to start.
pub async fn build_scheduler(
    pipeline: Pipeline,
    interval_secs: u64,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(Duration::from_secs(interval_secs), move |_uuid, _lock| {
        let pipeline = pipeline.clone();

        Box::pin(async move {
            tracing::info!("scheduler: starting collection run");
            if pipeline.run_exclusive().await {
                tracing::info!("scheduler: collection run complete");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    Ok(scheduler)
}
