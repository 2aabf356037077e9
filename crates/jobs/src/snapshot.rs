use recordbook_application::use_cases::PersistStoreUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically writes the record store to disk. A failed save is logged and
/// retried on the next tick.
pub struct SnapshotJob {
    persist: Arc<PersistStoreUseCase>,
    period: Duration,
    shutdown: CancellationToken,
}

impl SnapshotJob {
    pub fn new(persist: Arc<PersistStoreUseCase>, interval_secs: u64) -> Self {
        Self {
            persist,
            period: Duration::from_secs(interval_secs),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        if self.period.is_zero() {
            info!("Store snapshot job disabled");
            return;
        }

        info!(
            interval_secs = self.period.as_secs(),
            "Starting store snapshot job"
        );

        // first save happens one period after startup, not immediately
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("SnapshotJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.persist.save().await {
                        error!(error = %e, "Periodic store snapshot failed");
                    }
                }
            }
        }
    }
}
