//! Dispatch pacing for rate-limited remote services.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between dispatches.
///
/// The first dispatch never waits; each later dispatch sleeps until
/// `min_interval` has elapsed since the previous one. Used for the
/// 250 ms spacing between batch lookups and the 1 req/s MusicBrainz
/// limit.
pub struct Pacer {
    last_dispatch: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl Pacer {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_dispatch: Mutex::new(None),
            min_interval,
        }
    }

    /// Wait until the pacing interval allows the next dispatch.
    pub async fn pace(&self) {
        let mut last = self.last_dispatch.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!(wait_ms = wait_time.as_millis() as u64, "Pacing dispatch");
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}
