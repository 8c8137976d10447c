use std::time::Duration;

use tg_application::prelude::Aggregator;
use tg_core::entities::Timestamp;

/// Expires outdated reports by recomputing every venue periodically.
pub async fn run(aggregator: Aggregator, task_interval_time: Duration) {
    let mut interval = tokio::time::interval(task_interval_time);

    loop {
        interval.tick().await;

        match aggregator.recompute_all(Timestamp::now()).await {
            Ok(summary) => {
                log::info!(
                    "Recomputed the status of {} venues ({} failed)",
                    summary.recomputed,
                    summary.failed.len()
                );
            }
            Err(err) => {
                log::warn!("Venues could not be recomputed: {err}");
            }
        }
    }
}
