use std::{collections::HashMap, sync::Arc, time::Duration as StdDuration};

use anyhow::anyhow;
use tokio::sync::Mutex as AsyncMutex;

use super::*;
use crate::{
    error::{AppError, VenueError},
    sqlite::Connections,
    Result,
};
use tg_core::repositories::VenueRepo as _;

#[derive(Debug, Clone)]
pub struct Settings {
    pub collapse_window: Duration,
    pub aggregation_window: Duration,
    pub storage_timeout: StdDuration,
    pub allow_anonymous_reports: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collapse_window: usecases::DEFAULT_COLLAPSE_WINDOW,
            aggregation_window: usecases::DEFAULT_AGGREGATION_WINDOW,
            storage_timeout: StdDuration::from_secs(5),
            allow_anonymous_reports: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub report_id: Id,
    pub status: PublishedStatus,
}

#[derive(Debug, Default)]
pub struct RecomputeSummary {
    pub recomputed: usize,
    pub failed: Vec<VenueError>,
}

/// One lock per venue.
///
/// Entries that are not held by anyone are dropped when
/// the next lock is requested.
#[derive(Debug, Clone, Default)]
struct VenueLocks(Arc<parking_lot::Mutex<HashMap<Id, Arc<AsyncMutex<()>>>>>);

impl VenueLocks {
    fn get(&self, venue_id: &Id) -> Arc<AsyncMutex<()>> {
        let mut locks = self.0.lock();
        locks.retain(|id, lock| id == venue_id || Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(venue_id.clone()).or_default())
    }
}

/// Serializes all writes of a venue and publishes its status.
#[derive(Clone)]
pub struct Aggregator {
    connections: Connections,
    locks: VenueLocks,
    settings: Settings,
}

impl Aggregator {
    pub fn new(connections: Connections, settings: Settings) -> Self {
        Self {
            connections,
            locks: VenueLocks::default(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stores the report and recomputes the published status
    /// of its venue within a single transaction.
    ///
    /// No other write of the same venue interleaves. A submission that
    /// acquires the venue lock after a newer one is recorded at the
    /// time of the currently published status.
    pub async fn submit_and_recompute(
        &self,
        new_report: usecases::NewReport,
        at: Timestamp,
    ) -> Result<Submission> {
        if new_report.reporter_id.is_none() && !self.settings.allow_anonymous_reports {
            return Err(usecases::Error::Unauthorized.into());
        }
        let venue_id = new_report.venue_id.clone();
        let Settings {
            collapse_window,
            aggregation_window,
            ..
        } = self.settings;
        let lock_id = venue_id.clone();
        self.with_venue_locked(&lock_id, move |connections| {
            let submission = sqlite::exclusive(connections)?.transaction(
                |db| -> std::result::Result<_, usecases::Error> {
                    let published = db.get_venue(venue_id.as_str())?.status.last_updated;
                    if at < published {
                        debug!("Moving report for venue {venue_id} from {at} to {published}");
                    }
                    let at = at.max(published);
                    let report_id = usecases::submit_report(db, new_report, at, collapse_window)?;
                    let status = usecases::recompute_status(
                        db,
                        venue_id.as_str(),
                        at,
                        aggregation_window,
                    )?;
                    Ok(Submission { report_id, status })
                },
            )?;
            Ok(submission)
        })
        .await
    }

    pub async fn recompute(&self, venue_id: &Id, at: Timestamp) -> Result<PublishedStatus> {
        let aggregation_window = self.settings.aggregation_window;
        let id = venue_id.clone();
        self.with_venue_locked(venue_id, move |connections| {
            let status = sqlite::exclusive(connections)?.transaction(|db| {
                usecases::recompute_status(db, id.as_str(), at, aggregation_window)
            })?;
            Ok(status)
        })
        .await
    }

    /// Recomputes all venues, one after another.
    ///
    /// A failure of a single venue does not abort the sweep.
    pub async fn recompute_all(&self, at: Timestamp) -> Result<RecomputeSummary> {
        let venue_ids: Vec<_> = {
            let connections = self.connections.clone();
            let timeout = self.settings.storage_timeout;
            let load = tokio::task::spawn_blocking(move || -> Result<Vec<Id>> {
                let venues = sqlite::shared(&connections)?.all_venues()?;
                Ok(venues.into_iter().map(|v| v.id).collect())
            });
            tokio::time::timeout(timeout, load)
                .await
                .map_err(|_| AppError::Timeout(timeout))?
                .map_err(|err| AppError::Unavailable(anyhow!(err)))??
        };
        let mut summary = RecomputeSummary::default();
        for venue_id in venue_ids {
            match self.recompute(&venue_id, at).await {
                Ok(_) => {
                    summary.recomputed += 1;
                }
                Err(error) => {
                    warn!("Failed to recompute status of venue {venue_id}: {error}");
                    summary.failed.push(VenueError { venue_id, error });
                }
            }
        }
        Ok(summary)
    }

    async fn with_venue_locked<T, F>(&self, venue_id: &Id, f: F) -> Result<T>
    where
        F: FnOnce(&Connections) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let timeout = self.settings.storage_timeout;
        let lock = self.locks.get(venue_id);
        let connections = self.connections.clone();
        let job = async move {
            let guard = lock.lock_owned().await;
            // The guard is released when the blocking job has finished,
            // even if the caller has given up waiting for it.
            tokio::task::spawn_blocking(move || {
                let _guard = guard;
                f(&connections)
            })
            .await
        };
        match tokio::time::timeout(timeout, job).await {
            Ok(Ok(res)) => res,
            Ok(Err(err)) => {
                error!("Storage operation of venue {venue_id} aborted: {err}");
                Err(AppError::Unavailable(anyhow!(err)))
            }
            Err(_) => {
                warn!("Storage operation of venue {venue_id} timed out after {timeout:?}");
                Err(AppError::Timeout(timeout))
            }
        }
    }
}
