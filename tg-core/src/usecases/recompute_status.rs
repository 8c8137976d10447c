use super::{apply_status::publish_status, prelude::*};
use crate::aggregate::Aggregated;

/// Recalculates the published status of a venue from the reports
/// within the aggregation window ending at `at`.
///
/// Without any reports in the window the status is reset to zero.
pub fn recompute_status<R>(
    repo: &R,
    venue_id: &str,
    at: Timestamp,
    aggregation_window: Duration,
) -> Result<PublishedStatus>
where
    R: VenueRepo + ReportRepo,
{
    let venue = repo.get_venue(venue_id)?;
    let reports = repo.reports_of_venue_since(venue_id, at - aggregation_window)?;
    let status = venue.aggregate_status(&reports, at);
    log::debug!(
        "Recomputed status of venue {venue_id} from {} report(s): {} min, cover {}",
        status.report_count,
        status.wait_minutes,
        status.cover_amount
    );
    publish_status(repo, venue_id, status)?;
    Ok(status)
}
