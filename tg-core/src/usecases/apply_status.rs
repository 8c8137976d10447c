use super::prelude::*;

/// Overwrites the published status of a venue.
///
/// The status must not be older than the currently published one.
pub fn apply_status<R>(
    repo: &R,
    venue_id: &str,
    wait_minutes: i64,
    cover_amount: i64,
    report_count: i64,
    at: Timestamp,
) -> Result<PublishedStatus>
where
    R: VenueRepo,
{
    let status = PublishedStatus {
        wait_minutes: validate::wait_minutes(wait_minutes)?,
        cover_amount: validate::cover_amount(cover_amount)?,
        report_count: validate::report_count(report_count)?,
        last_updated: at,
    };
    publish_status(repo, venue_id, status)?;
    Ok(status)
}

pub(crate) fn publish_status<R>(repo: &R, venue_id: &str, status: PublishedStatus) -> Result<()>
where
    R: VenueRepo,
{
    let venue = repo.get_venue(venue_id)?;
    if status.last_updated < venue.status.last_updated {
        log::warn!(
            "Rejecting status of venue {venue_id} at {} older than {}",
            status.last_updated,
            venue.status.last_updated
        );
        return Err(Error::Conflict);
    }
    repo.update_venue_status(venue_id, &status)?;
    Ok(())
}
