// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait VenueRepo {
    fn create_venue(&self, venue: &Venue) -> Result<()>;

    fn get_venue(&self, id: &str) -> Result<Venue>;

    fn try_get_venue(&self, id: &str) -> Result<Option<Venue>> {
        match self.get_venue(id) {
            Ok(venue) => Ok(Some(venue)),
            Err(Error::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    // Ordered by insertion
    fn all_venues(&self) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    // Overwrites all published fields at once
    fn update_venue_status(&self, id: &str, status: &PublishedStatus) -> Result<()>;
}

pub trait ReportRepo {
    fn create_report(&self, report: &Report) -> Result<()>;

    // Updates values and submission time, the venue and
    // the reporter of a report never change
    fn update_report(&self, report: &Report) -> Result<()>;

    fn get_report(&self, id: &str) -> Result<Report>;

    // The most recent report with `submitted_at > since`
    fn latest_report_of_reporter(
        &self,
        venue_id: &str,
        reporter_id: &str,
        since: Timestamp,
    ) -> Result<Option<Report>>;

    // All reports with `submitted_at > since` in no particular order
    fn reports_of_venue_since(&self, venue_id: &str, since: Timestamp) -> Result<Vec<Report>>;
}

pub trait FavoriteRepo {
    // Fails with `AlreadyExists` for duplicates
    fn create_favorite(&self, favorite: &Favorite) -> Result<()>;

    // Ok(true)  => Found and deleted
    // Ok(false) => Not found
    fn delete_favorite(&self, user: &str, venue_id: &str) -> Result<bool>;

    // Ordered by creation
    fn favorite_venue_ids(&self, user: &str) -> Result<Vec<Id>>;
}
