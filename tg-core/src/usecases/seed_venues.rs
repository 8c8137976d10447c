use std::collections::HashSet;

use super::prelude::*;
use crate::venue_source::VenueSource;

/// Inserts all venues of the source that are not yet registered.
///
/// Returns the number of inserted venues. Running it again with
/// the same source inserts nothing.
pub fn seed_venues<R, S>(repo: &R, source: &S) -> Result<usize>
where
    R: VenueRepo,
    S: VenueSource,
{
    let venues = source.venues()?;
    check_for_duplicates(&venues)?;
    let mut inserted = 0;
    for venue in venues {
        if repo.try_get_venue(venue.id.as_str())?.is_some() {
            continue;
        }
        match repo.create_venue(&venue) {
            Ok(()) => {
                log::debug!("Registered venue {} '{}'", venue.id, venue.name);
                inserted += 1;
            }
            // Another venue with the same name exists
            Err(RepoError::AlreadyExists) => return Err(Error::DuplicateVenue(venue.name)),
            Err(err) => return Err(err.into()),
        }
    }
    Ok(inserted)
}

fn check_for_duplicates(venues: &[Venue]) -> Result<()> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for venue in venues {
        if !ids.insert(venue.id.as_str()) {
            return Err(Error::DuplicateVenue(venue.id.to_string()));
        }
        if !names.insert(venue.name.as_str()) {
            return Err(Error::DuplicateVenue(venue.name.clone()));
        }
    }
    Ok(())
}
