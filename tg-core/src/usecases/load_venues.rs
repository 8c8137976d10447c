use super::prelude::*;
use crate::venue_source::VenueSource;

pub fn list_venues<S: VenueSource>(source: &S) -> Result<Vec<Venue>> {
    Ok(source.venues()?)
}

pub fn get_venue<S: VenueSource>(source: &S, id: &str) -> Result<Venue> {
    Ok(source.venue(id)?)
}
