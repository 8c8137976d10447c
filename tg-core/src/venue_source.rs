//! Where the list of venues comes from.
//!
//! The registry is the authoritative source at runtime. The static
//! list is only used to seed an empty registry or to inspect the
//! configured seed without touching the store.

use crate::{entities::*, repositories::*};

type Result<T> = std::result::Result<T, Error>;

pub trait VenueSource {
    fn venues(&self) -> Result<Vec<Venue>>;
    fn venue(&self, id: &str) -> Result<Venue>;
}

/// Reads through a [`VenueRepo`].
#[derive(Debug)]
pub struct StoredVenues<'r, R>(pub &'r R);

impl<R> VenueSource for StoredVenues<'_, R>
where
    R: VenueRepo,
{
    fn venues(&self) -> Result<Vec<Venue>> {
        self.0.all_venues()
    }
    fn venue(&self, id: &str) -> Result<Venue> {
        self.0.get_venue(id)
    }
}

/// A fixed list of venues with a neutral status.
#[derive(Debug, Clone, Default)]
pub struct StaticVenues {
    venues: Vec<Venue>,
}

impl StaticVenues {
    pub fn new(venues: impl IntoIterator<Item = (Id, String)>) -> Self {
        let venues = venues
            .into_iter()
            .map(|(id, name)| Venue::new(id, name))
            .collect();
        Self { venues }
    }
}

impl VenueSource for StaticVenues {
    fn venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.clone())
    }
    fn venue(&self, id: &str) -> Result<Venue> {
        self.venues
            .iter()
            .find(|v| v.id.as_str() == id)
            .cloned()
            .ok_or(Error::NotFound)
    }
}
