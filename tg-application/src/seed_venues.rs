use super::*;
use crate::{sqlite::Connections, Result};
use tg_core::{repositories::VenueRepo as _, venue_source::VenueSource};

/// Registers all missing venues of the source in a single transaction.
pub fn seed_venues<S: VenueSource>(connections: &Connections, source: &S) -> Result<usize> {
    let (inserted, stored) = sqlite::exclusive(connections)?.transaction(
        |db| -> std::result::Result<_, usecases::Error> {
            let inserted = usecases::seed_venues(db, source)?;
            Ok((inserted, db.count_venues()?))
        },
    )?;
    if inserted > 0 {
        info!("Registered {inserted} new venue(s), {stored} in total");
    } else {
        debug!("All {stored} venue(s) are already registered");
    }
    Ok(inserted)
}
