use super::*;
use crate::{sqlite::Connections, Result};

pub fn add_favorite(
    connections: &Connections,
    user: &ReporterId,
    venue_id: &str,
    at: Timestamp,
) -> Result<()> {
    sqlite::exclusive(connections)?
        .transaction(|db| usecases::add_favorite(db, user, venue_id, at))?;
    Ok(())
}

pub fn remove_favorite(connections: &Connections, user: &ReporterId, venue_id: &str) -> Result<bool> {
    let removed = sqlite::exclusive(connections)?
        .transaction(|db| usecases::remove_favorite(db, user, venue_id))?;
    Ok(removed)
}

pub fn favorite_venues(connections: &Connections, user: &ReporterId) -> Result<Vec<Venue>> {
    let db = sqlite::shared(connections)?;
    Ok(usecases::favorite_venues(&db, user)?)
}
