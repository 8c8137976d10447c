use super::prelude::*;

pub fn add_favorite<R>(repo: &R, user: &ReporterId, venue_id: &str, at: Timestamp) -> Result<()>
where
    R: VenueRepo + FavoriteRepo,
{
    let venue = repo.get_venue(venue_id)?;
    let favorite = Favorite {
        user: user.clone(),
        venue_id: venue.id,
        created_at: at,
    };
    match repo.create_favorite(&favorite) {
        Ok(()) => Ok(()),
        Err(RepoError::AlreadyExists) => {
            log::debug!("Venue {venue_id} is already a favorite of {user}");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn remove_favorite<R: FavoriteRepo>(repo: &R, user: &ReporterId, venue_id: &str) -> Result<bool> {
    Ok(repo.delete_favorite(user.as_str(), venue_id)?)
}

pub fn favorite_venues<R>(repo: &R, user: &ReporterId) -> Result<Vec<Venue>>
where
    R: VenueRepo + FavoriteRepo,
{
    let ids = repo.favorite_venue_ids(user.as_str())?;
    let mut venues = Vec::with_capacity(ids.len());
    for id in ids {
        venues.push(repo.get_venue(id.as_str())?);
    }
    Ok(venues)
}
