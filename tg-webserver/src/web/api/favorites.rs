use super::*;

#[get("/favorites")]
pub fn get_favorites(connections: sqlite::Connections, auth: Auth) -> Result<Vec<json::Venue>> {
    let user = auth.authenticated_reporter()?;
    let venues = flows::favorite_venues(&connections, user)?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[put("/favorites/<venue_id>")]
pub fn put_favorite(connections: sqlite::Connections, auth: Auth, venue_id: &str) -> StatusResult {
    let user = auth.authenticated_reporter()?;
    flows::add_favorite(&connections, user, venue_id, Timestamp::now())?;
    Ok(Status::NoContent)
}

/// Responds with `false` if the venue has not been a favorite.
#[delete("/favorites/<venue_id>")]
pub fn delete_favorite(
    connections: sqlite::Connections,
    auth: Auth,
    venue_id: &str,
) -> Result<bool> {
    let user = auth.authenticated_reporter()?;
    let removed = flows::remove_favorite(&connections, user, venue_id)?;
    Ok(Json(removed))
}
