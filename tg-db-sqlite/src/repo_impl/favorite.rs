use super::*;

impl FavoriteRepo for DbReadWrite<'_> {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
        create_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn delete_favorite(&self, user: &str, venue_id: &str) -> Result<bool> {
        delete_favorite(&mut self.conn.borrow_mut(), user, venue_id)
    }
    fn favorite_venue_ids(&self, user: &str) -> Result<Vec<Id>> {
        favorite_venue_ids(&mut self.conn.borrow_mut(), user)
    }
}

impl FavoriteRepo for DbConnection<'_> {
    fn create_favorite(&self, favorite: &Favorite) -> Result<()> {
        create_favorite(&mut self.conn.borrow_mut(), favorite)
    }
    fn delete_favorite(&self, user: &str, venue_id: &str) -> Result<bool> {
        delete_favorite(&mut self.conn.borrow_mut(), user, venue_id)
    }
    fn favorite_venue_ids(&self, user: &str) -> Result<Vec<Id>> {
        favorite_venue_ids(&mut self.conn.borrow_mut(), user)
    }
}

impl FavoriteRepo for DbReadOnly<'_> {
    fn create_favorite(&self, _favorite: &Favorite) -> Result<()> {
        Err(read_only_err())
    }
    fn delete_favorite(&self, _user: &str, _venue_id: &str) -> Result<bool> {
        Err(read_only_err())
    }
    fn favorite_venue_ids(&self, user: &str) -> Result<Vec<Id>> {
        favorite_venue_ids(&mut self.conn.borrow_mut(), user)
    }
}

fn create_favorite(conn: &mut SqliteConnection, favorite: &Favorite) -> Result<()> {
    let parent_rowid = resolve_venue_rowid(conn, favorite.venue_id.as_str())?;
    let new_favorite = models::NewVenueFavorite {
        parent_rowid,
        user_id: favorite.user.as_str(),
        created_at: favorite.created_at.as_millis(),
    };
    diesel::insert_into(schema::venue_favorite::table)
        .values(&new_favorite)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_favorite(conn: &mut SqliteConnection, user: &str, venue_id: &str) -> Result<bool> {
    use schema::venue_favorite::dsl;
    let parent_rowid = match resolve_venue_rowid(conn, venue_id) {
        Ok(rowid) => rowid,
        Err(repo::Error::NotFound) => return Ok(false),
        Err(err) => return Err(err),
    };
    let count = diesel::delete(
        schema::venue_favorite::table
            .filter(dsl::parent_rowid.eq(parent_rowid))
            .filter(dsl::user_id.eq(user)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn favorite_venue_ids(conn: &mut SqliteConnection, user: &str) -> Result<Vec<Id>> {
    use schema::{venue::dsl as venue_dsl, venue_favorite::dsl as favorite_dsl};
    Ok(schema::venue_favorite::table
        .inner_join(schema::venue::table)
        .select(venue_dsl::id)
        .filter(favorite_dsl::user_id.eq(user))
        .order_by((favorite_dsl::created_at, favorite_dsl::rowid))
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}
