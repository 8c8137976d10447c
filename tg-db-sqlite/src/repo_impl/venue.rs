use super::*;

impl VenueRepo for DbReadWrite<'_> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn update_venue_status(&self, id: &str, status: &PublishedStatus) -> Result<()> {
        update_venue_status(&mut self.conn.borrow_mut(), id, status)
    }
}

impl VenueRepo for DbConnection<'_> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        create_venue(&mut self.conn.borrow_mut(), venue)
    }
    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn update_venue_status(&self, id: &str, status: &PublishedStatus) -> Result<()> {
        update_venue_status(&mut self.conn.borrow_mut(), id, status)
    }
}

impl VenueRepo for DbReadOnly<'_> {
    fn create_venue(&self, _venue: &Venue) -> Result<()> {
        Err(read_only_err())
    }
    fn get_venue(&self, id: &str) -> Result<Venue> {
        get_venue(&mut self.conn.borrow_mut(), id)
    }
    fn all_venues(&self) -> Result<Vec<Venue>> {
        all_venues(&mut self.conn.borrow_mut())
    }
    fn count_venues(&self) -> Result<usize> {
        count_venues(&mut self.conn.borrow_mut())
    }
    fn update_venue_status(&self, _id: &str, _status: &PublishedStatus) -> Result<()> {
        Err(read_only_err())
    }
}

fn create_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    let Venue { id, name, status } = venue;
    let new_venue = models::NewVenue {
        id: id.as_str(),
        name,
        wait_minutes: status.wait_minutes.into(),
        cover_amount: status.cover_amount.into(),
        report_count: status.report_count.into(),
        last_updated_at: status.last_updated.as_millis(),
    };
    let _count = diesel::insert_into(schema::venue::table)
        .values(&new_venue)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn get_venue(conn: &mut SqliteConnection, id: &str) -> Result<Venue> {
    use schema::venue::dsl;
    let venue = schema::venue::table
        .filter(dsl::id.eq(id))
        .first::<models::Venue>(conn)
        .map_err(from_diesel_err)?;
    load_venue(venue)
}

fn all_venues(conn: &mut SqliteConnection) -> Result<Vec<Venue>> {
    use schema::venue::dsl;
    schema::venue::table
        .order_by(dsl::rowid)
        .load::<models::Venue>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_venue)
        .collect()
}

fn count_venues(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::venue::dsl;
    Ok(schema::venue::table
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn update_venue_status(
    conn: &mut SqliteConnection,
    id: &str,
    status: &PublishedStatus,
) -> Result<()> {
    use schema::venue::dsl;
    let count = diesel::update(schema::venue::table.filter(dsl::id.eq(id)))
        .set((
            dsl::wait_minutes.eq(i64::from(status.wait_minutes)),
            dsl::cover_amount.eq(i64::from(status.cover_amount)),
            dsl::report_count.eq(i64::from(status.report_count)),
            dsl::last_updated_at.eq(status.last_updated.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
