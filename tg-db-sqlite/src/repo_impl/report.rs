use super::*;

impl ReportRepo for DbReadWrite<'_> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }
    fn get_report(&self, id: &str) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn latest_report_of_reporter(
        &self,
        venue_id: &str,
        reporter_id: &str,
        since: Timestamp,
    ) -> Result<Option<Report>> {
        latest_report_of_reporter(&mut self.conn.borrow_mut(), venue_id, reporter_id, since)
    }
    fn reports_of_venue_since(&self, venue_id: &str, since: Timestamp) -> Result<Vec<Report>> {
        reports_of_venue_since(&mut self.conn.borrow_mut(), venue_id, since)
    }
}

impl ReportRepo for DbConnection<'_> {
    fn create_report(&self, report: &Report) -> Result<()> {
        create_report(&mut self.conn.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> Result<()> {
        update_report(&mut self.conn.borrow_mut(), report)
    }
    fn get_report(&self, id: &str) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn latest_report_of_reporter(
        &self,
        venue_id: &str,
        reporter_id: &str,
        since: Timestamp,
    ) -> Result<Option<Report>> {
        latest_report_of_reporter(&mut self.conn.borrow_mut(), venue_id, reporter_id, since)
    }
    fn reports_of_venue_since(&self, venue_id: &str, since: Timestamp) -> Result<Vec<Report>> {
        reports_of_venue_since(&mut self.conn.borrow_mut(), venue_id, since)
    }
}

impl ReportRepo for DbReadOnly<'_> {
    fn create_report(&self, _report: &Report) -> Result<()> {
        Err(read_only_err())
    }
    fn update_report(&self, _report: &Report) -> Result<()> {
        Err(read_only_err())
    }
    fn get_report(&self, id: &str) -> Result<Report> {
        get_report(&mut self.conn.borrow_mut(), id)
    }
    fn latest_report_of_reporter(
        &self,
        venue_id: &str,
        reporter_id: &str,
        since: Timestamp,
    ) -> Result<Option<Report>> {
        latest_report_of_reporter(&mut self.conn.borrow_mut(), venue_id, reporter_id, since)
    }
    fn reports_of_venue_since(&self, venue_id: &str, since: Timestamp) -> Result<Vec<Report>> {
        reports_of_venue_since(&mut self.conn.borrow_mut(), venue_id, since)
    }
}

fn create_report(conn: &mut SqliteConnection, report: &Report) -> Result<()> {
    let Report {
        id,
        venue_id,
        reporter_id,
        wait_minutes,
        cover_amount,
        submitted_at,
    } = report;
    let parent_rowid = resolve_venue_rowid(conn, venue_id.as_str())?;
    let new_report = models::NewVenueReport {
        parent_rowid,
        id: id.as_str(),
        reporter_id: reporter_id.as_ref().map(ReporterId::as_str),
        wait_minutes: (*wait_minutes).into(),
        cover_amount: (*cover_amount).into(),
        submitted_at: submitted_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::venue_report::table)
        .values(&new_report)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_report(conn: &mut SqliteConnection, report: &Report) -> Result<()> {
    use schema::venue_report::dsl;
    let count = diesel::update(schema::venue_report::table.filter(dsl::id.eq(report.id.as_str())))
        .set((
            dsl::wait_minutes.eq(i64::from(report.wait_minutes)),
            dsl::cover_amount.eq(i64::from(report.cover_amount)),
            dsl::submitted_at.eq(report.submitted_at.as_millis()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_report(conn: &mut SqliteConnection, id: &str) -> Result<Report> {
    use schema::{venue::dsl as venue_dsl, venue_report::dsl as report_dsl};
    let report = schema::venue_report::table
        .inner_join(schema::venue::table)
        .select((
            report_dsl::rowid,
            report_dsl::id,
            report_dsl::reporter_id,
            report_dsl::wait_minutes,
            report_dsl::cover_amount,
            report_dsl::submitted_at,
            venue_dsl::id,
        ))
        .filter(report_dsl::id.eq(id))
        .first::<models::JoinedVenueReport>(conn)
        .map_err(from_diesel_err)?;
    load_report(report)
}

fn latest_report_of_reporter(
    conn: &mut SqliteConnection,
    venue_id: &str,
    reporter_id: &str,
    since: Timestamp,
) -> Result<Option<Report>> {
    use schema::{venue::dsl as venue_dsl, venue_report::dsl as report_dsl};
    schema::venue_report::table
        .inner_join(schema::venue::table)
        .select((
            report_dsl::rowid,
            report_dsl::id,
            report_dsl::reporter_id,
            report_dsl::wait_minutes,
            report_dsl::cover_amount,
            report_dsl::submitted_at,
            venue_dsl::id,
        ))
        .filter(venue_dsl::id.eq(venue_id))
        .filter(report_dsl::reporter_id.eq(reporter_id))
        .filter(report_dsl::submitted_at.gt(since.as_millis()))
        .order_by((report_dsl::submitted_at.desc(), report_dsl::rowid.desc()))
        .first::<models::JoinedVenueReport>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_report)
        .transpose()
}

fn reports_of_venue_since(
    conn: &mut SqliteConnection,
    venue_id: &str,
    since: Timestamp,
) -> Result<Vec<Report>> {
    use schema::{venue::dsl as venue_dsl, venue_report::dsl as report_dsl};
    schema::venue_report::table
        .inner_join(schema::venue::table)
        .select((
            report_dsl::rowid,
            report_dsl::id,
            report_dsl::reporter_id,
            report_dsl::wait_minutes,
            report_dsl::cover_amount,
            report_dsl::submitted_at,
            venue_dsl::id,
        ))
        .filter(venue_dsl::id.eq(venue_id))
        .filter(report_dsl::submitted_at.gt(since.as_millis()))
        .load::<models::JoinedVenueReport>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_report)
        .collect()
}
