use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewReport {
    pub venue_id: Id,
    pub reporter_id: Option<ReporterId>,
    pub wait_minutes: i64,
    pub cover_amount: i64,
}

/// Stores a report in the ledger and returns its id.
///
/// A previous report of the same reporter for the same venue within
/// the collapse window is overwritten in place and keeps its id.
/// Anonymous reports are always inserted.
pub fn submit_report<R>(
    repo: &R,
    new_report: NewReport,
    at: Timestamp,
    collapse_window: Duration,
) -> Result<Id>
where
    R: VenueRepo + ReportRepo,
{
    let NewReport {
        venue_id,
        reporter_id,
        wait_minutes,
        cover_amount,
    } = new_report;
    let wait_minutes = validate::wait_minutes(wait_minutes)?;
    let cover_amount = validate::cover_amount(cover_amount)?;
    // The venue must exist
    repo.get_venue(venue_id.as_str())?;

    if let Some(reporter_id) = &reporter_id {
        let since = at - collapse_window;
        if let Some(mut report) =
            repo.latest_report_of_reporter(venue_id.as_str(), reporter_id.as_str(), since)?
        {
            log::debug!(
                "Collapsing report {} of {reporter_id} for venue {venue_id}",
                report.id
            );
            report.wait_minutes = wait_minutes;
            report.cover_amount = cover_amount;
            report.submitted_at = at;
            repo.update_report(&report)?;
            return Ok(report.id);
        }
    }

    let report = Report {
        id: Id::new(),
        venue_id,
        reporter_id,
        wait_minutes,
        cover_amount,
        submitted_at: at,
    };
    log::debug!("Inserting report {} for venue {}", report.id, report.venue_id);
    repo.create_report(&report)?;
    Ok(report.id)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::util::validate::InvalidValue;

    fn new_report(venue_id: &str, reporter: Option<&str>, wait: i64, cover: i64) -> NewReport {
        NewReport {
            venue_id: venue_id.into(),
            reporter_id: reporter.map(Into::into),
            wait_minutes: wait,
            cover_amount: cover,
        }
    }

    const HOUR: Duration = Duration::hours(1);

    #[test]
    fn insert_new_report() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(10_000);
        let id = submit_report(&db, new_report("a", Some("u1"), 15, 10), at, HOUR).unwrap();
        let reports = db.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, id);
        assert_eq!(reports[0].wait_minutes, 15);
        assert_eq!(reports[0].cover_amount, 10);
        assert_eq!(reports[0].submitted_at, at);
    }

    #[test]
    fn collapse_reports_of_the_same_reporter() {
        let db = MockDb::with_venues(&["a"]);
        let t0 = Timestamp::from_secs(10_000);
        let id1 = submit_report(&db, new_report("a", Some("u1"), 10, 0), t0, HOUR).unwrap();
        let t1 = t0 + Duration::minutes(30);
        let id2 = submit_report(&db, new_report("a", Some("u1"), 30, 0), t1, HOUR).unwrap();
        assert_eq!(id1, id2);
        let reports = db.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].wait_minutes, 30);
        assert_eq!(reports[0].submitted_at, t1);
    }

    #[test]
    fn do_not_collapse_reports_outside_of_window() {
        let db = MockDb::with_venues(&["a"]);
        let t0 = Timestamp::from_secs(10_000);
        let id1 = submit_report(&db, new_report("a", Some("u1"), 10, 0), t0, HOUR).unwrap();
        let t1 = t0 + HOUR;
        let id2 = submit_report(&db, new_report("a", Some("u1"), 30, 0), t1, HOUR).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(db.reports.borrow().len(), 2);
    }

    #[test]
    fn do_not_collapse_reports_of_different_reporters_or_venues() {
        let db = MockDb::with_venues(&["a", "b"]);
        let at = Timestamp::from_secs(10_000);
        submit_report(&db, new_report("a", Some("u1"), 10, 0), at, HOUR).unwrap();
        submit_report(&db, new_report("a", Some("u2"), 10, 0), at, HOUR).unwrap();
        submit_report(&db, new_report("b", Some("u1"), 10, 0), at, HOUR).unwrap();
        assert_eq!(db.reports.borrow().len(), 3);
    }

    #[test]
    fn never_collapse_anonymous_reports() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(10_000);
        let id1 = submit_report(&db, new_report("a", None, 10, 0), at, HOUR).unwrap();
        let id2 = submit_report(&db, new_report("a", None, 20, 0), at, HOUR).unwrap();
        assert_ne!(id1, id2);
        assert_eq!(db.reports.borrow().len(), 2);
    }

    #[test]
    fn reject_negative_values() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(10_000);
        let err = submit_report(&db, new_report("a", Some("u1"), -1, 0), at, HOUR).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(InvalidValue::WaitMinutes)));
        let err = submit_report(&db, new_report("a", Some("u1"), 0, -1), at, HOUR).unwrap_err();
        assert!(matches!(err, Error::InvalidValue(InvalidValue::CoverAmount)));
        assert!(db.reports.borrow().is_empty());
    }

    #[test]
    fn invalid_values_do_not_touch_collapsed_report() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(10_000);
        submit_report(&db, new_report("a", Some("u1"), 10, 5), at, HOUR).unwrap();
        assert!(submit_report(&db, new_report("a", Some("u1"), 99_999, 5), at, HOUR).is_err());
        assert_eq!(db.reports.borrow()[0].wait_minutes, 10);
    }

    #[test]
    fn reject_unknown_venue() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(10_000);
        let err = submit_report(&db, new_report("x", None, 10, 0), at, HOUR).unwrap_err();
        assert!(err.is_not_found());
        assert!(db.reports.borrow().is_empty());
    }
}
