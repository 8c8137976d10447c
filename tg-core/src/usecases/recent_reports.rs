use super::prelude::*;

pub fn recent_reports<R>(
    repo: &R,
    venue_id: &str,
    at: Timestamp,
    window: Duration,
) -> Result<Vec<Report>>
where
    R: VenueRepo + ReportRepo,
{
    repo.get_venue(venue_id)?;
    let mut reports = repo.reports_of_venue_since(venue_id, at - window)?;
    reports.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    Ok(reports)
}

pub fn get_report<R: ReportRepo>(repo: &R, id: &str) -> Result<Report> {
    Ok(repo.get_report(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use tg_entities::builders::*;

    #[test]
    fn only_reports_within_window() {
        let db = MockDb::with_venues(&["a", "b"]);
        let at = Timestamp::from_secs(100_000);
        let window = Duration::hours(2);
        for (venue_id, age) in [("a", 1), ("a", 3), ("b", 1), ("a", 2)] {
            db.reports.borrow_mut().push(
                Report::build()
                    .venue(venue_id)
                    .submitted_at(at - Duration::hours(age))
                    .finish(),
            );
        }
        let reports = recent_reports(&db, "a", at, window).unwrap();
        // The lower bound of the window is exclusive
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].submitted_at, at - Duration::hours(1));
    }

    #[test]
    fn newest_reports_first() {
        let db = MockDb::with_venues(&["a"]);
        let at = Timestamp::from_secs(100_000);
        for age in [3, 1, 2] {
            db.reports.borrow_mut().push(
                Report::build()
                    .venue("a")
                    .submitted_at(at - Duration::minutes(age))
                    .finish(),
            );
        }
        let reports = recent_reports(&db, "a", at, Duration::hours(1)).unwrap();
        let ages: Vec<_> = reports
            .iter()
            .map(|r| (at - r.submitted_at).whole_minutes())
            .collect();
        assert_eq!(ages, vec![1, 2, 3]);
    }

    #[test]
    fn reports_of_unknown_venue() {
        let db = MockDb::default();
        let err = recent_reports(&db, "a", Timestamp::now(), Duration::hours(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn get_single_report() {
        let db = MockDb::with_venues(&["a"]);
        let report = Report::build().id("r1").venue("a").finish();
        db.reports.borrow_mut().push(report.clone());
        assert_eq!(get_report(&db, "r1").unwrap(), report);
        assert!(get_report(&db, "r2").unwrap_err().is_not_found());
    }
}
