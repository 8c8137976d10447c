use tg_entities::{report::*, time::*, venue::*};

pub trait Aggregated {
    fn aggregate_status(&self, _: &[Report], at: Timestamp) -> PublishedStatus;
}

impl Aggregated for Venue {
    fn aggregate_status(&self, reports: &[Report], at: Timestamp) -> PublishedStatus {
        debug_assert_eq!(
            reports.len(),
            reports.iter().filter(|r| r.venue_id == self.id).count()
        );
        if reports.is_empty() {
            return PublishedStatus::neutral(at);
        }
        let wait_minutes = median(reports.iter().map(|r| r.wait_minutes)).unwrap_or_default();
        let cover_amount = median(reports.iter().map(|r| r.cover_amount)).unwrap_or_default();
        PublishedStatus {
            wait_minutes,
            cover_amount,
            report_count: u32::try_from(reports.len()).unwrap_or(u32::MAX),
            last_updated: at,
        }
    }
}

/// Median of unsigned values.
///
/// For an even number of values the mean of the two middle values
/// is rounded half away from zero, i.e. `[10, 11]` yields `11`.
pub fn median(values: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut values: Vec<_> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }
    values.sort_unstable();
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        return Some(values[mid]);
    }
    let lo = u64::from(values[mid - 1]);
    let hi = u64::from(values[mid]);
    // The mean of two u32 values always fits into u32
    Some(((lo + hi + 1) / 2) as u32)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use tg_entities::builders::*;

    fn new_report(venue_id: &str, wait_minutes: u32, cover_amount: u32) -> Report {
        Report::build()
            .venue(venue_id)
            .wait_minutes(wait_minutes)
            .cover_amount(cover_amount)
            .finish()
    }

    #[test]
    fn median_of_odd_sample() {
        assert_eq!(median([25, 5, 15]), Some(15));
        assert_eq!(median([7]), Some(7));
    }

    #[test]
    fn median_of_even_sample() {
        assert_eq!(median([20, 10]), Some(15));
        assert_eq!(median([10, 11]), Some(11));
        assert_eq!(median([0, 1, 2, 100]), Some(2));
    }

    #[test]
    fn median_without_values() {
        assert_eq!(median([]), None);
    }

    #[test]
    fn median_does_not_overflow() {
        assert_eq!(median([u32::MAX, u32::MAX]), Some(u32::MAX));
        assert_eq!(median([u32::MAX - 1, u32::MAX]), Some(u32::MAX));
    }

    #[test]
    fn aggregate_status_of_venue() {
        let venue = Venue::build().id("a").finish();
        let at = Timestamp::from_secs(1_000);
        let reports = [
            new_report("a", 10, 5),
            new_report("a", 20, 15),
            new_report("a", 30, 25),
        ];
        let status = venue.aggregate_status(&reports, at);
        assert_eq!(status.wait_minutes, 20);
        assert_eq!(status.cover_amount, 15);
        assert_eq!(status.report_count, 3);
        assert_eq!(status.last_updated, at);
    }

    #[test]
    fn medians_are_computed_independently() {
        let venue = Venue::build().id("a").finish();
        let reports = [new_report("a", 30, 0), new_report("a", 0, 30), new_report("a", 10, 20)];
        let status = venue.aggregate_status(&reports, Timestamp::UNIX_EPOCH);
        assert_eq!(status.wait_minutes, 10);
        assert_eq!(status.cover_amount, 20);
    }

    #[test]
    fn aggregate_status_without_reports() {
        let venue = Venue::build().id("a").wait_minutes(40).finish();
        let at = Timestamp::from_secs(42);
        let status = venue.aggregate_status(&[], at);
        assert!(status.is_neutral());
        assert_eq!(status.last_updated, at);
    }
}
