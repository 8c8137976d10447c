use super::*;
use tg_entities as e;

impl From<e::venue::PublishedStatus> for PublishedStatus {
    fn from(from: e::venue::PublishedStatus) -> Self {
        let e::venue::PublishedStatus {
            wait_minutes,
            cover_amount,
            report_count,
            last_updated,
        } = from;
        Self {
            wait_minutes,
            cover_amount,
            report_count,
            last_updated: last_updated.as_millis(),
        }
    }
}

impl From<e::venue::Venue> for Venue {
    fn from(from: e::venue::Venue) -> Self {
        let e::venue::Venue { id, name, status } = from;
        Self {
            id: id.into(),
            name,
            status: status.into(),
        }
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            venue_id,
            reporter_id,
            wait_minutes,
            cover_amount,
            submitted_at,
        } = from;
        Self {
            id: id.into(),
            venue_id: venue_id.into(),
            reporter_id: reporter_id.map(Into::into),
            wait_minutes,
            cover_amount,
            submitted_at: submitted_at.as_millis(),
        }
    }
}
