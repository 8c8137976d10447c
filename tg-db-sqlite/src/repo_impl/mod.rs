// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use tg_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod favorite;
mod report;
mod venue;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn read_only_err() -> repo::Error {
    repo::Error::Other(anyhow!("Write access through a read-only connection"))
}

fn load_u32(value: i64, column: &str) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        // This should never happen, all values are validated on insert
        log::error!("Invalid value in column {column}: {value}");
        anyhow!("Invalid value in column {column}: {value}").into()
    })
}

fn resolve_venue_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::venue::dsl;
    schema::venue::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::debug!("Failed to resolve venue id '{id}': {e}");
            e
        })
        .map_err(from_diesel_err)
}

fn load_venue(venue: models::Venue) -> Result<Venue> {
    let models::Venue {
        rowid: _,
        id,
        name,
        wait_minutes,
        cover_amount,
        report_count,
        last_updated_at,
    } = venue;
    Ok(Venue {
        id: id.into(),
        name,
        status: PublishedStatus {
            wait_minutes: load_u32(wait_minutes, "venue.wait_minutes")?,
            cover_amount: load_u32(cover_amount, "venue.cover_amount")?,
            report_count: load_u32(report_count, "venue.report_count")?,
            last_updated: Timestamp::from_millis(last_updated_at),
        },
    })
}

fn load_report(report: models::JoinedVenueReport) -> Result<Report> {
    let models::JoinedVenueReport {
        rowid: _,
        id,
        reporter_id,
        wait_minutes,
        cover_amount,
        submitted_at,
        venue_id,
    } = report;
    Ok(Report {
        id: id.into(),
        venue_id: venue_id.into(),
        reporter_id: reporter_id.map(Into::into),
        wait_minutes: load_u32(wait_minutes, "venue_report.wait_minutes")?,
        cover_amount: load_u32(cover_amount, "venue_report.cover_amount")?,
        submitted_at: Timestamp::from_millis(submitted_at),
    })
}
