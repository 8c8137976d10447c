#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = venue)]
pub struct NewVenue<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub wait_minutes: i64,
    pub cover_amount: i64,
    pub report_count: i64,
    pub last_updated_at: i64,
}

#[derive(Queryable)]
pub struct Venue {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub wait_minutes: i64,
    pub cover_amount: i64,
    pub report_count: i64,
    pub last_updated_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = venue_report)]
pub struct NewVenueReport<'a> {
    pub parent_rowid: i64,
    pub id: &'a str,
    pub reporter_id: Option<&'a str>,
    pub wait_minutes: i64,
    pub cover_amount: i64,
    pub submitted_at: i64,
}

#[derive(Queryable)]
pub struct JoinedVenueReport {
    pub rowid: i64,
    pub id: String,
    pub reporter_id: Option<String>,
    pub wait_minutes: i64,
    pub cover_amount: i64,
    pub submitted_at: i64,
    pub venue_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = venue_favorite)]
pub struct NewVenueFavorite<'a> {
    pub parent_rowid: i64,
    pub user_id: &'a str,
    pub created_at: i64,
}
