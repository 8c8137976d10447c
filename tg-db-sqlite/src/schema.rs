///////////////////////////////////////////////////////////////////////
// Venues
///////////////////////////////////////////////////////////////////////

table! {
    venue (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        wait_minutes -> BigInt,
        cover_amount -> BigInt,
        report_count -> BigInt,
        last_updated_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Reports
///////////////////////////////////////////////////////////////////////

table! {
    venue_report (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        // NULL for anonymous reports
        reporter_id -> Nullable<Text>,
        wait_minutes -> BigInt,
        cover_amount -> BigInt,
        submitted_at -> BigInt,
    }
}

joinable!(venue_report -> venue (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Favorites
///////////////////////////////////////////////////////////////////////

table! {
    venue_favorite (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        user_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(venue_favorite -> venue (parent_rowid));

allow_tables_to_appear_in_same_query!(venue, venue_report, venue_favorite);
