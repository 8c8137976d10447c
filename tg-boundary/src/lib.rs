use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct PublishedStatus {
    pub wait_minutes : u32,
    pub cover_amount : u32,
    pub report_count : u32,
    /// Unix timestamp in milliseconds
    pub last_updated : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Venue {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub status: PublishedStatus,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Report {
    pub id: String,
    pub venue_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_id: Option<String>,
    pub wait_minutes: u32,
    pub cover_amount: u32,
    /// Unix timestamp in milliseconds
    pub submitted_at: i64,
}

/// Values are signed to be able to reject invalid
/// input with a meaningful error message.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewReport {
    pub wait_minutes: i64,
    pub cover_amount: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable error message.
    pub message: String,
}
