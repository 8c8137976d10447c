use crate::{id::*, time::*};

/// The status of a venue as it is exposed to readers.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PublishedStatus {
    pub wait_minutes: u32,
    pub cover_amount: u32,
    /// Number of reports that contributed to the published values.
    ///
    /// Informational only, not a measure of trust.
    pub report_count: u32,
    pub last_updated: Timestamp,
}

impl PublishedStatus {
    /// Neutral status without any recent reports.
    pub const fn neutral(at: Timestamp) -> Self {
        Self {
            wait_minutes: 0,
            cover_amount: 0,
            report_count: 0,
            last_updated: at,
        }
    }

    pub const fn is_neutral(&self) -> bool {
        self.wait_minutes == 0 && self.cover_amount == 0 && self.report_count == 0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Venue {
    pub id: Id,
    pub name: String,
    pub status: PublishedStatus,
}

impl Venue {
    /// A venue that has never been aggregated.
    pub fn new(id: Id, name: String) -> Self {
        Self {
            id,
            name,
            status: PublishedStatus::neutral(Timestamp::UNIX_EPOCH),
        }
    }
}
