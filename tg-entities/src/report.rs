use std::{borrow::Borrow, fmt};

use crate::{id::*, time::*};

/// Opaque identifier of an authenticated user as provided
/// by the external identity provider.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ReporterId(String);

impl ReporterId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ReporterId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for ReporterId {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl From<String> for ReporterId {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ReporterId {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ReporterId> for String {
    fn from(from: ReporterId) -> Self {
        from.0
    }
}

impl fmt::Display for ReporterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}

/// A single observation of the wait time and cover charge of a venue.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Report {
    pub id: Id,
    pub venue_id: Id,
    /// `None` for anonymous reports
    pub reporter_id: Option<ReporterId>,
    pub wait_minutes: u32,
    pub cover_amount: u32,
    pub submitted_at: Timestamp,
}
