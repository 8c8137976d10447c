use crate::{id::*, report::ReporterId, time::*};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Favorite {
    pub user: ReporterId,
    pub venue_id: Id,
    pub created_at: Timestamp,
}
