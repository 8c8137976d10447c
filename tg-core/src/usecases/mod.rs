use crate::entities::*;

mod apply_status;
mod error;
mod favorites;
mod load_venues;
mod recent_reports;
mod recompute_status;
mod seed_venues;
mod submit_report;


pub use self::{
    apply_status::*, error::Error, favorites::*, load_venues::*, recent_reports::*,
    recompute_status::*, seed_venues::*, submit_report::*,
};

/// Reports of the same reporter within this window are collapsed.
pub const DEFAULT_COLLAPSE_WINDOW: Duration = Duration::hours(1);

/// Only reports within this window contribute to the published status.
pub const DEFAULT_AGGREGATION_WINDOW: Duration = Duration::hours(24);

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*, util::validate, RepoError};
}
