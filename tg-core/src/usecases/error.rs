use crate::{repositories, util::validate::InvalidValue};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("The status is older than the published status")]
    Conflict,
    #[error("Duplicate venue '{0}'")]
    DuplicateVenue(String),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}
