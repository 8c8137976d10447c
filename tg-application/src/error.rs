use std::time::Duration;

use thiserror::Error;
use tg_core::{entities::Id, repositories::Error as RepoError, usecases};

pub use tg_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(usecases::Error::Repo(err))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] usecases::Error),
    #[error("The storage did not respond within {0:?}")]
    Timeout(Duration),
    #[error("The storage is unavailable: {0}")]
    Unavailable(anyhow::Error),
}

impl AppError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Business(err) if err.is_not_found())
    }
}

/// An error that occurred while processing a single venue.
#[derive(Debug, Error)]
#[error("Venue {venue_id}: {error}")]
pub struct VenueError {
    pub venue_id: Id,
    #[source]
    pub error: AppError,
}
