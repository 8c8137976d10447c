#[macro_use]
extern crate log;

mod aggregator;
mod favorites;
mod seed_venues;

pub mod prelude {
    pub use super::{aggregator::*, favorites::*, seed_venues::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use tg_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    use super::{error::AppError, Result};

    pub use tg_db_sqlite::{Connections, DbReadOnly, DbReadWrite};

    pub fn shared(connections: &Connections) -> Result<DbReadOnly<'_>> {
        connections.shared().map_err(AppError::Unavailable)
    }

    pub fn exclusive(connections: &Connections) -> Result<DbReadWrite<'_>> {
        connections.exclusive().map_err(AppError::Unavailable)
    }
}
