pub mod aggregate;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;
pub mod venue_source;

pub mod entities {
    pub use tg_entities::{favorite::*, id::*, report::*, time::*, venue::*};
}

pub use repositories::Error as RepoError;
