mod favorites;

pub mod prelude {
    pub use std::time::Duration as StdDuration;

    pub use tg_core::{
        entities::*,
        repositories::*,
        usecases,
        venue_source::StaticVenues,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{
        error::AppError,
        prelude as flows,
    };

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            tg_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn with_venues(ids: &[&str]) -> Self {
            let fixture = Self::new();
            let source = StaticVenues::new(
                ids.iter()
                    .map(|id| (Id::from(*id), format!("Venue {id}"))),
            );
            flows::seed_venues(&fixture.db_connections, &source).unwrap();
            fixture
        }

        pub fn aggregator(&self, settings: flows::Settings) -> flows::Aggregator {
            flows::Aggregator::new(self.db_connections.clone(), settings)
        }

        pub fn venue(&self, id: &str) -> Venue {
            self.db_connections.shared().unwrap().get_venue(id).unwrap()
        }

        pub fn reports(&self, venue_id: &str) -> Vec<Report> {
            self.db_connections
                .shared()
                .unwrap()
                .reports_of_venue_since(venue_id, Timestamp::from_millis(i64::MIN))
                .unwrap()
        }
    }

    pub fn new_report(
        venue_id: &str,
        reporter_id: Option<&str>,
        wait_minutes: i64,
        cover_amount: i64,
    ) -> usecases::NewReport {
        usecases::NewReport {
            venue_id: venue_id.into(),
            reporter_id: reporter_id.map(Into::into),
            wait_minutes,
            cover_amount,
        }
    }
}
