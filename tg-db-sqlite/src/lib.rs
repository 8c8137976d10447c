#[macro_use]
extern crate diesel;

use std::{cell::RefCell, sync::Arc};

use anyhow::{anyhow, Result as Fallible};
use diesel::{
    connection::SimpleConnection as _,
    r2d2::{self, CustomizeConnection},
    sqlite::SqliteConnection,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tg_core::usecases as uc;

mod models;
mod repo_impl;
mod schema;

#[cfg(test)]
mod tests;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Settings of every pooled connection.
///
/// Reports and favorites must refer to a stored venue.
const CONNECTION_PRAGMAS: &str = "
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
";

#[derive(Debug)]
struct ConnectionSetup;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .map_err(r2d2::Error::QueryError)
    }
}

/// Read access, shared with other readers.
pub struct DbReadOnly<'a> {
    conn: RefCell<PooledConnection>,
    _reading: RwLockReadGuard<'a, ConnectionPool>,
}

/// Write access, excluding all other readers and writers.
pub struct DbReadWrite<'a> {
    conn: RefCell<PooledConnection>,
    _writing: RwLockWriteGuard<'a, ConnectionPool>,
}

/// The connection of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl DbReadWrite<'_> {
    /// Runs `f` within a single transaction.
    ///
    /// If `f` fails everything is rolled back and
    /// its error is returned unchanged.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        let mut failure = None;
        let committed = self.conn.get_mut().transaction(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| {
                failure = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        match (committed, failure) {
            (Ok(value), _) => Ok(value),
            (Err(_), Some(err)) => Err(err),
            (Err(err), None) => Err(uc::Error::Repo(repo_impl::from_diesel_err(err))),
        }
    }
}

/// Pooled SQLite connections.
///
/// Readers share the pool while a writer holds it exclusively,
/// so SQLite never reports a locked database to a request.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        {
            // r2d2 keeps retrying a database file it cannot open,
            // a single connection fails right away.
            use diesel::Connection as _;
            SqliteConnection::establish(url)
                .map_err(|err| anyhow!("Failed to open database {url}: {err}"))?;
        }
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionSetup))
            .build(ConnectionManager::new(url))?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let reading = self.pool.read();
        let conn = reading.get().inspect_err(|err| {
            log::error!("No database connection available for reading: {err}");
        })?;
        Ok(DbReadOnly {
            conn: RefCell::new(conn),
            _reading: reading,
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let writing = self.pool.write();
        let conn = writing.get().inspect_err(|err| {
            log::error!("No database connection available for writing: {err}");
        })?;
        Ok(DbReadWrite {
            conn: RefCell::new(conn),
            _writing: writing,
        })
    }
}

pub fn run_embedded_database_migrations(mut db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let applied = db
        .conn
        .get_mut()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("Failed to run database migrations: {err}"))?
        .len();
    log::info!("Applied {applied} pending migration(s)");
    Ok(())
}
