use anyhow::{anyhow, Result};
use std::{
    collections::HashMap,
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};
use tg_application::prelude as flows;
use tg_core::entities::{Id, ReporterId};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tailgator.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub aggregation: Aggregation,
    pub webserver: WebServer,
    pub identity: Identity,
    pub venues: Vec<(Id, String)>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::try_default()?
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

pub struct Aggregation {
    pub settings: flows::Settings,
    /// Recompute all venues periodically if set
    pub sweep_interval: Option<Duration>,
}

pub struct WebServer {
    pub enable_cors: bool,
}

pub struct Identity {
    pub tokens: HashMap<String, ReporterId>,
}

fn window(name: &str, duration: Duration) -> Result<time::Duration> {
    let window = time::Duration::try_from(duration)
        .map_err(|_| anyhow!("The {name} is out of range: {duration:?}"))?;
    if window.is_zero() {
        return Err(anyhow!("The {name} must not be zero"));
    }
    Ok(window)
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            aggregation,
            reports,
            webserver,
            identity,
            venues,
        } = from;

        // Missing sections are taken from the default configuration
        let defaults = raw::Config::try_default()?;
        let missing = |section: &str| anyhow!("Missing [{section}] configuration");

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.or(defaults.db).ok_or_else(|| missing("db"))?;
        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be zero"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Aggregation {
            collapse_window,
            aggregation_window,
            storage_timeout,
            sweep_interval,
        } = aggregation
            .or(defaults.aggregation)
            .ok_or_else(|| missing("aggregation"))?;
        let raw::Reports { allow_anonymous } = reports
            .or(defaults.reports)
            .ok_or_else(|| missing("reports"))?;
        if storage_timeout.is_zero() {
            return Err(anyhow!("The storage timeout must not be zero"));
        }
        let settings = flows::Settings {
            collapse_window: window("collapse window", collapse_window)?,
            aggregation_window: window("aggregation window", aggregation_window)?,
            storage_timeout,
            allow_anonymous_reports: allow_anonymous,
        };
        let aggregation = Aggregation {
            settings,
            sweep_interval: sweep_interval.filter(|interval| !interval.is_zero()),
        };

        let raw::WebServer { cors } = webserver
            .or(defaults.webserver)
            .ok_or_else(|| missing("webserver"))?;
        let webserver = WebServer { enable_cors: cors };

        let tokens = identity
            .or(defaults.identity)
            .map(|identity| identity.tokens)
            .unwrap_or_default()
            .into_iter()
            .map(|(token, reporter)| (token, ReporterId::from(reporter)))
            .collect();
        let identity = Identity { tokens };

        let venues = venues
            .or(defaults.venues)
            .unwrap_or_default()
            .into_iter()
            .map(|raw::Venue { id, name }| (Id::from(id), name))
            .collect();

        Ok(Self {
            db,
            aggregation,
            webserver,
            identity,
            venues,
        })
    }
}
