use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::Deserialize;
use std::{collections::HashMap, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("tailgator.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub aggregation: Option<Aggregation>,
    pub reports: Option<Reports>,
    pub webserver: Option<WebServer>,
    pub identity: Option<Identity>,
    pub venues: Option<Vec<Venue>>,
}

impl Config {
    pub fn try_default() -> Result<Self, toml::de::Error> {
        toml::from_str(DEFAULT_CONFIG_FILE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub connection_sqlite: String,
    pub connection_pool_size: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Aggregation {
    #[serde(deserialize_with = "deserialize_duration")]
    pub collapse_window: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub aggregation_window: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub storage_timeout: Duration,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub sweep_interval: Option<Duration>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reports {
    pub allow_anonymous: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Identity {
    /// Bearer token -> reporter id
    #[serde(default)]
    pub tokens: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Venue {
    pub id: String,
    pub name: String,
}
