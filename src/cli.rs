use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tg_application::prelude as flows;
use tg_core::{
    entities::{Timestamp, Venue},
    usecases,
    venue_source::{StaticVenues, StoredVenues},
};
use tg_db_sqlite::Connections;

use crate::{config::Config, gateways, recurring_recompute};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tailgator")]
#[command(about = "Crowd-sourced wait times and cover charges of venues")]
#[command(version)]
struct Args {
    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database URL
    #[arg(long, global = true)]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Migrate and seed the database and run the web server (default)
    Serve {
        /// Allow requests from any origin
        #[arg(long)]
        enable_cors: bool,
    },
    /// Migrate and seed the database
    Seed,
    /// Recompute the published status of one or all venues
    Recompute {
        /// Venue ID
        #[arg(long)]
        venue: Option<String>,
    },
    /// Print all venues
    Venues {
        /// Print the configured seed instead of the stored venues
        #[arg(long)]
        seed: bool,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    let command = args.command.unwrap_or(Command::Serve { enable_cors: false });
    match command {
        Command::Serve { enable_cors } => serve(cfg, enable_cors).await,
        Command::Seed => {
            let connections = connect(&cfg)?;
            seed(&connections, &cfg)?;
            Ok(())
        }
        Command::Recompute { venue } => {
            let connections = connect(&cfg)?;
            let aggregator = flows::Aggregator::new(connections, cfg.aggregation.settings);
            let now = Timestamp::now();
            match venue {
                Some(venue_id) => {
                    let status = aggregator.recompute(&venue_id.into(), now).await?;
                    println!(
                        "{} min wait, {} cover, {} reports",
                        status.wait_minutes, status.cover_amount, status.report_count
                    );
                }
                None => {
                    let summary = aggregator.recompute_all(now).await?;
                    println!("Recomputed {} venues", summary.recomputed);
                    for err in summary.failed {
                        println!("Failed: {err}");
                    }
                }
            }
            Ok(())
        }
        Command::Venues { seed } => {
            let venues = if seed {
                usecases::list_venues(&StaticVenues::new(cfg.venues))?
            } else {
                let connections = connect(&cfg)?;
                let db = connections.shared()?;
                usecases::list_venues(&StoredVenues(&db))?
            };
            for venue in &venues {
                print_venue(venue);
            }
            Ok(())
        }
    }
}

fn connect(cfg: &Config) -> Result<Connections> {
    log::info!("Connecting to SQLite database {}", cfg.db.conn_sqlite);
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    tg_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    Ok(connections)
}

fn seed(connections: &Connections, cfg: &Config) -> Result<usize> {
    if cfg.venues.is_empty() {
        log::warn!("No venues configured");
        return Ok(0);
    }
    let source = StaticVenues::new(cfg.venues.iter().cloned());
    Ok(flows::seed_venues(connections, &source)?)
}

async fn serve(cfg: Config, enable_cors: bool) -> Result<()> {
    let connections = connect(&cfg)?;
    seed(&connections, &cfg)?;
    let Config {
        aggregation,
        webserver,
        identity,
        ..
    } = cfg;
    let aggregator = flows::Aggregator::new(connections.clone(), aggregation.settings);
    if let Some(interval) = aggregation.sweep_interval {
        log::info!("Recompute all venues every {interval:?}");
        tokio::spawn(recurring_recompute::run(aggregator.clone(), interval));
    }
    let identity = gateways::identity_gateway(identity);
    tg_webserver::run(
        connections,
        aggregator,
        Box::new(identity),
        enable_cors || webserver.enable_cors,
        VERSION,
    )
    .await
}

fn print_venue(venue: &Venue) {
    let Venue { id, name, status } = venue;
    println!(
        "{id}\t{name}\t{} min\t{} cover\t{} reports\t{}",
        status.wait_minutes, status.cover_amount, status.report_count, status.last_updated
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn serve_by_default() {
        let args = Args::try_parse_from(["tailgator", "--db-url", ":memory:"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.db_url.as_deref(), Some(":memory:"));
    }

    #[test]
    fn parse_subcommands() {
        let args = Args::try_parse_from(["tailgator", "recompute", "--venue", "a"]).unwrap();
        assert!(matches!(args.command, Some(Command::Recompute { venue: Some(v) }) if v == "a"));
        let args = Args::try_parse_from(["tailgator", "venues", "--seed"]).unwrap();
        assert!(matches!(args.command, Some(Command::Venues { seed: true })));
        let args = Args::try_parse_from(["tailgator", "serve", "--enable-cors", "--config", "x.toml"])
            .unwrap();
        assert!(matches!(args.command, Some(Command::Serve { enable_cors: true })));
        assert_eq!(args.config, Some(PathBuf::from("x.toml")));
    }
}
