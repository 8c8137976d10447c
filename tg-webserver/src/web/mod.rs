use anyhow::{anyhow, Result as Fallible};
use rocket::{config::Config as RocketCfg, Rocket, Route};

use tg_application::prelude::Aggregator;
use tg_core::gateways::identity::IdentityGateway;

pub mod api;
mod guards;
mod sqlite;


pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Gateways {
    identity: Box<dyn IdentityGateway + Send + Sync>,
}

pub(crate) struct Connections {
    db: sqlite::Connections,
    aggregator: Aggregator,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: Connections,
    gateways: Gateways,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Connections { db, aggregator } = connections;
    let Gateways { identity } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let identity = guards::Identity(identity);
    let version = guards::Version(version);

    let mut instance = r
        .manage(db)
        .manage(aggregator)
        .manage(identity)
        .manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(
    db: tg_db_sqlite::Connections,
    aggregator: Aggregator,
    identity: Box<dyn IdentityGateway + Send + Sync>,
    enable_cors: bool,
    version: &'static str,
) -> Fallible<()> {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        version,
    };
    let connections = Connections {
        db: db.into(),
        aggregator,
    };
    let gateways = Gateways { identity };

    let instance = rocket_instance(options, connections, gateways);
    info!("Starting web server");
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default()
            .to_cors()
            .map_err(|err| anyhow!("Invalid CORS options: {err}"))?;
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    server_task.await.map_err(|err| {
        error!("Unable to run web server: {err}");
        anyhow!("Unable to run web server: {err}")
    })?;
    Ok(())
}
