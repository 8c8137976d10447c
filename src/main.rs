mod cli;
mod config;
mod gateways;
mod recurring_recompute;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    cli::run().await
}
