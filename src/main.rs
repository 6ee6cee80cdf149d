use std::env;
use std::process;

use anyhow::Result;
use tracing::error;

use block_crawler::config::{Config, USAGE};
use block_crawler::db::Database;
use block_crawler::ingestion::IngestionService;
use block_crawler::rpc::HttpRpcClient;

#[tokio::main]
async fn main() -> Result<()> {
    let Some(config) = Config::from_args(env::args().skip(1)) else {
        eprintln!("{USAGE}");
        process::exit(1);
    };

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(e) = run(&config).await {
        error!("ingestion failed: {e}");
        process::exit(1);
    }

    Ok(())
}

async fn run(config: &Config) -> Result<()> {
    let client = HttpRpcClient::new(&config.rpc_url)?;
    let db = Database::connect(&config.db_path).await?;

    let mut service = IngestionService::new(client, db);
    service.run(&config.block_range).await?;

    Ok(())
}
