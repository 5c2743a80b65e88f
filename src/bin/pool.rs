//! Runs the insert workflow with the pool itself as the handle.

use anyhow::Context;
use thing_inserts::postgres::postgres_connect;
use thing_inserts::{insert_things_with_delays, logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let mut pool = postgres_connect::get_pool(&config)
        .await
        .context("failed to open pool")?;

    let result = insert_things_with_delays(&mut pool, &config.delays).await;
    pool.close().await;

    Ok(result?)
}
