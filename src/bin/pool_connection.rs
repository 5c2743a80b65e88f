//! Runs the insert workflow over a connection checked out of a one-connection pool.

use anyhow::Context;
use thing_inserts::postgres::postgres_connect;
use thing_inserts::{insert_things_with_delays, logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let pool = postgres_connect::get_pool(&config)
        .await
        .context("failed to open pool")?;
    let mut connection = pool.acquire().await.context("failed to acquire connection")?;

    let result = insert_things_with_delays(&mut connection, &config.delays).await;

    // dropping the connection hands it back to the pool
    drop(connection);
    pool.close().await;

    Ok(result?)
}
