//! Runs the insert workflow over a single dedicated connection.

use anyhow::Context;
use sqlx::Connection;
use thing_inserts::postgres::postgres_connect;
use thing_inserts::{insert_things_with_delays, logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let mut connection = postgres_connect::connect(&config)
        .await
        .context("failed to connect to database")?;

    let result = insert_things_with_delays(&mut connection, &config.delays).await;
    let closed = connection.close().await;

    Ok(postgres_connect::after_teardown(result, closed)?)
}
