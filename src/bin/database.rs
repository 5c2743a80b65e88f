//! Runs the insert workflow through the `Database` helper.

use anyhow::Context;
use thing_inserts::postgres::database::{Database, DatabaseOptions};
use thing_inserts::{insert_things_with_delays, logging, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let mut db = Database::connect(&config, DatabaseOptions::default())
        .await
        .context("failed to connect to database")?;

    let result = insert_things_with_delays(&mut db, &config.delays).await;
    db.disconnect().await;

    Ok(result?)
}
