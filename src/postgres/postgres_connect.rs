use sqlx::postgres::PgPoolOptions;
use sqlx::{ConnectOptions, PgConnection, PgPool};

use crate::config::Config;
use crate::error::ThingError;

/// Pools in the demos hold a single connection.
pub const CONNECTION_LIMIT: u32 = 1;

/// Opens one dedicated connection. Close it with `Connection::close`.
pub async fn connect(config: &Config) -> Result<PgConnection, sqlx::Error> {
    tracing::debug!("connecting to {}:{}", config.host, config.port);
    config.connect_options().connect().await
}

/// Opens a pool limited to [`CONNECTION_LIMIT`] connections.
pub async fn get_pool(config: &Config) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        "opening pool of {CONNECTION_LIMIT} connection(s) to {}:{}",
        config.host,
        config.port
    );
    PgPoolOptions::new()
        .max_connections(CONNECTION_LIMIT)
        .connect_with(config.connect_options())
        .await
}

/// Picks the outcome to report once a handle has been torn down. A failed
/// teardown is only logged so it never hides the workflow's own error.
pub fn after_teardown(
    result: Result<(), ThingError>,
    teardown: Result<(), sqlx::Error>,
) -> Result<(), ThingError> {
    if let Err(err) = teardown {
        tracing::warn!("failed to close connection: {err}");
    }
    result
}
