//! A thin database helper over a pool, in the style of the higher-level
//! access libraries: `run` for statements, `one` for single-row lookups.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::error::ThingError;
use crate::postgres::handle::{exactly_one, statement, Handle};
use crate::thing::thing::Thing;

#[derive(Debug, Clone, Copy)]
pub struct DatabaseOptions {
    pub min_connections: u32,
    pub max_connections: u32,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        DatabaseOptions {
            min_connections: 1,
            max_connections: 1,
        }
    }
}

pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn connect(config: &Config, options: DatabaseOptions) -> Result<Self, sqlx::Error> {
        tracing::debug!(
            "database pool {}..{} connection(s) to {}:{}",
            options.min_connections,
            options.max_connections,
            config.host,
            config.port
        );
        let pool = PgPoolOptions::new()
            .min_connections(options.min_connections)
            .max_connections(options.max_connections)
            .connect_with(config.connect_options())
            .await?;

        Ok(Database { pool })
    }

    /// Closes every pooled connection, waiting for checked out ones to return.
    pub async fn disconnect(self) {
        self.pool.close().await;
        tracing::debug!("database disconnected");
    }
}

#[async_trait]
impl Handle for Database {
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError> {
        tracing::debug!(sql, "run");
        let result = statement(sql, params).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError> {
        tracing::debug!(sql, "one");
        let rows = statement(sql, params).fetch_all(&self.pool).await?;
        exactly_one(rows, params)
    }
}
