use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, PgConnection, PgPool, Postgres};

use crate::error::ThingError;
use crate::thing::thing::Thing;

/// Anything statements can be executed against: a single connection, a
/// connection checked out of a pool, the pool itself or a [`Database`].
///
/// Parameters are bound positionally as text.
///
/// [`Database`]: crate::postgres::database::Database
#[async_trait]
pub trait Handle: Send {
    /// Executes a statement that returns no rows, yielding the affected row count.
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError>;

    /// Executes a query that must match exactly one row.
    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError>;
}

pub(crate) fn statement<'q>(sql: &'q str, params: &[&'q str]) -> Query<'q, Postgres, PgArguments> {
    params
        .iter()
        .fold(sqlx::query(sql), |query, param| query.bind(*param))
}

/// Reduces the rows of a lookup by name to the single expected thing.
pub(crate) fn exactly_one(rows: Vec<PgRow>, params: &[&str]) -> Result<Thing, ThingError> {
    let name = params.first().copied().unwrap_or_default().to_string();
    match rows.as_slice() {
        [] => Err(ThingError::NotFound { name }),
        [row] => Ok(Thing::from_row(row)?),
        _ => Err(ThingError::TooManyRows {
            name,
            count: rows.len(),
        }),
    }
}

#[async_trait]
impl Handle for PgConnection {
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError> {
        let result = statement(sql, params).execute(&mut *self).await?;
        Ok(result.rows_affected())
    }

    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError> {
        let rows = statement(sql, params).fetch_all(&mut *self).await?;
        exactly_one(rows, params)
    }
}

#[async_trait]
impl Handle for PoolConnection<Postgres> {
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError> {
        Handle::run(&mut **self, sql, params).await
    }

    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError> {
        Handle::one(&mut **self, sql, params).await
    }
}

#[async_trait]
impl Handle for PgPool {
    async fn run(&mut self, sql: &str, params: &[&str]) -> Result<u64, ThingError> {
        let result = statement(sql, params).execute(&*self).await?;
        Ok(result.rows_affected())
    }

    async fn one(&mut self, sql: &str, params: &[&str]) -> Result<Thing, ThingError> {
        let rows = statement(sql, params).fetch_all(&*self).await?;
        exactly_one(rows, params)
    }
}
