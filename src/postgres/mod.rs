pub mod database;
pub mod handle;
pub mod postgres_connect;
