pub mod config;
pub mod error;
pub mod logging;
pub mod postgres;
pub mod thing;

pub use crate::config::Config;
pub use crate::error::{ConfigError, ThingError};
pub use crate::postgres::handle::Handle;
pub use crate::thing::insert_workflow::{insert_things, insert_things_with_delays, Delays};
pub use crate::thing::thing::Thing;
