use std::path::Path;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "info,sqlx=warn";

/// Installs the global subscriber. `.env` is loaded first so a `RUST_LOG` set
/// there takes effect.
pub fn init() {
    tracing_subscriber::registry()
        .with(load_filter(None, "RUST_LOG"))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Loads the env file (`.env` when `None`) and builds the filter from `var`.
fn load_filter(env_file: Option<&Path>, var: &str) -> EnvFilter {
    let _ = match env_file {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    };
    EnvFilter::try_from_env(var).unwrap_or_else(|_| DEFAULT_FILTER.into())
}
