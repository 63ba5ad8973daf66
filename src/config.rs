use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::{info, warn};

pub struct Config {
    pub api_base_url: String,
    pub bind_addr: String,
    pub storage_path: String,
    pub http_timeout: Duration,
    pub max_workers: usize,
    /// Require sign-in for `/accommodation/{id}`.
    pub protect_details: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base_url: try_load("API_BASE_URL", "http://localhost:8080/api"),
            bind_addr: try_load("BIND_ADDR", "127.0.0.1:3000"),
            storage_path: try_load("STORAGE_PATH", "accommodation_finder.sqlite3"),
            http_timeout: Duration::from_secs(try_load("HTTP_TIMEOUT_SECS", "30")),
            max_workers: try_load("MAX_WORKERS", "1"),
            protect_details: try_load("PROTECT_DETAILS", "false"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.trim().parse() {
        Ok(v) => v,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
                .parse()
                .unwrap_or_else(|_| panic!("default for {key} must parse"))
        }
    }
}
