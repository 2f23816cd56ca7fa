use std::env;

use url::Url;

use crate::domain::AppError;

/// Environment variable naming the governance server root.
pub const BACKEND_URL_ENV: &str = "NOVA_BACKEND_URL";

/// Connection settings for the governance server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server root URL; endpoint paths are joined onto it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_secs: default_timeout() }
    }
}

impl ApiConfig {
    /// Resolve the server root: explicit value first, then `NOVA_BACKEND_URL`,
    /// then the localhost default.
    pub fn resolve(server: Option<&str>) -> Result<Self, AppError> {
        let base_url = match server.map(str::to_owned).or_else(|| env::var(BACKEND_URL_ENV).ok())
        {
            Some(raw) => Url::parse(&raw).map_err(|e| {
                AppError::configuration(format!("Invalid server URL '{}': {}", raw, e))
            })?,
            None => default_base_url(),
        };

        Ok(Self { base_url, timeout_secs: default_timeout() })
    }
}

fn default_base_url() -> Url {
    Url::parse("http://localhost:8000").expect("Default backend URL must be valid")
}

fn default_timeout() -> u64 {
    10
}
