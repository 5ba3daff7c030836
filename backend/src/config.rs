//! Host configuration read from the environment.
//!
//! | Variable                | Default                 |
//! |-------------------------|-------------------------|
//! | `DQ_HOST`               | `127.0.0.1`             |
//! | `DQ_PORT`               | `8080`                  |
//! | `DQ_API_URL`            | `http://localhost:8000` |
//! | `DQ_REQUEST_TIMEOUT_MS` | `60000`                 |
//! | `DQ_DEFAULT_FORMAT`     | `parquet`               |
//! | `DQ_OPEN_BROWSER`       | `1`                     |
//!
//! Invalid values fall back to the default with a warning.

use common::requests::{ClientConfig, DEFAULT_API_URL, DEFAULT_FORMAT, DEFAULT_TIMEOUT_MS};
use log::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Served to the browser at `GET /api/config`.
    pub client: ClientConfig,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let text = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match text("DQ_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid DQ_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let request_timeout_ms = match text("DQ_REQUEST_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    warn!("Invalid DQ_REQUEST_TIMEOUT_MS '{}', using {}", raw, DEFAULT_TIMEOUT_MS);
                    DEFAULT_TIMEOUT_MS
                }
            },
            None => DEFAULT_TIMEOUT_MS,
        };

        let open_browser = !matches!(
            text("DQ_OPEN_BROWSER").map(|v| v.to_lowercase()).as_deref(),
            Some("0") | Some("false")
        );

        HostConfig {
            host: text("DQ_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            open_browser,
            client: ClientConfig {
                api_base_url: text("DQ_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
                request_timeout_ms,
                default_format: text("DQ_DEFAULT_FORMAT")
                    .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            },
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
