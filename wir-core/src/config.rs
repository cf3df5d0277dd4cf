use crate::query::WEATHER_PATH;
use serde::{Deserialize, Serialize};

/// Where the weather service lives and how long to wait for it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL every request is issued relative to (default: <http://localhost:5001>)
    #[serde(default = "default_base_url", alias = "serviceBaseUrl")]
    pub service_base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

pub const DEFAULT_SERVICE_BASE_URL: &str = "http://localhost:5001";

fn default_base_url() -> String {
    DEFAULT_SERVICE_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ServiceConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            service_base_url: base_url.into(),
            ..Default::default()
        }
    }

    fn base(&self) -> &str {
        self.service_base_url.trim_end_matches('/')
    }

    pub fn weather_url(&self) -> String {
        format!("{}{}", self.base(), WEATHER_PATH)
    }

    pub fn graph_url(&self, file: &str) -> String {
        format!("{}/graphs/{}.png", self.base(), file)
    }
}
