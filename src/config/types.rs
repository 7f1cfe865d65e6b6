use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Process-wide configuration, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitHub REST API
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl Config {
    /// Public events feed URL for a username.
    pub fn events_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/events/public",
            self.api_base.trim_end_matches('/'),
            username
        )
    }
}
