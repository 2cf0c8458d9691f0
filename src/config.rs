use config::{Config as ConfigLoader, ConfigError, File};
use serde::Deserialize;
use std::time::Duration;

/// Default public endpoint serving the activity feed.
const DEFAULT_URL: &str = "https://udayjaju24.github.io/API-JSON/db.json";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// URL of the activity feed. The endpoint has drifted between payload
    /// shapes historically; the fetcher tolerates both, so one URL suffices.
    pub url: String,
    pub timeout_seconds: Option<u64>,
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Config {
    /// Load from an optional `config` file in the working directory, falling
    /// back to built-in defaults for anything unset.
    pub fn load() -> Result<Self, ConfigError> {
        let s = ConfigLoader::builder()
            .set_default("source.url", DEFAULT_URL)?
            .add_source(File::with_name("config").required(false))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig {
                url: DEFAULT_URL.to_string(),
                timeout_seconds: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.url, DEFAULT_URL);
        assert_eq!(config.source.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_explicit_timeout_wins() {
        let source = SourceConfig {
            url: DEFAULT_URL.to_string(),
            timeout_seconds: Some(5),
        };
        assert_eq!(source.timeout(), Duration::from_secs(5));
    }
}
