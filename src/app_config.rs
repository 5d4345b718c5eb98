use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    logging: Logging,
    payloads: Payloads,
    remote: Option<Remote>,
}

impl AppConfig {
    /// Loads `config.toml`, then the optional `config_local.toml`, then `GEOLOC__*` environment variables
    /// (e.g. `GEOLOC__PAYLOADS__DIRECTORY`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("GEOLOC").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    pub fn payloads(&self) -> &Payloads {
        &self.payloads
    }

    pub fn remote(&self) -> Option<&Remote> {
        self.remote.as_ref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    level: String,
}

impl Logging {
    /// The configured level, `INFO` if it cannot be parsed.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

#[derive(Debug, Deserialize)]
pub struct Payloads {
    directory: String,
    extension: String,
}

impl Payloads {
    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[derive(Debug, Deserialize)]
pub struct Remote {
    url: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Remote {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                logging: Logging { level: "debug".to_string() },
                payloads: Payloads {
                    directory: "tests/resources/payloads".to_string(),
                    extension: "json".to_string(),
                },
                remote: None,
            },
        }
    }

    pub fn remote_url(mut self, url: String) -> Self {
        self.config.remote = Some(Remote {
            url,
            timeout: Duration::from_secs(5),
        });
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
