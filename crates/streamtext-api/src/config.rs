use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use streamtext_stream::{StreamProfile, StreamResult};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub stream: StreamConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamConfig {
    /// `character` or `word`
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Overrides the profile's warm-up delay
    #[serde(default)]
    pub initial_delay_ms: Option<u64>,
    /// Overrides the profile's per-frame delay
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    /// Replaces the built-in report
    #[serde(default)]
    pub text_file: Option<PathBuf>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            initial_delay_ms: None,
            frame_delay_ms: None,
            channel_capacity: default_channel_capacity(),
            text_file: None,
        }
    }
}

fn default_profile() -> String {
    "character".to_string()
}

fn default_channel_capacity() -> usize {
    16
}

impl StreamConfig {
    /// Named profile with any delay overrides applied.
    pub fn resolve_profile(&self) -> StreamResult<StreamProfile> {
        let mut profile: StreamProfile = self.profile.parse()?;

        if let Some(ms) = self.initial_delay_ms {
            profile = profile.with_initial_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.frame_delay_ms {
            profile = profile.with_frame_delay(Duration::from_millis(ms));
        }

        Ok(profile)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. Built-in defaults
    /// 2. config/default.toml
    /// 3. config/{ENV}.toml (if ENV is set)
    /// 4. Environment variables `STREAMTEXT_<SECTION>__<KEY>` (STREAMTEXT_SERVER__PORT,
    ///    STREAMTEXT_STREAM__FRAME_DELAY_MS, ...)
    /// 5. `PORT`, which wins over `server.port` from any other source
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());

        let builder = ConfigLoader::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("STREAMTEXT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;

        let mut cfg: Config = config.try_deserialize()?;

        // Conventional single-variable overrides
        if let Ok(port) = std::env::var("PORT") {
            cfg.server.port = port
                .parse()
                .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        }

        Ok(cfg)
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = ConfigLoader::builder().add_source(File::from(path.as_ref()));

        let config = builder.build()?;
        config.try_deserialize()
    }
}
