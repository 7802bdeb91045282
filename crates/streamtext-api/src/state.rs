use std::sync::Arc;

use streamtext_stream::{load_report, ChunkEmitter};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Shared application state passed to all handlers
///
/// Read-only after startup: the report text and the resolved profile live inside the
/// emitter, and each request spawns its own emission task from it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub emitter: ChunkEmitter,
}

impl AppState {
    pub fn new(config: Config, report: Arc<str>) -> ApiResult<Self> {
        if config.stream.channel_capacity == 0 {
            return Err(ApiError::Config(
                "stream.channel_capacity must be at least 1".to_string(),
            ));
        }

        let profile = config.stream.resolve_profile()?;
        let emitter = ChunkEmitter::new(report, profile)
            .with_channel_capacity(config.stream.channel_capacity);

        Ok(Self {
            config: Arc::new(config),
            emitter,
        })
    }

    /// Build state with the report the config points at (or the built-in one).
    pub fn from_config(config: Config) -> ApiResult<Self> {
        let report = load_report(config.stream.text_file.as_deref())?;
        Self::new(config, report)
    }
}
