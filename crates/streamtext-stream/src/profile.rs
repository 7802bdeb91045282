use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::chunking::ChunkPolicy;
use crate::error::StreamError;

/// Named bundle of chunking policy, pacing, and request gating.
///
/// `character` streams eight character slices at 50ms apart and ignores the
/// request's `stream` flag. `word` streams word groups after a 500ms warm-up,
/// 100ms apart, and refuses requests that do not set `stream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamProfile {
    pub name: String,
    pub policy: ChunkPolicy,
    pub initial_delay: Duration,
    pub frame_delay: Duration,
    pub require_stream_flag: bool,
    /// Key of the single-field JSON object served at `/`.
    pub status_key: String,
}

impl StreamProfile {
    pub fn character() -> Self {
        Self {
            name: "character".to_string(),
            policy: ChunkPolicy::characters(),
            initial_delay: Duration::ZERO,
            frame_delay: Duration::from_millis(50),
            require_stream_flag: false,
            status_key: "status".to_string(),
        }
    }

    pub fn word() -> Self {
        Self {
            name: "word".to_string(),
            policy: ChunkPolicy::words(),
            initial_delay: Duration::from_millis(500),
            frame_delay: Duration::from_millis(100),
            require_stream_flag: true,
            status_key: "message".to_string(),
        }
    }

    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = delay;
        self
    }
}

impl Default for StreamProfile {
    fn default() -> Self {
        Self::character()
    }
}

impl FromStr for StreamProfile {
    type Err = StreamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "character" | "characters" | "char" => Ok(Self::character()),
            "word" | "words" => Ok(Self::word()),
            other => Err(StreamError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for StreamProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
