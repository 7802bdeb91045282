use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Failed to read report text from {path}: {source}")]
    ReadText {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report text in {0} is empty")]
    EmptyText(PathBuf),

    #[error("Unknown stream profile: {0}")]
    UnknownProfile(String),
}

pub type StreamResult<T> = Result<T, StreamError>;
