use std::path::Path;
use std::sync::Arc;

use crate::error::{StreamError, StreamResult};

const RAW_REPORT: &str = include_str!("../assets/climate_report.txt");

/// Built-in climate report, trimmed of its surrounding blank lines.
///
/// Line-internal whitespace (including the trailing spaces before each line break)
/// is kept, so clients comparing byte-for-byte see exactly this value.
pub static CLIMATE_REPORT: &str = trim_report(RAW_REPORT);

/// Leading and trailing whitespace is dropped from built-in and override text alike.
const fn trim_report(raw: &str) -> &str {
    raw.trim_ascii()
}

/// Resolve the text served by every stream for the life of the process.
///
/// With no override the built-in report is used. An override file is read once and
/// trimmed the same way; an override that is blank after trimming is rejected.
pub fn load_report(path: Option<&Path>) -> StreamResult<Arc<str>> {
    let Some(path) = path else {
        return Ok(Arc::from(CLIMATE_REPORT));
    };

    let raw = std::fs::read_to_string(path).map_err(|source| StreamError::ReadText {
        path: path.to_path_buf(),
        source,
    })?;

    let text = trim_report(&raw);
    if text.is_empty() {
        return Err(StreamError::EmptyText(path.to_path_buf()));
    }

    tracing::info!(path = %path.display(), chars = text.chars().count(), "Loaded report text override");
    Ok(Arc::from(text))
}
