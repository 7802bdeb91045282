use axum::{
    extract::State,
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::ReceiverStream;

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct StreamRequest {
    pub prompt: String,
    pub stream: bool,
}

/// Stream the report as chat-completion chunks using Server-Sent Events
///
/// The prompt is accepted and ignored. Each frame is a bare `data:` line; the
/// stream ends with `data: [DONE]`.
pub async fn stream_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StreamRequest>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    tracing::debug!(
        prompt_chars = req.prompt.chars().count(),
        stream = req.stream,
        "Stream requested"
    );

    if state.emitter.profile().require_stream_flag && !req.stream {
        return Err(ApiError::StreamingDisabled);
    }

    // The task is detached; it ends on its own once the body (and receiver) drops.
    let handle = state.emitter.spawn();

    let sse_stream = ReceiverStream::new(handle.receiver)
        .map(|frame| Ok::<Event, Infallible>(Event::default().data(frame.payload())));

    Ok(Sse::new(sse_stream))
}
