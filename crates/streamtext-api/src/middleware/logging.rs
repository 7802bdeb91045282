use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;

use crate::state::AppState;

/// Request logging middleware
///
/// Tags every request with the active stream profile. For SSE responses the
/// elapsed time is measured to the response headers; the frames that follow are
/// logged by the emitter task under its own span.
pub async fn log_request(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    let sse = is_event_stream(&response);

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        profile = %state.emitter.profile(),
        sse,
        headers_ms = %start.elapsed().as_millis(),
        "Request processed"
    );

    response
}

fn is_event_stream(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/event-stream"))
}
