use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::stream,
    middleware::logging,
    routes::health,
    state::AppState,
};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/stream", post(stream::stream_report))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging::log_request,
        ))
        .layer(build_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin, method and header, with credentials. Origins are mirrored back since
/// a wildcard cannot be combined with credentials.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
