use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::state::AppState;

const RUNNING_MESSAGE: &str = "streaming api running";

/// Liveness message at `/`, keyed the way the active profile's clients expect
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut body = Map::new();
    body.insert(
        state.emitter.profile().status_key.clone(),
        Value::from(RUNNING_MESSAGE),
    );
    Json(Value::Object(body))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub profile: String,
    pub report_chars: usize,
}

/// Health check endpoint
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profile: state.emitter.profile().name.clone(),
        report_chars: state.emitter.text().chars().count(),
    })
}
