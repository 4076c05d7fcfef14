use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{services::AnalysisService, AppState};

pub mod dashboard;
pub mod page;

pub fn app<S: AnalysisService + 'static>(state: Arc<AppState<S>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(dashboard::routes())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy", "message": "Dashboard front end is running"}))
}
