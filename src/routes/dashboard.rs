use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::Method,
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};
use bytes::BytesMut;
use tower_http::cors::{Any, CorsLayer};

use super::page::{render_page, Page};
use crate::{
    error::AppError,
    models::UploadCandidate,
    services::{validation::MAX_FILE_SIZE, AnalysisService},
    AppState,
};

/// Reading stops one byte past the largest accepted file. That is enough
/// for validation to reject it as too large, whatever its real size.
const READ_LIMIT: usize = MAX_FILE_SIZE as usize + 1;

pub fn routes<S: AnalysisService + 'static>() -> Router<Arc<AppState<S>>> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .route("/", get(index::<S>))
        .route("/upload", post(upload::<S>))
        .route("/sample", post(load_sample::<S>))
        .route("/reset", post(reset::<S>))
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
}

async fn index<S: AnalysisService + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Html<String> {
    let controller = state.controller.lock().await;
    Html(render_page(&Page::from_controller(&*controller)))
}

async fn upload<S: AnalysisService + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut candidate = None;
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let name = field.file_name().unwrap_or_default().to_string();
        let mut content = BytesMut::new();
        while let Some(chunk) = field.chunk().await? {
            let room = READ_LIMIT - content.len();
            content.extend_from_slice(&chunk[..chunk.len().min(room)]);
            if content.len() == READ_LIMIT {
                tracing::debug!("Stopped reading {} at {} bytes", name, READ_LIMIT);
                break;
            }
        }
        // Only the first file is used.
        candidate = Some(UploadCandidate::new(name, content.freeze()));
        break;
    }

    match candidate {
        // The outcome is already on the controller's banner.
        Some(candidate) => {
            let _ = state.submit_upload(candidate).await;
        }
        None => tracing::debug!("Upload form submitted without a file"),
    }
    Ok(Redirect::to("/"))
}

async fn load_sample<S: AnalysisService + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Redirect {
    let _ = state.load_sample().await;
    Redirect::to("/")
}

async fn reset<S: AnalysisService + 'static>(State(state): State<Arc<AppState<S>>>) -> Redirect {
    state.controller.lock().await.reset();
    Redirect::to("/")
}
