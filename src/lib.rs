pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::UploadError;
use crate::models::UploadCandidate;
use crate::services::{AnalysisService, PendingRequest, UploadController};

/// Shared by every route. The controller sits behind one async lock that is
/// only ever held for state changes, never while the analysis service is
/// working, so the page keeps answering during a request.
pub struct AppState<S> {
    pub controller: Mutex<UploadController<S>>,
}

impl<S> AppState<S> {
    pub fn new(controller: UploadController<S>) -> Arc<Self> {
        Arc::new(Self {
            controller: Mutex::new(controller),
        })
    }
}

impl<S: AnalysisService + 'static> AppState<S> {
    pub async fn submit_upload(
        self: &Arc<Self>,
        candidate: UploadCandidate,
    ) -> Result<(), UploadError> {
        let pending = self.controller.lock().await.begin_upload(candidate)?;
        self.run(pending).await
    }

    pub async fn load_sample(self: &Arc<Self>) -> Result<(), UploadError> {
        let pending = self.controller.lock().await.begin_sample();
        self.run(pending).await
    }

    // The request and its completion run as their own task, so a caller
    // that goes away mid-request cannot leave the loading indicator up.
    async fn run(self: &Arc<Self>, pending: PendingRequest<S>) -> Result<(), UploadError> {
        let state = Arc::clone(self);
        let task = tokio::spawn(async move {
            let completed = pending.send().await;
            let mut controller = state.controller.lock().await;
            controller.complete(completed)
        });

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                let err = UploadError::Transport(e.to_string());
                self.controller.lock().await.abandon(err.clone());
                Err(err)
            }
        }
    }
}
