use std::sync::Arc;
use std::time::Instant;

use crate::error::UploadError;
use crate::models::{AnalysisResult, UploadCandidate};
use crate::services::analysis_client::AnalysisService;
use crate::services::dashboard::{DashboardRenderer, DashboardView};
use crate::services::feedback::{Feedback, ToastKind};
use crate::services::validation::ValidationPolicy;

const UPLOAD_FAILED: &str = "An error occurred while processing the file.";
const SAMPLE_FAILED: &str = "An error occurred while loading sample data.";

/// Which of the two mutually exclusive surfaces is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Upload,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    Error,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Upload,
    Sample,
}

impl Action {
    fn fallback_message(self) -> &'static str {
        match self {
            Action::Upload => UPLOAD_FAILED,
            Action::Sample => SAMPLE_FAILED,
        }
    }
}

enum Request {
    Upload(UploadCandidate),
    Sample,
}

/// An analysis request that has been started but not sent. It owns a
/// handle to the service, so it can be awaited without the controller.
pub struct PendingRequest<S> {
    service: Arc<S>,
    request: Request,
}

impl<S: AnalysisService> PendingRequest<S> {
    pub async fn send(self) -> CompletedRequest {
        let start = Instant::now();
        let (action, response) = match &self.request {
            Request::Upload(candidate) => {
                let response = self.service.upload(candidate).await;
                tracing::info!("Upload of {} finished in {:?}", candidate.name, start.elapsed());
                (Action::Upload, response)
            }
            Request::Sample => {
                let response = self.service.sample_data().await;
                tracing::info!("Sample data request finished in {:?}", start.elapsed());
                (Action::Sample, response)
            }
        };

        CompletedRequest {
            action,
            response: response.map_err(UploadError::from),
        }
    }
}

/// The service's answer, waiting to be applied with
/// [`UploadController::complete`].
pub struct CompletedRequest {
    action: Action,
    response: Result<AnalysisResult, UploadError>,
}

/// Owns the upload lifecycle: validation, the analysis request, and the
/// loading/error state around it. Rendering is delegated to the
/// [`DashboardRenderer`] it holds.
///
/// A request runs in three steps: `begin_*` validates and shows the loading
/// indicator, [`PendingRequest::send`] talks to the service without touching
/// the controller, and [`complete`](Self::complete) hides the indicator and
/// shows the outcome.
pub struct UploadController<S> {
    service: Arc<S>,
    policy: ValidationPolicy,
    renderer: DashboardRenderer,
    feedback: Feedback,
    surface: Surface,
    in_flight: usize,
    selected_file: Option<String>,
}

impl<S: AnalysisService> UploadController<S> {
    pub fn new(service: S, renderer: DashboardRenderer) -> Self {
        Self {
            service: Arc::new(service),
            policy: ValidationPolicy::default(),
            renderer,
            feedback: Feedback::default(),
            surface: Surface::Upload,
            in_flight: 0,
            selected_file: None,
        }
    }

    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadError> {
        self.policy.validate(candidate)
    }

    /// Validates `candidate` and, if it passes, starts its upload. A
    /// rejection goes straight to the error banner and nothing is sent.
    pub fn begin_upload(
        &mut self,
        candidate: UploadCandidate,
    ) -> Result<PendingRequest<S>, UploadError> {
        if let Err(err) = self.validate(&candidate) {
            tracing::warn!("Rejected {} ({} bytes): {:?}", candidate.name, candidate.size(), err);
            self.feedback.show_error(err.to_string());
            return Err(err);
        }

        tracing::info!("Uploading {} ({} bytes)", candidate.name, candidate.size());
        self.selected_file = Some(candidate.name.clone());
        Ok(self.begin(Request::Upload(candidate)))
    }

    pub fn begin_sample(&mut self) -> PendingRequest<S> {
        tracing::info!("Loading sample data");
        self.begin(Request::Sample)
    }

    fn begin(&mut self, request: Request) -> PendingRequest<S> {
        self.feedback.clear_error();
        self.in_flight += 1;
        self.feedback.show_loading();
        PendingRequest {
            service: Arc::clone(&self.service),
            request,
        }
    }

    /// Applies a finished request. The loading indicator goes away once no
    /// other request is outstanding.
    pub fn complete(&mut self, completed: CompletedRequest) -> Result<(), UploadError> {
        self.settle();
        self.finish(completed.action, completed.response)
    }

    /// Ends a request whose answer will never arrive.
    pub fn abandon(&mut self, err: UploadError) {
        tracing::error!("Analysis request abandoned: {}", err);
        self.settle();
        self.feedback.show_error(err.to_string());
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.feedback.hide_loading();
        }
    }

    /// Validates `candidate` and, if it passes, sends it for analysis.
    /// Failures end up in the error banner; the returned value mirrors it.
    pub async fn submit_upload(&mut self, candidate: UploadCandidate) -> Result<(), UploadError> {
        let pending = self.begin_upload(candidate)?;
        let completed = pending.send().await;
        self.complete(completed)
    }

    /// Same lifecycle as [`submit_upload`](Self::submit_upload) using the
    /// service's built-in sample dataset.
    pub async fn load_sample(&mut self) -> Result<(), UploadError> {
        let completed = self.begin_sample().send().await;
        self.complete(completed)
    }

    fn finish(
        &mut self,
        action: Action,
        response: Result<AnalysisResult, UploadError>,
    ) -> Result<(), UploadError> {
        let outcome = response.and_then(|result| self.display(action, &result));
        if let Err(err) = &outcome {
            match err {
                UploadError::Transport(msg) => tracing::error!("Analysis request failed: {}", msg),
                UploadError::Integrity(msg) => tracing::error!("Unusable analysis result: {}", msg),
                other => tracing::warn!("Analysis failed: {}", other),
            }
            self.feedback.show_error(err.to_string());
        }
        outcome
    }

    fn display(&mut self, action: Action, result: &AnalysisResult) -> Result<(), UploadError> {
        if !result.success {
            let message = result
                .error
                .clone()
                .unwrap_or_else(|| action.fallback_message().to_string());
            return Err(UploadError::ServerReported(message));
        }

        self.renderer.render(result)?;
        let toast = format!("Loaded {}", result.filename.as_deref().unwrap_or("dataset"));
        self.surface = Surface::Dashboard;
        self.feedback.show_toast(toast, ToastKind::Success);
        Ok(())
    }

    /// Back to the upload surface with nothing left over.
    pub fn reset(&mut self) {
        tracing::info!("Resetting dashboard");
        self.renderer.teardown();
        self.surface = Surface::Upload;
        self.selected_file = None;
        self.feedback.clear_error();
    }

    pub fn ui_state(&self) -> UiState {
        if self.feedback.is_loading() {
            UiState::Loading
        } else if self.feedback.error().is_some() {
            UiState::Error
        } else {
            match self.surface {
                Surface::Upload => UiState::Idle,
                Surface::Dashboard => UiState::Dashboard,
            }
        }
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match self.surface {
            Surface::Dashboard => self.renderer.view(),
            Surface::Upload => None,
        }
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn selected_file(&self) -> Option<&str> {
        self.selected_file.as_deref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
