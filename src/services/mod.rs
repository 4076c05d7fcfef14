pub mod analysis_client;
pub mod dashboard;
pub mod feedback;
pub mod upload_controller;
pub mod validation;

pub use analysis_client::{AnalysisService, HttpAnalysisClient};
pub use dashboard::DashboardRenderer;
pub use upload_controller::{CompletedRequest, PendingRequest, Surface, UiState, UploadController};
pub use validation::ValidationPolicy;
