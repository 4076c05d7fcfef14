use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every way an upload or sample load can end without a dashboard.
///
/// `Display` is the exact text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Invalid file format. Please upload Excel (.xlsx, .xls) or CSV files.")]
    InvalidFormat,
    #[error("File size too large. Please upload files smaller than 16MB.")]
    TooLarge,
    #[error("{0}")]
    ServerReported(String),
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Invalid analysis result: {0}")]
    Integrity(String),
}

impl UploadError {
    /// Validation rejections are raised before any request is made.
    pub fn is_local(&self) -> bool {
        matches!(self, UploadError::InvalidFormat | UploadError::TooLarge)
    }
}

/// Failure to get a decodable response out of the analysis service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

impl From<TransportError> for UploadError {
    fn from(err: TransportError) -> Self {
        UploadError::Transport(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("{numeric} numeric columns reported for {columns} total columns")]
    Integrity { columns: u64, numeric: u64 },
    #[error("missing basic_info")]
    MissingBasicInfo,
}

impl From<RenderError> for UploadError {
    fn from(err: RenderError) -> Self {
        UploadError::Integrity(err.to_string())
    }
}

/// Errors raised by the front-end routes themselves.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
