use std::future::Future;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::error::TransportError;
use crate::models::{AnalysisResult, HealthStatus, UploadCandidate};

/// The remote service that parses spreadsheets and precomputes charts.
pub trait AnalysisService: Send + Sync {
    fn upload(
        &self,
        candidate: &UploadCandidate,
    ) -> impl Future<Output = Result<AnalysisResult, TransportError>> + Send;

    fn sample_data(&self) -> impl Future<Output = Result<AnalysisResult, TransportError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    base_url: String,
    client: Client,
}

impl HttpAnalysisClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        decode(response).await
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn upload(&self, candidate: &UploadCandidate) -> Result<AnalysisResult, TransportError> {
        let part = Part::bytes(candidate.content.to_vec()).file_name(candidate.name.clone());
        let form = Form::new().part("file", part);

        tracing::debug!("POST {}/upload ({} bytes)", self.base_url, candidate.size());
        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;
        decode(response).await
    }

    async fn sample_data(&self) -> Result<AnalysisResult, TransportError> {
        tracing::debug!("GET {}/sample-data", self.base_url);
        let response = self
            .client
            .get(format!("{}/sample-data", self.base_url))
            .send()
            .await?;
        decode(response).await
    }
}

// Status codes are not inspected: the service reports failures as
// `{success: false, error}` bodies on 4xx/5xx responses.
async fn decode<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, TransportError> {
    let status = response.status();
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Undecodable body with status {}: {}", status, e);
        TransportError::Decode(e)
    })
}
