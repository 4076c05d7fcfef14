use bytes::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A file picked by the user, held only while it is validated and sent.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub name: String,
    pub content: Bytes,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BasicInfo {
    pub rows: u64,
    pub columns: u64,
}

/// One precomputed chart, handed to the drawing library untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChartSpec {
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub layout: Value,
}

/// Response of both analysis endpoints.
///
/// Every field is optional on the wire because a failed analysis only
/// carries `success` and `error`; a missing `success` reads as failure.
/// Row objects keep their key order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub basic_info: Option<BasicInfo>,
    #[serde(default)]
    pub missing_values: HashMap<String, u64>,
    #[serde(default)]
    pub numeric_stats: Map<String, Value>,
    #[serde(default)]
    pub charts: HashMap<String, ChartSpec>,
    #[serde(default)]
    pub sample_data: Vec<Map<String, Value>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
