use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub app_name: String,
    pub framework: String,
    pub python_version: String,
    pub features: Vec<String>,
    pub endpoints: Vec<String>,
}

/// Envelope for request bodies rejected before a handler runs
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
