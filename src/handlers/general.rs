use actix_web::{HttpResponse, Result};
use serde_json::json;

use crate::{
    api_models::general::{HealthResponse, InfoResponse},
    constants::{API_VERSION, APP_NAME},
};

pub async fn root() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Welcome to {}", APP_NAME),
    })))
}

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "FastAPI backend is running smoothly".to_string(),
        version: API_VERSION.to_string(),
    }))
}

/// Same shape as `health_check`, distinct message so the two probes are
/// distinguishable from the caller side.
pub async fn api_health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        message: "API endpoint is working".to_string(),
        version: API_VERSION.to_string(),
    }))
}

/// Fixed descriptive payload. Never varies across requests; the framework and
/// runtime labels are fixed demo strings.
pub async fn get_info() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(InfoResponse {
        app_name: APP_NAME.to_string(),
        framework: "FastAPI".to_string(),
        python_version: "3.11+".to_string(),
        features: vec![
            "RESTful API".to_string(),
            "CORS enabled".to_string(),
            "Pydantic validation".to_string(),
            "OpenAPI documentation".to_string(),
            "Docker ready".to_string(),
        ],
        endpoints: vec![
            "GET /health".to_string(),
            "GET /api/health".to_string(),
            "POST /api/process".to_string(),
            "GET /api/info".to_string(),
        ],
    }))
}
