use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// Exactly one of `code` or `error` is ever present.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Code { code: String },
    Error { error: String },
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
