use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request to model failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("model returned no text")]
    EmptyResponse,
}

/// A text model that answers a user prompt under a fixed system instruction.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        prompt: &str,
    ) -> Result<String, GenerationError>;
}
