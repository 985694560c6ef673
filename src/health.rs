use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Error,
}

/// Body of `GET /health`. The error branch reuses the same shape with
/// every availability flag cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: ServiceStatus,
    pub sessions_count: u64,
    pub vector_store_available: bool,
    pub llm_client_available: bool,
    pub embeddings_available: bool,
    pub ark_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn healthy(sessions_count: u64) -> Self {
        Self {
            status: ServiceStatus::Healthy,
            sessions_count,
            vector_store_available: false,
            llm_client_available: false,
            embeddings_available: false,
            ark_available: false,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::Error,
            error: Some(message.into()),
            ..Self::healthy(0)
        }
    }
}
