use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
}

impl ChatRequest {
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
        }
    }
}

/// Reply to a single chat turn. `context_used` carries the retrieved
/// contract excerpt that grounded the answer, when retrieval ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_used: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn new(session_id: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            response: response.into(),
            context_used: None,
            timestamp: Utc::now(),
            error: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context_used = Some(context.into());
        self
    }
}
