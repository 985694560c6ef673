use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEventKind {
    Start,
    ContextReady,
    Token,
    Complete,
    Error,
}

/// Payload shared by every stream event; only the fields relevant to the
/// event kind are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamEventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_info: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One server-sent event on `POST /chat/stream`. `timestamp` is unix
/// seconds with a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamEvent {
    pub event: StreamEventKind,
    pub timestamp: f64,
    pub data: StreamEventData,
}

impl StreamEvent {
    pub fn new(event: StreamEventKind, data: StreamEventData) -> Self {
        Self {
            event,
            timestamp: Utc::now().timestamp_millis() as f64 / 1000.0,
            data,
        }
    }

    pub fn start(session_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self::new(
            StreamEventKind::Start,
            StreamEventData {
                session_id: Some(session_id.into()),
                question: Some(question.into()),
                status: Some("processing".to_string()),
                ..Default::default()
            },
        )
    }

    pub fn token(content: impl Into<String>, token_index: u64) -> Self {
        Self::new(
            StreamEventKind::Token,
            StreamEventData {
                content: Some(content.into()),
                token_index: Some(token_index),
                is_final: Some(false),
                ..Default::default()
            },
        )
    }

    pub fn complete(total_tokens: u64) -> Self {
        Self::new(
            StreamEventKind::Complete,
            StreamEventData {
                is_final: Some(true),
                total_tokens: Some(total_tokens),
                ..Default::default()
            },
        )
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(
            StreamEventKind::Error,
            StreamEventData {
                error: Some(message.into()),
                ..Default::default()
            },
        )
    }
}
