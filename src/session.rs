use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_file: Option<String>,
}

impl CreateSessionRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            contract_file: None,
        }
    }

    pub fn with_contract(user_id: impl Into<String>, contract_file: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            contract_file: Some(contract_file.into()),
        }
    }
}

/// Session metadata as reported by `GET /sessions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: u32,
}

impl SessionInfo {
    pub fn new(user_id: impl Into<String>, contract_file: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            contract_file,
            created_at: now,
            updated_at: now,
            message_count: 0,
        }
    }

    /// Records one more exchanged message and bumps `updated_at`.
    pub fn touch(&mut self) {
        self.message_count += 1;
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
    pub message: String,
}

impl SessionCreated {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: "Session created successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDeleted {
    pub message: String,
}

impl Default for SessionDeleted {
    fn default() -> Self {
        Self {
            message: "Session deleted successfully".to_string(),
        }
    }
}
