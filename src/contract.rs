use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadContractRequest {
    pub session_id: String,
    pub contract_file: String,
}

impl LoadContractRequest {
    pub fn new(session_id: impl Into<String>, contract_file: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            contract_file: contract_file.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractLoaded {
    pub message: String,
    pub contract_file: String,
}

impl ContractLoaded {
    pub fn new(contract_file: impl Into<String>) -> Self {
        Self {
            message: "Contract loaded successfully".to_string(),
            contract_file: contract_file.into(),
        }
    }
}
