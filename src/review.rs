//! Structured results of the four contract review passes: subject,
//! payment clauses, breach clauses, and general review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pass,
    Fail,
    NeedReview,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectReviewItem {
    pub subject_type: String,
    pub subject_name: String,
    pub qualification_check: String,
    pub legal_status: String,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSubjectReview {
    pub overall_risk_level: RiskLevel,
    pub subject_items: Vec<SubjectReviewItem>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentClauseItem {
    pub clause_name: String,
    pub clause_content: String,
    pub payment_method: String,
    pub payment_schedule: String,
    pub amount: String,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentClauseReview {
    pub overall_risk_level: RiskLevel,
    pub payment_clauses: Vec<PaymentClauseItem>,
    pub total_amount: String,
    pub payment_schedule_analysis: String,
    pub summary: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachClauseItem {
    pub clause_name: String,
    pub clause_content: String,
    pub breach_type: String,
    pub penalty_amount: String,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachClauseReview {
    pub overall_risk_level: RiskLevel,
    pub breach_clauses: Vec<BreachClauseItem>,
    pub total_penalty: String,
    pub breach_analysis: String,
    pub summary: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReviewItem {
    pub review_category: String,
    pub item_name: String,
    pub item_content: String,
    pub risk_level: RiskLevel,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralReview {
    pub overall_risk_level: RiskLevel,
    pub review_items: Vec<GeneralReviewItem>,
    pub summary: String,
    pub recommendations: Vec<String>,
}

/// Rollup across all review passes that ran for one contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveContractReview {
    pub contract_name: String,
    #[serde(default = "Utc::now")]
    pub review_timestamp: DateTime<Utc>,
    pub overall_risk_level: RiskLevel,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_review: Option<ContractSubjectReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_review: Option<PaymentClauseReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breach_review: Option<BreachClauseReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_review: Option<GeneralReview>,

    pub total_issues: u32,
    pub high_risk_items: u32,
    pub medium_risk_items: u32,
    pub low_risk_items: u32,

    pub overall_summary: String,
    pub critical_recommendations: Vec<String>,
    pub action_items: Vec<String>,
}
