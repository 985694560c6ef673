use chrono::Utc;
use contract_audit_api::review::{
    ComprehensiveContractReview, GeneralReview, GeneralReviewItem, ReviewStatus, RiskLevel,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(RiskLevel::High, "high")]
#[case(RiskLevel::Medium, "medium")]
#[case(RiskLevel::Low, "low")]
#[case(RiskLevel::None, "none")]
fn test_risk_level_wire_spelling(#[case] level: RiskLevel, #[case] wire: &str) {
    assert_eq!(serde_json::to_value(level).unwrap(), json!(wire));
    let decoded: RiskLevel = serde_json::from_value(json!(wire)).unwrap();
    assert_eq!(decoded, level);
}

#[rstest]
#[case(ReviewStatus::Pass, "pass")]
#[case(ReviewStatus::Fail, "fail")]
#[case(ReviewStatus::NeedReview, "need_review")]
fn test_review_status_wire_spelling(#[case] status: ReviewStatus, #[case] wire: &str) {
    assert_eq!(serde_json::to_value(status).unwrap(), json!(wire));
    let decoded: ReviewStatus = serde_json::from_value(json!(wire)).unwrap();
    assert_eq!(decoded, status);
}

#[test]
fn test_risk_level_defaults_to_none() {
    assert_eq!(RiskLevel::default(), RiskLevel::None);
}

#[test]
fn test_comprehensive_review_with_single_pass() {
    let body = json!({
        "contract_name": "Equipment purchase agreement",
        "review_timestamp": "2024-06-01T08:30:00Z",
        "overall_risk_level": "medium",
        "general_review": {
            "overall_risk_level": "medium",
            "review_items": [{
                "review_category": "term",
                "item_name": "Governing law",
                "item_content": "Disputes resolved under the law of the seller's domicile",
                "risk_level": "medium",
                "issues": ["One-sided forum selection"],
                "suggestions": ["Negotiate a neutral forum"]
            }],
            "summary": "One medium-risk finding",
            "recommendations": ["Revise clause 12"]
        },
        "total_issues": 1,
        "high_risk_items": 0,
        "medium_risk_items": 1,
        "low_risk_items": 0,
        "overall_summary": "Acceptable with changes",
        "critical_recommendations": [],
        "action_items": ["Send revised draft to counterparty"]
    });

    let review: ComprehensiveContractReview = serde_json::from_value(body).unwrap();
    assert_eq!(review.overall_risk_level, RiskLevel::Medium);
    assert_eq!(review.subject_review, None);
    assert_eq!(review.payment_review, None);
    assert_eq!(review.breach_review, None);

    let general = review.general_review.as_ref().unwrap();
    assert_eq!(general.review_items.len(), 1);
    assert_eq!(general.review_items[0].risk_level, RiskLevel::Medium);
    assert_eq!(review.total_issues, 1);
}

#[test]
fn test_review_timestamp_defaults_when_absent() {
    let before = Utc::now();
    let body = json!({
        "contract_name": "NDA",
        "overall_risk_level": "low",
        "total_issues": 0,
        "high_risk_items": 0,
        "medium_risk_items": 0,
        "low_risk_items": 0,
        "overall_summary": "No findings",
        "critical_recommendations": [],
        "action_items": []
    });

    let review: ComprehensiveContractReview = serde_json::from_value(body).unwrap();
    assert_eq!(review.contract_name, "NDA");
    assert!(review.review_timestamp >= before);
    assert!(review.review_timestamp <= Utc::now());
}

#[test]
fn test_general_review_round_trips() {
    let review = GeneralReview {
        overall_risk_level: RiskLevel::High,
        review_items: vec![GeneralReviewItem {
            review_category: "payment".to_string(),
            item_name: "Advance payment".to_string(),
            item_content: "100% payment before delivery".to_string(),
            risk_level: RiskLevel::High,
            issues: vec!["Full prepayment with no security".to_string()],
            suggestions: vec!["Stage payments against milestones".to_string()],
        }],
        summary: "High-risk payment structure".to_string(),
        recommendations: vec!["Add a bank guarantee".to_string()],
    };

    let encoded = serde_json::to_string(&review).unwrap();
    let decoded: GeneralReview = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, review);
}
