// Unit tests for models module

use std::str::FromStr;

use serde_json::json;
use ten_navigator_core::*;

// ==================== HttpMethod Tests ====================

#[test]
fn test_method_defaults_to_post() {
    assert_eq!(HttpMethod::default(), HttpMethod::Post);
    assert_eq!(ApiRequest::new("/x").method, HttpMethod::Post);
}

#[test]
fn test_method_carries_body() {
    assert!(HttpMethod::Post.carries_body());
    assert!(HttpMethod::Put.carries_body());
    assert!(HttpMethod::Patch.carries_body());
    assert!(!HttpMethod::Get.carries_body());
    assert!(!HttpMethod::Delete.carries_body());
}

#[test]
fn test_method_parse_is_case_insensitive() {
    assert_eq!(HttpMethod::from_str("patch").unwrap(), HttpMethod::Patch);
    assert_eq!(HttpMethod::from_str("Delete").unwrap(), HttpMethod::Delete);
    assert_eq!(
        HttpMethod::from_str("HEAD"),
        Err(ParseMethodError("HEAD".to_string()))
    );
}

#[test]
fn test_method_serializes_uppercase() {
    assert_eq!(serde_json::to_value(HttpMethod::Get).unwrap(), json!("GET"));
    assert_eq!(HttpMethod::Put.to_string(), "PUT");
}

// ==================== ApiRequest Tests ====================

#[test]
fn test_request_builder() {
    let request = ApiRequest::new("/api/v1/analyze-risk")
        .method(HttpMethod::Put)
        .payload(json!({"a": 1}))
        .header("X-Trace", "abc");

    assert_eq!(request.endpoint, "/api/v1/analyze-risk");
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.payload, Some(json!({"a": 1})));
    assert_eq!(request.extra_headers.get("X-Trace").map(String::as_str), Some("abc"));
}

#[test]
fn test_body_payload_only_for_mutating_methods() {
    let payload = json!({"startup_name": "Acme"});

    for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch] {
        let request = ApiRequest::new("/x").method(method).payload(payload.clone());
        assert_eq!(request.body_payload(), Some(&payload), "{method}");
    }
    for method in [HttpMethod::Get, HttpMethod::Delete] {
        let request = ApiRequest::new("/x").method(method).payload(payload.clone());
        assert_eq!(request.body_payload(), None, "{method}");
    }
}

#[test]
fn test_null_payload_is_absent() {
    let request = ApiRequest::new("/x").payload(serde_json::Value::Null);
    assert!(request.payload.is_none());
    assert!(request.body_payload().is_none());
}

// ==================== Tool Tests ====================

#[test]
fn test_tool_paths() {
    assert_eq!(Tool::AnalyzeRisk.path(), "/api/v1/analyze-risk");
    assert_eq!(Tool::ExitStrategyExplorer.path(), "/api/v1/exit-strategy-explorer");
    assert_eq!(Tool::ALL.len(), 10);
}

#[test]
fn test_tool_parse() {
    assert_eq!(Tool::from_str("scan-reputation").unwrap(), Tool::ScanReputation);
    assert_eq!(Tool::from_str("/Buzz-Builder").unwrap(), Tool::BuzzBuilder);
    assert!(Tool::from_str("time-machine").is_err());

    for tool in Tool::ALL {
        assert_eq!(Tool::from_str(&tool.to_string()).unwrap(), tool);
    }
}

// ==================== Schema Tests ====================

#[test]
fn test_reputation_input_omits_missing_optionals() {
    let input = ReputationInput {
        startup_name: "Acme".to_string(),
        founder_linkedin_url: None,
        founder_twitter_handle: Some("acme".to_string()),
        initial_pitch_text: "pitch".to_string(),
    };
    let value = serde_json::to_value(&input).unwrap();

    assert!(value.get("founder_linkedin_url").is_none());
    assert_eq!(value["founder_twitter_handle"], "acme");
}

#[test]
fn test_risk_output_deserializes_backend_shape() {
    let body = json!({
        "startup_name": "Acme",
        "overall_risk_score": 42.5,
        "risk_factors": [
            {"name": "Market Size", "level": "low", "mitigation_suggestion": "Keep going"}
        ],
        "recommendations": ["Hire a CTO"]
    });
    let output: RiskOutput = serde_json::from_value(body).unwrap();

    assert_eq!(output.overall_risk_score, 42.5);
    assert_eq!(output.risk_factors[0].level, "low");
    assert_eq!(output.recommendations, vec!["Hire a CTO".to_string()]);
}

#[test]
fn test_pitch_feedback_request_without_profiles() {
    let request: PitchFeedbackRequest = serde_json::from_value(json!({
        "startup_name": "Acme",
        "pitch_text": "We build things."
    }))
    .unwrap();

    assert!(request.risk_profile.is_none());
    assert!(request.investor_match_results.is_none());
}
