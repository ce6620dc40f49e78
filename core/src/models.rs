// Core data models for the TEN Navigator backend API

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// HTTP method for an API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Uppercase method token as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether a payload is serialized into the request body for this method
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown HTTP method token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported HTTP method: {0} (expected GET, POST, PUT, PATCH or DELETE)")]
pub struct ParseMethodError(pub String);

impl FromStr for HttpMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(ParseMethodError(s.to_string())),
        }
    }
}

/// Description of a single API call.
///
/// `endpoint` is appended verbatim to the configured base URL. `payload` is
/// only sent for methods where [`HttpMethod::carries_body`] holds; it is
/// ignored otherwise. `extra_headers` are merged over the default headers and
/// win on collision.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiRequest {
    pub endpoint: String,
    pub method: HttpMethod,
    pub payload: Option<serde_json::Value>,
    pub extra_headers: BTreeMap<String, String>,
}

impl ApiRequest {
    /// POST request to `endpoint` with no payload and no extra headers
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Attach a payload. JSON `null` is treated as no payload.
    pub fn payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = if payload.is_null() { None } else { Some(payload) };
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }

    /// Payload to serialize into the body, if any
    pub fn body_payload(&self) -> Option<&serde_json::Value> {
        if !self.method.carries_body() {
            return None;
        }
        self.payload.as_ref().filter(|p| !p.is_null())
    }
}

/// Path prefix shared by all tool routes
pub const API_V1_PREFIX: &str = "/api/v1";

/// Backend health check route
pub const HEALTH_PATH: &str = "/";

/// Analysis tools exposed by the backend, each a POST route under `/api/v1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    AnalyzeRisk,
    ScanReputation,
    MatchInvestors,
    PitchFeedback,
    CompetitorRadar,
    TractionEstimator,
    BuzzBuilder,
    LegalAssistance,
    /// Defined by the backend but not mounted in every deployment; an
    /// unmounted route answers `404 Not Found`
    TalentNavigator,
    /// Same caveat as [`Tool::TalentNavigator`]
    ExitStrategyExplorer,
}

impl Tool {
    pub const ALL: [Tool; 10] = [
        Tool::AnalyzeRisk,
        Tool::ScanReputation,
        Tool::MatchInvestors,
        Tool::PitchFeedback,
        Tool::CompetitorRadar,
        Tool::TractionEstimator,
        Tool::BuzzBuilder,
        Tool::LegalAssistance,
        Tool::TalentNavigator,
        Tool::ExitStrategyExplorer,
    ];

    /// Route name without the version prefix (e.g. `analyze-risk`)
    pub fn slug(&self) -> &'static str {
        match self {
            Tool::AnalyzeRisk => "analyze-risk",
            Tool::ScanReputation => "scan-reputation",
            Tool::MatchInvestors => "match-investors",
            Tool::PitchFeedback => "pitch-feedback",
            Tool::CompetitorRadar => "competitor-radar",
            Tool::TractionEstimator => "traction-estimator",
            Tool::BuzzBuilder => "buzz-builder",
            Tool::LegalAssistance => "legal-assistance",
            Tool::TalentNavigator => "talent-navigator",
            Tool::ExitStrategyExplorer => "exit-strategy-explorer",
        }
    }

    /// Full endpoint path (e.g. `/api/v1/analyze-risk`)
    pub fn path(&self) -> String {
        format!("{}/{}", API_V1_PREFIX, self.slug())
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Unknown tool name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct ParseToolError(pub String);

impl FromStr for Tool {
    type Err = ParseToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/');
        Tool::ALL
            .into_iter()
            .find(|tool| tool.slug().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseToolError(s.to_string()))
    }
}

// ==================== Risk assessment ====================

/// Request body: POST /api/v1/analyze-risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInput {
    pub startup_name: String,
    pub industry: String,
    pub market_size_usd: i64,
    pub founder_experience_years: u32,
    pub initial_funding_needed_usd: i64,
}

/// A single risk factor identified for a startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// "low", "medium" or "high"
    pub level: String,
    pub mitigation_suggestion: String,
}

/// Response body: POST /api/v1/analyze-risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskOutput {
    pub startup_name: String,
    /// 0-100, higher is riskier
    pub overall_risk_score: f64,
    pub risk_factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}

// ==================== Reputation analysis ====================

/// Request body: POST /api/v1/scan-reputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationInput {
    pub startup_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder_linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founder_twitter_handle: Option<String>,
    pub initial_pitch_text: String,
}

/// Response body: POST /api/v1/scan-reputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationOutput {
    pub startup_name: String,
    /// -1.0 to 1.0, higher is more positive
    pub overall_sentiment_score: f64,
    pub positive_themes: Vec<String>,
    pub negative_themes: Vec<String>,
    pub neutral_themes: Vec<String>,
    pub actionable_insights: Vec<String>,
}

// ==================== Investor matching & pitch feedback ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub id: String,
    pub name: String,
    pub risk_tolerance: String,
    pub preferred_industries: Vec<String>,
    pub min_investment_usd: i64,
    pub max_investment_usd: i64,
    pub feedback_focus: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub investor: InvestorProfile,
    pub match_score: f64,
    pub match_reasons: Vec<String>,
    pub gaps: Vec<String>,
}

/// Request body: POST /api/v1/match-investors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorMatchInput {
    pub startup_name: String,
    pub industry: String,
    pub funding_sought_usd: i64,
    pub risk_profile: RiskOutput,
    pub reputation_profile: ReputationOutput,
}

/// Response body: POST /api/v1/match-investors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorMatchOutput {
    pub startup_name: String,
    /// Ordered by match score
    pub matched_investors: Vec<MatchDetail>,
}

/// Request body: POST /api/v1/pitch-feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchFeedbackRequest {
    pub startup_name: String,
    pub pitch_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<RiskOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation_profile: Option<ReputationOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investor_match_results: Option<InvestorMatchOutput>,
}

/// Response body: POST /api/v1/pitch-feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchFeedbackResponse {
    pub startup_name: String,
    pub feedback: Vec<String>,
    pub suggestions_for_improvement: Vec<String>,
}

/// Response body: GET /
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
