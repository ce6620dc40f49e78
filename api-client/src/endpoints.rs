// Typed wrappers for the backend tool routes

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use ten_navigator_core::{
    ApiRequest, HealthResponse, HttpMethod, InvestorMatchInput, InvestorMatchOutput,
    PitchFeedbackRequest, PitchFeedbackResponse, ReputationInput, ReputationOutput, RiskInput,
    RiskOutput, Tool, Validate, HEALTH_PATH,
};

use crate::errors::ApiError;
use crate::http_client::ApiClient;

impl ApiClient {
    /// POST /api/v1/analyze-risk
    pub async fn analyze_risk(&self, input: &RiskInput) -> Result<RiskOutput, ApiError> {
        self.post_tool(Tool::AnalyzeRisk, input).await
    }

    /// POST /api/v1/scan-reputation
    pub async fn scan_reputation(
        &self,
        input: &ReputationInput,
    ) -> Result<ReputationOutput, ApiError> {
        self.post_tool(Tool::ScanReputation, input).await
    }

    /// POST /api/v1/match-investors
    pub async fn match_investors(
        &self,
        input: &InvestorMatchInput,
    ) -> Result<InvestorMatchOutput, ApiError> {
        self.post_tool(Tool::MatchInvestors, input).await
    }

    /// POST /api/v1/pitch-feedback
    pub async fn pitch_feedback(
        &self,
        request: &PitchFeedbackRequest,
    ) -> Result<PitchFeedbackResponse, ApiError> {
        self.post_tool(Tool::PitchFeedback, request).await
    }

    /// POST an untyped payload to any tool route
    pub async fn run_tool(&self, tool: Tool, payload: Value) -> Result<Value, ApiError> {
        self.call(&ApiRequest::new(tool.path()).payload(payload)).await
    }

    /// GET / - backend health check
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let body = self
            .call(&ApiRequest::new(HEALTH_PATH).method(HttpMethod::Get))
            .await?;
        serde_json::from_value(body).map_err(ApiError::Decode)
    }

    async fn post_tool<I, O>(&self, tool: Tool, input: &I) -> Result<O, ApiError>
    where
        I: Serialize + Validate,
        O: DeserializeOwned,
    {
        input.validate()?;
        let payload = serde_json::to_value(input).map_err(ApiError::Serialize)?;
        let body = self.run_tool(tool, payload).await?;
        serde_json::from_value(body).map_err(ApiError::Decode)
    }
}
