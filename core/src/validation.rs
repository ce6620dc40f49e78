// Client-side validation for tool request bodies

use crate::models::{InvestorMatchInput, PitchFeedbackRequest, ReputationInput, RiskInput};

/// Minimum length of `ReputationInput::initial_pitch_text` (characters)
pub const MIN_REPUTATION_PITCH_CHARS: usize = 50;

/// Minimum length of `PitchFeedbackRequest::pitch_text` (characters)
pub const MIN_FEEDBACK_PITCH_CHARS: usize = 100;

/// Validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{field} is too short: {actual} characters (minimum: {min})")]
    TooShort {
        field: &'static str,
        actual: usize,
        min: usize,
    },
}

/// Request bodies that can be checked before they are sent
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require_positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(())
}

fn require_min_chars(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    // Counted in characters, not bytes
    let actual = value.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { field, actual, min });
    }
    Ok(())
}

impl Validate for RiskInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_positive("market_size_usd", self.market_size_usd)?;
        require_positive("initial_funding_needed_usd", self.initial_funding_needed_usd)
    }
}

impl Validate for ReputationInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_chars(
            "initial_pitch_text",
            &self.initial_pitch_text,
            MIN_REPUTATION_PITCH_CHARS,
        )
    }
}

impl Validate for InvestorMatchInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_positive("funding_sought_usd", self.funding_sought_usd)
    }
}

impl Validate for PitchFeedbackRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_chars("pitch_text", &self.pitch_text, MIN_FEEDBACK_PITCH_CHARS)
    }
}
