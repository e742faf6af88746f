//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::application::RunAssessmentResult;
use crate::domain::assessment::{SubjectRecord, Tendency, DECISION_THRESHOLD};
use crate::domain::foundation::DomainError;
use crate::ports::ModelMetadata;

// Requests reuse `AnswerSheet` directly: it is already the wire shape of the form.

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Result of one assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub assessment_id: String,
    /// Raw predisposition probability in [0, 1]
    pub probability: f64,
    /// Probability as a one-decimal percentage, e.g. "80.0%"
    pub percentage: String,
    pub tendency: Tendency,
    pub predisposed: bool,
    pub threshold: f64,
    pub headline: String,
    pub advice: String,
    /// The encoded row sent to the classifier
    pub record: SubjectRecord,
}

impl From<RunAssessmentResult> for AssessmentResponse {
    fn from(result: RunAssessmentResult) -> Self {
        let assessment = result.assessment;
        Self {
            assessment_id: result.assessment_id.to_string(),
            probability: assessment.probability.value(),
            percentage: assessment.probability.to_string(),
            tendency: assessment.tendency,
            predisposed: assessment.is_predisposed(),
            threshold: DECISION_THRESHOLD,
            headline: assessment.headline(),
            advice: assessment.tendency.advice().to_string(),
            record: result.record,
        }
    }
}

/// Informational model description.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfoResponse {
    pub model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub features: Vec<String>,
    pub metrics: BTreeMap<String, f64>,
    pub decision_threshold: f64,
}

impl From<&ModelMetadata> for ModelInfoResponse {
    fn from(metadata: &ModelMetadata) -> Self {
        Self {
            model_name: metadata.model_name.clone(),
            model_version: metadata.model_version.clone(),
            trained_at: metadata.trained_at,
            description: metadata.description.clone(),
            features: metadata.features.clone(),
            metrics: metadata.metrics.clone(),
            decision_threshold: DECISION_THRESHOLD,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Validation failure carrying the domain error code and its details.
    pub fn validation(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
