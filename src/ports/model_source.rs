//! ModelSource port - one-time loading of the model artifact and metadata.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use super::classifier::Classifier;

/// Errors that prevent the model from being loaded.
///
/// All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact file not found: {0}")]
    NotFound(String),

    #[error("Failed to read artifact {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed artifact {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Artifact does not match the questionnaire schema: {0}")]
    SchemaMismatch(String),

    #[error("Positive class '{wanted}' not found among model classes {available:?}")]
    PositiveClassMissing {
        wanted: String,
        available: Vec<String>,
    },

    #[error("Checksum mismatch for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

/// Descriptive information shipped next to the model.
///
/// Used for display only; nothing here affects the decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    #[serde(default)]
    pub model_version: Option<String>,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    /// Hex SHA-256 of the model artifact file, verified at load when present.
    #[serde(default)]
    pub sha256: Option<String>,
}

/// A classifier together with its metadata.
#[derive(Clone)]
pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub metadata: ModelMetadata,
}

/// Source of the pre-trained model.
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Loads and verifies the model and its metadata.
    async fn load(&self) -> Result<LoadedModel, ArtifactError>;

    /// Human-readable description of where the artifacts live.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_deserializes_with_only_model_name() {
        let meta: ModelMetadata = serde_json::from_str(r#"{"model_name": "XGBoost"}"#).unwrap();
        assert_eq!(meta.model_name, "XGBoost");
        assert!(meta.metrics.is_empty());
        assert!(meta.sha256.is_none());
    }

    #[test]
    fn metadata_deserializes_full_document() {
        let json = r#"{
            "model_name": "XGBoost",
            "model_version": "1.2.0",
            "trained_at": "2025-11-03T12:00:00Z",
            "features": ["Gender", "Age"],
            "metrics": {"roc_auc": 0.91, "recall": 0.84}
        }"#;
        let meta: ModelMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.model_version.as_deref(), Some("1.2.0"));
        assert!(meta.trained_at.is_some());
        assert_eq!(meta.features.len(), 2);
        assert!((meta.metrics["roc_auc"] - 0.91).abs() < f64::EPSILON);
    }

    #[test]
    fn artifact_error_messages() {
        let err = ArtifactError::NotFound("model/tendency_model.json".to_string());
        assert_eq!(
            err.to_string(),
            "Artifact file not found: model/tendency_model.json"
        );
    }
}
