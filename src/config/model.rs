//! Model artifact configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where to find the pre-trained model and which class counts as positive.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Tree ensemble artifact (JSON)
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Model metadata (JSON)
    #[serde(default = "default_metadata_path")]
    pub metadata_path: PathBuf,

    /// Class label whose probability is the predisposition probability
    #[serde(default = "default_positive_class")]
    pub positive_class: String,
}

impl ModelConfig {
    /// Validate model configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.artifact_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.artifact_path"));
        }
        if self.metadata_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("model.metadata_path"));
        }
        if self.positive_class.trim().is_empty() {
            return Err(ValidationError::MissingRequired("model.positive_class"));
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
            metadata_path: default_metadata_path(),
            positive_class: default_positive_class(),
        }
    }
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from("model/tendency_model.json")
}

fn default_metadata_path() -> PathBuf {
    PathBuf::from("model/model_metadata.json")
}

fn default_positive_class() -> String {
    "predisposed".to_string()
}
