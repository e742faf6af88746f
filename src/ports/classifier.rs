//! Classifier port - the pre-trained model's probability interface.

use crate::domain::assessment::SubjectRecord;
use crate::domain::foundation::DomainError;

use super::model_source::ArtifactError;

/// A fitted binary classifier.
///
/// Implementations are read-only after construction and shared across
/// requests, so they must be `Send + Sync`.
pub trait Classifier: Send + Sync {
    /// Class labels in the index order used by [`predict_proba`](Self::predict_proba).
    fn class_labels(&self) -> &[String];

    /// Per-class probabilities for one record, indexed like `class_labels`.
    fn predict_proba(&self, record: &SubjectRecord) -> Result<Vec<f64>, DomainError>;
}

/// The class whose probability drives the decision, resolved against a
/// classifier's label list rather than assumed to sit at a fixed index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositiveClass {
    label: String,
    index: usize,
}

impl PositiveClass {
    /// Finds `label` in `labels`.
    ///
    /// # Errors
    ///
    /// `ArtifactError::PositiveClassMissing` if the label is absent, or
    /// `ArtifactError::SchemaMismatch` if the classifier is not binary.
    pub fn resolve(labels: &[String], label: &str) -> Result<Self, ArtifactError> {
        if labels.len() != 2 {
            return Err(ArtifactError::SchemaMismatch(format!(
                "expected a binary classifier, found {} classes",
                labels.len()
            )));
        }
        let index = labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| ArtifactError::PositiveClassMissing {
                wanted: label.to_string(),
                available: labels.to_vec(),
            })?;
        Ok(Self {
            label: label.to_string(),
            index,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
