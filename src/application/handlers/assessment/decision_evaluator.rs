//! DecisionEvaluator - scores one subject record with the loaded classifier.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, SubjectRecord};
use crate::domain::foundation::{DomainError, Probability};
use crate::ports::{ArtifactError, Classifier, PositiveClass};

/// Applies the classifier and the fixed decision threshold.
///
/// Can only be built from an already loaded classifier, so an evaluator
/// always has a model to call. The positive class is resolved against that
/// classifier's own label list.
pub struct DecisionEvaluator {
    classifier: Arc<dyn Classifier>,
    positive_class: PositiveClass,
}

impl DecisionEvaluator {
    /// # Errors
    ///
    /// `PositiveClassMissing` if `positive_label` is not one of the
    /// classifier's classes, `SchemaMismatch` if it is not binary.
    pub fn new(
        classifier: Arc<dyn Classifier>,
        positive_label: &str,
    ) -> Result<Self, ArtifactError> {
        let positive_class = PositiveClass::resolve(classifier.class_labels(), positive_label)?;
        Ok(Self {
            classifier,
            positive_class,
        })
    }

    pub fn positive_class(&self) -> &PositiveClass {
        &self.positive_class
    }

    /// Returns the predisposition probability and its classification.
    ///
    /// # Errors
    ///
    /// `ErrorCode::ClassifierError` if the classifier fails or returns a
    /// probability vector that does not match its class list.
    pub fn evaluate(&self, record: &SubjectRecord) -> Result<Assessment, DomainError> {
        let proba = self.classifier.predict_proba(record)?;
        let expected = self.classifier.class_labels().len();
        if proba.len() != expected {
            return Err(DomainError::classifier(format!(
                "classifier returned {} probabilities for {} classes",
                proba.len(),
                expected
            )));
        }

        let index = self.positive_class.index();
        let raw = proba.get(index).copied().ok_or_else(|| {
            DomainError::classifier(format!("no probability for class index {}", index))
        })?;
        let probability = Probability::try_new(raw).map_err(|e| {
            DomainError::classifier(format!("invalid probability from classifier: {}", e))
        })?;

        Ok(Assessment::from_probability(probability))
    }
}

#[cfg(test)]
pub(crate) mod stubs {
    use super::*;

    /// Returns fixed probabilities regardless of input.
    pub struct FixedClassifier {
        pub labels: Vec<String>,
        pub proba: Vec<f64>,
    }

    impl FixedClassifier {
        /// Conventional `[negative, positive]` ordering.
        pub fn positive(p: f64) -> Self {
            Self {
                labels: vec!["not_predisposed".to_string(), "predisposed".to_string()],
                proba: vec![1.0 - p, p],
            }
        }
    }

    impl Classifier for FixedClassifier {
        fn class_labels(&self) -> &[String] {
            &self.labels
        }

        fn predict_proba(&self, _record: &SubjectRecord) -> Result<Vec<f64>, DomainError> {
            Ok(self.proba.clone())
        }
    }

    pub fn evaluator_with(p: f64) -> DecisionEvaluator {
        DecisionEvaluator::new(Arc::new(FixedClassifier::positive(p)), "predisposed").unwrap()
    }
}
