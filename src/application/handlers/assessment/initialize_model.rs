//! InitializeModel - one-time startup step that loads the model and builds
//! the evaluator handle shared by every request.

use std::sync::Arc;

use crate::ports::{ArtifactError, ModelMetadata, ModelSource};

use super::decision_evaluator::DecisionEvaluator;

/// Read-only handle produced once per process.
#[derive(Clone)]
pub struct ModelHandle {
    pub evaluator: Arc<DecisionEvaluator>,
    pub metadata: Arc<ModelMetadata>,
}

/// Loads the model from `source` and verifies that `positive_label` is one
/// of its classes.
///
/// # Errors
///
/// Any `ArtifactError` from loading, or `PositiveClassMissing` when the
/// classifier does not know `positive_label`.
pub async fn initialize_model(
    source: &dyn ModelSource,
    positive_label: &str,
) -> Result<ModelHandle, ArtifactError> {
    tracing::debug!("Loading model from {}", source.describe());

    let model = source.load().await?;
    let evaluator = DecisionEvaluator::new(model.classifier, positive_label)?;

    tracing::info!(
        positive_class = evaluator.positive_class().label(),
        positive_index = evaluator.positive_class().index(),
        "Model ready"
    );

    Ok(ModelHandle {
        evaluator: Arc::new(evaluator),
        metadata: Arc::new(model.metadata),
    })
}
