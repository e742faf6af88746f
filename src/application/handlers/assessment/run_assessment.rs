//! RunAssessment - Command handler that encodes answers and evaluates them.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::assessment::{AnswerSheet, Assessment, InputEncoder, SubjectRecord};
use crate::domain::foundation::DomainError;

use super::decision_evaluator::DecisionEvaluator;

/// Command to assess one answer sheet.
#[derive(Debug, Clone)]
pub struct RunAssessmentCommand {
    pub answers: AnswerSheet,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct RunAssessmentResult {
    /// Correlates log lines for this evaluation; not stored anywhere.
    pub assessment_id: Uuid,
    pub record: SubjectRecord,
    pub assessment: Assessment,
}

/// Handler for running an assessment.
pub struct RunAssessmentHandler {
    evaluator: Arc<DecisionEvaluator>,
}

impl RunAssessmentHandler {
    pub fn new(evaluator: Arc<DecisionEvaluator>) -> Self {
        Self { evaluator }
    }

    pub fn handle(&self, cmd: RunAssessmentCommand) -> Result<RunAssessmentResult, DomainError> {
        let assessment_id = Uuid::new_v4();

        let record = InputEncoder::encode(&cmd.answers).map_err(|e| {
            tracing::debug!(%assessment_id, field = e.field(), "Rejected answers: {}", e);
            DomainError::from(e)
        })?;

        let assessment = self.evaluator.evaluate(&record).map_err(|e| {
            tracing::error!(%assessment_id, "Evaluation failed: {}", e);
            e
        })?;

        tracing::debug!(
            %assessment_id,
            probability = assessment.probability.value(),
            tendency = %assessment.tendency,
            "Assessment completed"
        );

        Ok(RunAssessmentResult {
            assessment_id,
            record,
            assessment,
        })
    }
}
