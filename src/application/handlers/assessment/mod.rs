//! Assessment application handlers.
//!
//! Startup initialization of the model handle and the per-request
//! assessment command.

mod decision_evaluator;
mod initialize_model;
mod run_assessment;

pub use decision_evaluator::DecisionEvaluator;
pub use initialize_model::{initialize_model, ModelHandle};
pub use run_assessment::{RunAssessmentCommand, RunAssessmentHandler, RunAssessmentResult};
