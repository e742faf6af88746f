//! Integration tests for the demo model shipped under `model/`.
//!
//! Loads the real artifact files through `FsModelSource`, the same way the
//! server does at startup.

use std::path::PathBuf;

use tendency_calculator::adapters::FsModelSource;
use tendency_calculator::application::{initialize_model, RunAssessmentCommand, RunAssessmentHandler};
use tendency_calculator::domain::assessment::{AnswerSheet, Tendency};
use tendency_calculator::ports::ArtifactError;

fn model_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("model")
}

fn demo_source() -> FsModelSource {
    let dir = model_dir();
    FsModelSource::new(
        dir.join("tendency_model.json"),
        dir.join("model_metadata.json"),
    )
}

fn scenario_one() -> AnswerSheet {
    AnswerSheet {
        gender: "Feminino".to_string(),
        age: 25,
        height: 1.70,
        family_history: "Não".to_string(),
        favc: "Não".to_string(),
        fcvc: 3,
        ncp: 3,
        caec: "Não".to_string(),
        smoke: "Não".to_string(),
        ch2o: 3,
        scc: "Não".to_string(),
        faf: 3,
        tue: 0,
        calc: "Não".to_string(),
        mtrans: "Caminhada".to_string(),
    }
}

#[tokio::test]
async fn demo_model_loads_with_metadata() {
    let handle = initialize_model(&demo_source(), "predisposed").await.unwrap();
    assert_eq!(handle.metadata.model_name, "XGBoost");
    assert_eq!(handle.metadata.features.len(), 15);
    assert_eq!(handle.evaluator.positive_class().label(), "predisposed");
}

#[tokio::test]
async fn demo_model_scores_default_answers_as_elevated() {
    let handle = initialize_model(&demo_source(), "predisposed").await.unwrap();
    let handler = RunAssessmentHandler::new(handle.evaluator.clone());

    let result = handler
        .handle(RunAssessmentCommand {
            answers: AnswerSheet::default(),
        })
        .unwrap();

    // margin 0.7 + 0.5 - 0.2 + 0.3 = 1.3
    let expected = 1.0 / (1.0 + (-1.3f64).exp());
    assert!((result.assessment.probability.value() - expected).abs() < 1e-9);
    assert_eq!(result.assessment.tendency, Tendency::Elevated);
    assert_eq!(result.assessment.probability.to_string(), "78.6%");
}

#[tokio::test]
async fn demo_model_scores_active_profile_as_low() {
    let handle = initialize_model(&demo_source(), "predisposed").await.unwrap();
    let handler = RunAssessmentHandler::new(handle.evaluator.clone());

    let result = handler
        .handle(RunAssessmentCommand {
            answers: scenario_one(),
        })
        .unwrap();

    // margin -0.9 - 0.6 - 0.2 + 0.3 = -1.4
    assert_eq!(result.assessment.tendency, Tendency::Low);
    assert_eq!(result.assessment.probability.to_string(), "19.8%");
}

#[tokio::test]
async fn unknown_positive_class_is_fatal() {
    let result = initialize_model(&demo_source(), "obese").await;
    assert!(matches!(
        result,
        Err(ArtifactError::PositiveClassMissing { .. })
    ));
}

#[tokio::test]
async fn missing_artifact_is_fatal() {
    let dir = model_dir();
    let source = FsModelSource::new(dir.join("absent.json"), dir.join("model_metadata.json"));
    let result = initialize_model(&source, "predisposed").await;
    assert!(matches!(result, Err(ArtifactError::NotFound(_))));
}
