//! HTTP handlers for the questionnaire page and the assessment API.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::application::{ModelHandle, RunAssessmentCommand, RunAssessmentHandler};
use crate::domain::assessment::AnswerSheet;
use crate::domain::foundation::DomainError;
use crate::ports::ModelMetadata;

use super::dto::{AssessmentResponse, ErrorResponse, ModelInfoResponse};
use super::page::{render_page, PageView, ResultPanel};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentAppState {
    run_handler: Arc<RunAssessmentHandler>,
    metadata: Arc<ModelMetadata>,
}

impl AssessmentAppState {
    pub fn new(run_handler: Arc<RunAssessmentHandler>, metadata: Arc<ModelMetadata>) -> Self {
        Self {
            run_handler,
            metadata,
        }
    }

    /// Wires the state from the handle produced at startup.
    pub fn from_handle(handle: &ModelHandle) -> Self {
        Self::new(
            Arc::new(RunAssessmentHandler::new(handle.evaluator.clone())),
            handle.metadata.clone(),
        )
    }

    fn page(&self, answers: &AnswerSheet, panel: ResultPanel<'_>) -> Html<String> {
        Html(render_page(&PageView {
            answers,
            panel,
            model_name: &self.metadata.model_name,
        }))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTML handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Questionnaire with default answers and a pending result
pub async fn show_form(State(state): State<AssessmentAppState>) -> Response {
    let answers = AnswerSheet::default();
    state.page(&answers, ResultPanel::Pending).into_response()
}

/// POST /analyze - Submit the questionnaire and render the result
pub async fn analyze_form(
    State(state): State<AssessmentAppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::debug!("Rejected form submission: {}", rejection);
            let defaults = AnswerSheet::default();
            return (
                StatusCode::BAD_REQUEST,
                state.page(
                    &defaults,
                    ResultPanel::Invalid("não foi possível ler o formulário enviado.".to_string()),
                ),
            )
                .into_response();
        }
    };

    let (answers, unreadable) = read_answers(&fields);
    if !unreadable.is_empty() {
        tracing::debug!(?unreadable, "Form fields missing or unreadable");
        let message = format!("revise os campos {}.", unreadable.join(", "));
        return (
            StatusCode::BAD_REQUEST,
            state.page(&answers, ResultPanel::Invalid(message)),
        )
            .into_response();
    }

    let cmd = RunAssessmentCommand {
        answers: answers.clone(),
    };

    match state.run_handler.handle(cmd) {
        Ok(result) => state
            .page(&answers, ResultPanel::Ready(&result.assessment))
            .into_response(),
        Err(e) if e.is_validation() => {
            let field = e.details.get("field").map(String::as_str).unwrap_or("?");
            let message = format!("valor não aceito no campo {}.", field);
            (
                StatusCode::BAD_REQUEST,
                state.page(&answers, ResultPanel::Invalid(message)),
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            state.page(&answers, ResultPanel::Failed),
        )
            .into_response(),
    }
}

/// Collects form fields into an answer sheet.
///
/// Fields that are missing or do not parse keep their default value and are
/// reported by their Portuguese name; everything else keeps what was sent.
fn read_answers(fields: &HashMap<String, String>) -> (AnswerSheet, Vec<&'static str>) {
    let mut form = FormReader {
        fields,
        unreadable: Vec::new(),
    };
    let mut answers = AnswerSheet::default();

    form.text("gender", "gênero", &mut answers.gender);
    form.number("age", "idade", &mut answers.age);
    form.number("height", "altura", &mut answers.height);
    form.text("family_history", "histórico familiar", &mut answers.family_history);
    form.text("favc", "alimentos calóricos", &mut answers.favc);
    form.number("fcvc", "vegetais", &mut answers.fcvc);
    form.number("ncp", "refeições principais", &mut answers.ncp);
    form.text("caec", "lanches entre refeições", &mut answers.caec);
    form.text("smoke", "fumo", &mut answers.smoke);
    form.number("ch2o", "água", &mut answers.ch2o);
    form.text("scc", "contagem de calorias", &mut answers.scc);
    form.number("faf", "atividade física", &mut answers.faf);
    form.number("tue", "tempo de tela", &mut answers.tue);
    form.text("calc", "álcool", &mut answers.calc);
    form.text("mtrans", "transporte", &mut answers.mtrans);

    (answers, form.unreadable)
}

struct FormReader<'a> {
    fields: &'a HashMap<String, String>,
    unreadable: Vec<&'static str>,
}

impl FormReader<'_> {
    fn text(&mut self, name: &str, label: &'static str, slot: &mut String) {
        match self.fields.get(name) {
            Some(value) => *slot = value.clone(),
            None => self.unreadable.push(label),
        }
    }

    fn number<T: FromStr>(&mut self, name: &str, label: &'static str, slot: &mut T) {
        match self.fields.get(name).and_then(|v| v.trim().parse().ok()) {
            Some(value) => *slot = value,
            None => self.unreadable.push(label),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// JSON handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments - Assess a JSON answer sheet
pub async fn create_assessment(
    State(state): State<AssessmentAppState>,
    body: Result<Json<AnswerSheet>, JsonRejection>,
) -> Response {
    let answers = match body {
        Ok(Json(answers)) => answers,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    match state.run_handler.handle(RunAssessmentCommand { answers }) {
        Ok(result) => {
            let response: AssessmentResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/model - Describe the loaded model
pub async fn get_model(State(state): State<AssessmentAppState>) -> Response {
    let response = ModelInfoResponse::from(state.metadata.as_ref());
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: DomainError) -> Response {
    if error.is_validation() {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&error)),
        )
            .into_response()
    } else {
        // Classifier details stay in the logs.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal("Assessment could not be computed")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_error_maps_to_400() {
        let error: DomainError = ValidationError::unknown_label("CALC", "Diariamente").into();
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn out_of_range_maps_to_400() {
        let error: DomainError = ValidationError::out_of_range("Age", 14.0, 90.0, 7.0).into();
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn classifier_error_maps_to_500() {
        let error = DomainError::classifier("probability vector too short");
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn read_answers_keeps_every_submitted_value() {
        let fields = form(&[
            ("gender", "Masculino"),
            ("age", "41"),
            ("height", "1.82"),
            ("family_history", "Não"),
            ("favc", "Não"),
            ("fcvc", "3"),
            ("ncp", "4"),
            ("caec", "Sempre"),
            ("smoke", "Sim"),
            ("ch2o", "1"),
            ("scc", "Sim"),
            ("faf", "0"),
            ("tue", "2"),
            ("calc", "Frequentemente"),
            ("mtrans", "Moto"),
        ]);
        let (answers, unreadable) = read_answers(&fields);

        assert!(unreadable.is_empty());
        assert_eq!(answers.gender, "Masculino");
        assert_eq!(answers.age, 41);
        assert!((answers.height - 1.82).abs() < f64::EPSILON);
        assert_eq!(answers.mtrans, "Moto");
        assert_eq!(answers.tue, 2);
    }

    #[test]
    fn read_answers_defaults_only_unreadable_fields() {
        let fields = form(&[
            ("gender", "Masculino"),
            ("age", "quarenta"),
            ("height", "1,82"),
            ("mtrans", "Carro"),
        ]);
        let (answers, unreadable) = read_answers(&fields);
        let defaults = AnswerSheet::default();

        assert_eq!(answers.gender, "Masculino");
        assert_eq!(answers.mtrans, "Carro");
        assert_eq!(answers.age, defaults.age);
        assert_eq!(answers.height, defaults.height);
        assert_eq!(answers.fcvc, defaults.fcvc);
        assert!(unreadable.contains(&"idade"));
        assert!(unreadable.contains(&"altura"));
        assert!(unreadable.contains(&"vegetais"));
        assert!(!unreadable.contains(&"gênero"));
        assert!(!unreadable.contains(&"transporte"));
    }
}
