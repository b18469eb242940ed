use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::{AnalysisEngine, AnalysisOutcome};
use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysisRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireRequest {
    pub answers: Vec<bool>,
}

/// Router builder exposing the free-text and questionnaire endpoints.
pub fn analysis_router(engine: Arc<AnalysisEngine>) -> Router {
    Router::new()
        .route("/api/v1/analysis/text", post(text_handler))
        .route("/api/v1/analysis/questionnaire", post(questionnaire_handler))
        .route("/api/v1/analysis/questions", get(questions_handler))
        .with_state(engine)
}

pub(crate) async fn text_handler(
    State(engine): State<Arc<AnalysisEngine>>,
    axum::Json(request): axum::Json<TextAnalysisRequest>,
) -> Response {
    let outcome = engine.analyze_free_text(&request.text);
    (StatusCode::OK, axum::Json(outcome)).into_response()
}

pub(crate) async fn questionnaire_handler(
    State(engine): State<Arc<AnalysisEngine>>,
    axum::Json(request): axum::Json<QuestionnaireRequest>,
) -> Result<(StatusCode, axum::Json<AnalysisOutcome>), AppError> {
    let outcome = engine.analyze_questionnaire(&request.answers)?;
    Ok((StatusCode::OK, axum::Json(outcome)))
}

pub(crate) async fn questions_handler(State(engine): State<Arc<AnalysisEngine>>) -> Response {
    let questions = engine.questionnaire().questions().to_vec();
    (StatusCode::OK, axum::Json(questions)).into_response()
}
