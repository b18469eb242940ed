//! End-to-end scenarios through the public engine, session, and router facades.

use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use ssum_detector::analysis::{
    analysis_router, AnalysisEngine, AnalysisError, AnalysisMode, Lexicon, OutcomeBand,
    Questionnaire,
};
use ssum_detector::session::{run_session, InteractionShell, SessionError};
use tower::ServiceExt;

/// Shell that records every prompt so scenarios can assert on the conversation.
#[derive(Default)]
struct RecordingShell {
    story: String,
    replies: Vec<bool>,
    prompts: Vec<String>,
    shown: Vec<String>,
}

impl InteractionShell for RecordingShell {
    fn read_free_text(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.prompts.push(prompt.to_string());
        Ok(self.story.clone())
    }

    fn ask(&mut self, prompt: &str) -> Result<bool, SessionError> {
        let index = self.prompts.len();
        self.prompts.push(prompt.to_string());
        Ok(self.replies.get(index).copied().unwrap_or(false))
    }

    fn display(&mut self, text: &str) -> Result<(), SessionError> {
        self.shown.push(text.to_string());
        Ok(())
    }
}

#[test]
fn three_markers_produce_mixed_band() {
    let engine = AnalysisEngine::standard();
    let outcome = engine.analyze_free_text("연락 자주 하고 미소도 짓고 행복해 보였어");

    assert_eq!(outcome.score, 3);
    assert_eq!(outcome.band, OutcomeBand::Mixed);
    assert!(outcome.narrative.contains("혼재되어 있어"));
}

#[test]
fn six_markers_produce_high_band() {
    let engine = AnalysisEngine::standard();
    let outcome = engine.analyze_free_text("사랑 로맨스 애정 따뜻 배려 섬세");

    assert_eq!(outcome.score, 6);
    assert_eq!(outcome.band, OutcomeBand::High);
}

#[test]
fn all_affirmative_questionnaire_is_high() {
    let engine = AnalysisEngine::standard();
    let outcome = engine
        .analyze_questionnaire(&[true; 20])
        .expect("twenty answers");

    assert_eq!(outcome.score, 40);
    assert_eq!(outcome.band, OutcomeBand::High);
}

#[test]
fn five_affirmative_answers_are_low() {
    let engine = AnalysisEngine::standard();
    let mut answers = [false; 20];
    for index in [0, 3, 7, 12, 19] {
        answers[index] = true;
    }

    let outcome = engine.analyze_questionnaire(&answers).expect("twenty answers");

    assert_eq!(outcome.score, 10);
    assert_eq!(outcome.band, OutcomeBand::Low);
}

#[test]
fn mismatched_answers_are_reported() {
    let engine = AnalysisEngine::standard();
    let err = engine
        .analyze_questionnaire(&[true; 4])
        .expect_err("four answers");

    assert_eq!(
        err,
        AnalysisError::InputCardinalityMismatch {
            expected: 20,
            actual: 4,
        }
    );
}

#[test]
fn questionnaire_session_walks_prompts_in_order() {
    let engine = AnalysisEngine::standard();
    let mut shell = RecordingShell {
        replies: (0..20).map(|index| index % 2 == 0).collect(),
        ..RecordingShell::default()
    };

    let outcome =
        run_session(&mut shell, &engine, AnalysisMode::Questionnaire).expect("session completes");

    assert_eq!(outcome.score, 20);
    assert_eq!(outcome.band, OutcomeBand::High);
    let expected: Vec<String> = engine
        .questionnaire()
        .questions()
        .iter()
        .map(|question| question.prompt.clone())
        .collect();
    assert_eq!(shell.prompts, expected);
    assert_eq!(shell.shown.last(), Some(&outcome.narrative));
}

#[test]
fn custom_tables_drive_the_engine() {
    let lexicon = Lexicon::new(["hug", "dinner"], ["buddy"]).expect("valid lexicon");
    let engine = AnalysisEngine::new(lexicon, Questionnaire::standard());
    let mut shell = RecordingShell {
        story: "A HUG after dinner with my buddy".to_string(),
        ..RecordingShell::default()
    };

    let outcome = run_session(&mut shell, &engine, AnalysisMode::Text).expect("session completes");

    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.positive_hits, vec!["hug", "dinner"]);
    assert_eq!(outcome.ambiguous_hits, vec!["buddy"]);
}

#[tokio::test]
async fn http_questionnaire_mismatch_is_unprocessable() {
    let router = analysis_router(Arc::new(AnalysisEngine::standard()));

    let response = router
        .oneshot(
            Request::post("/api/v1/analysis/questionnaire")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    json!({ "answers": [true, true] }).to_string(),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&body).expect("json payload");
    assert_eq!(
        payload["error"],
        "analysis error: questionnaire expects 20 answers but received 2"
    );
    assert_eq!(payload["expected"], 20);
    assert_eq!(payload["actual"], 2);
}
