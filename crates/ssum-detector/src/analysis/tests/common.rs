use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::analysis::{analysis_router, AnalysisEngine, Lexicon};

pub(super) const MIXED_STORY: &str = "오늘 연락이 와서 미소가 나오고 행복했다";
pub(super) const HIGH_STORY: &str = "데이트에서 칭찬과 배려, 설렘, 감동, 웃음이 가득했다";
pub(super) const LOW_STORY: &str = "그냥 친구 사이, 우정일 뿐이고 애매하고 지루하고 피곤하다";

pub(super) fn engine() -> AnalysisEngine {
    AnalysisEngine::standard()
}

pub(super) fn lexicon() -> Lexicon {
    Lexicon::standard()
}

pub(super) fn answers_with_yes(count: usize) -> Vec<bool> {
    (0..20).map(|index| index < count).collect()
}

pub(super) fn router() -> axum::Router {
    analysis_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
