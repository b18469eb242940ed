//! Lexicon scoring, questionnaire scoring, and band classification.
//!
//! Both pipelines share one shape: score the input, pick a band from the
//! score, then render the band's narrative. Nothing here holds mutable state,
//! so a single [`AnalysisEngine`] can be shared across requests.

mod classifier;
mod lexicon;
pub mod narrative;
mod questionnaire;
pub mod router;
mod text;

#[cfg(test)]
mod tests;

pub use classifier::{classify, AnalysisMode, OutcomeBand};
pub use lexicon::{Lexicon, LexiconError, TermClass};
pub use questionnaire::{
    parse_answer, score_answers, AnalysisError, Question, Questionnaire, QuestionnaireError,
};
pub use router::analysis_router;
pub use text::{scan_text, score_text, TextScan};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Stateless analyzer binding the lexicon and questionnaire tables.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    lexicon: Lexicon,
    questionnaire: Questionnaire,
}

impl AnalysisEngine {
    pub fn new(lexicon: Lexicon, questionnaire: Questionnaire) -> Self {
        Self {
            lexicon,
            questionnaire,
        }
    }

    pub fn standard() -> Self {
        Self::new(Lexicon::standard(), Questionnaire::standard())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn analyze_free_text(&self, raw_input: &str) -> AnalysisOutcome {
        let scan = scan_text(&self.lexicon, raw_input);
        let band = classify(scan.score, AnalysisMode::Text);
        debug!(
            positive = ?scan.positive_hits,
            ambiguous = ?scan.ambiguous_hits,
            "lexicon markers matched"
        );
        info!(score = scan.score, band = band.label(), "free text analyzed");

        AnalysisOutcome {
            mode: AnalysisMode::Text,
            score: scan.score,
            band,
            narrative: narrative::render_text_narrative(raw_input, scan.score, band),
            positive_hits: scan.positive_hits,
            ambiguous_hits: scan.ambiguous_hits,
        }
    }

    pub fn analyze_questionnaire(&self, answers: &[bool]) -> Result<AnalysisOutcome, AnalysisError> {
        let score = self.questionnaire.score(answers)?;
        let band = classify(score, AnalysisMode::Questionnaire);
        info!(
            score,
            max_score = self.questionnaire.max_score(),
            band = band.label(),
            "questionnaire analyzed"
        );

        Ok(AnalysisOutcome {
            mode: AnalysisMode::Questionnaire,
            score,
            band,
            narrative: narrative::render_questionnaire_narrative(score, band),
            positive_hits: Vec::new(),
            ambiguous_hits: Vec::new(),
        })
    }
}

/// Score, band, and narrative produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub mode: AnalysisMode,
    pub score: i32,
    pub band: OutcomeBand,
    pub narrative: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positive_hits: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ambiguous_hits: Vec<String>,
}
