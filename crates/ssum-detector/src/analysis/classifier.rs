use serde::{Deserialize, Serialize};

const TEXT_HIGH_ABOVE: i32 = 5;
const TEXT_LOW_BELOW: i32 = -5;
const QUESTIONNAIRE_HIGH_FROM: i32 = 20;
const QUESTIONNAIRE_LOW_UP_TO: i32 = 10;

/// Input pipeline a score came from; each has its own threshold scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Text,
    Questionnaire,
}

impl AnalysisMode {
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Text => "free text",
            AnalysisMode::Questionnaire => "questionnaire",
        }
    }
}

/// Qualitative outcome selected from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeBand {
    High,
    Mixed,
    Low,
}

impl OutcomeBand {
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeBand::High => "High",
            OutcomeBand::Mixed => "Mixed",
            OutcomeBand::Low => "Low",
        }
    }
}

/// Map a score onto exactly one band.
///
/// Text: `> 5` high, `< -5` low. Questionnaire: `>= 20` high, `<= 10` low.
/// Everything in between is mixed.
pub fn classify(score: i32, mode: AnalysisMode) -> OutcomeBand {
    match mode {
        AnalysisMode::Text => {
            if score > TEXT_HIGH_ABOVE {
                OutcomeBand::High
            } else if score < TEXT_LOW_BELOW {
                OutcomeBand::Low
            } else {
                OutcomeBand::Mixed
            }
        }
        AnalysisMode::Questionnaire => {
            if score >= QUESTIONNAIRE_HIGH_FROM {
                OutcomeBand::High
            } else if score <= QUESTIONNAIRE_LOW_UP_TO {
                OutcomeBand::Low
            } else {
                OutcomeBand::Mixed
            }
        }
    }
}
