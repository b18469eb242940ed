//! Presentation seam between the analysis core and whatever collects input.
//!
//! A shell only has to read a story, ask yes/no questions, and show the final
//! narrative. The console binary and the tests each provide their own shell.

use tracing::debug;

use crate::analysis::{parse_answer, AnalysisEngine, AnalysisError, AnalysisMode, AnalysisOutcome};

pub const FREE_TEXT_PROMPT: &str =
    "자신의 상황을 자유롭게 서술해주세요 (자세하게 입력할수록 정확한 분석이 가능합니다):";
pub const QUESTIONNAIRE_INTRO: &str = "\n아래의 질문에 '예' 또는 '아니오'로 답해주세요.";
pub const ANALYSIS_COMPLETE: &str =
    "\n분석이 완료되었습니다. 아래에 표시되는 분석 결과를 확인하실 수 있습니다.\n";

/// Input/output collaborator driven by [`run_session`].
pub trait InteractionShell {
    fn read_free_text(&mut self, prompt: &str) -> Result<String, SessionError>;
    fn ask(&mut self, prompt: &str) -> Result<bool, SessionError>;
    fn display(&mut self, text: &str) -> Result<(), SessionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to talk to the user: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// `y` picks the free-text flow; any other reply falls through to the questionnaire.
pub fn mode_from_reply(raw: &str) -> AnalysisMode {
    if raw.trim().eq_ignore_ascii_case("y") {
        AnalysisMode::Text
    } else {
        AnalysisMode::Questionnaire
    }
}

/// Collect input through `shell`, analyze it, and hand the narrative back for display.
pub fn run_session<S>(
    shell: &mut S,
    engine: &AnalysisEngine,
    mode: AnalysisMode,
) -> Result<AnalysisOutcome, SessionError>
where
    S: InteractionShell + ?Sized,
{
    let outcome = match mode {
        AnalysisMode::Text => {
            let situation = shell.read_free_text(FREE_TEXT_PROMPT)?;
            engine.analyze_free_text(&situation)
        }
        AnalysisMode::Questionnaire => {
            shell.display(QUESTIONNAIRE_INTRO)?;
            let mut answers = Vec::with_capacity(engine.questionnaire().len());
            for question in engine.questionnaire().questions() {
                answers.push(shell.ask(&question.prompt)?);
            }
            debug!(answered = answers.len(), "questionnaire collected");
            engine.analyze_questionnaire(&answers)?
        }
    };

    shell.display(ANALYSIS_COMPLETE)?;
    shell.display(&outcome.narrative)?;
    Ok(outcome)
}

/// Shell fed from prepared replies, useful for batch runs and tests.
#[derive(Debug, Default)]
pub struct ScriptedShell {
    free_text: String,
    replies: std::collections::VecDeque<String>,
    displayed: Vec<String>,
}

impl ScriptedShell {
    pub fn with_free_text(text: impl Into<String>) -> Self {
        Self {
            free_text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_replies<I, T>(replies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn displayed(&self) -> &[String] {
        &self.displayed
    }
}

impl InteractionShell for ScriptedShell {
    fn read_free_text(&mut self, _prompt: &str) -> Result<String, SessionError> {
        Ok(std::mem::take(&mut self.free_text))
    }

    fn ask(&mut self, _prompt: &str) -> Result<bool, SessionError> {
        // running out of replies reads as "아니오"
        Ok(self
            .replies
            .pop_front()
            .map(|reply| parse_answer(&reply))
            .unwrap_or(false))
    }

    fn display(&mut self, text: &str) -> Result<(), SessionError> {
        self.displayed.push(text.to_string());
        Ok(())
    }
}
