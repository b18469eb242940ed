use serde::{Deserialize, Serialize};

const STANDARD_WEIGHT: u16 = 2;

const STANDARD_PROMPTS: [&str; 20] = [
    "1. 상대방이 먼저 연락하는 경우가 많습니까?",
    "2. 대화 중 긍정적인 감정 표현(칭찬, 미소 등)이 자주 있습니까?",
    "3. 만남이나 데이트 제안이 자연스럽게 이어집니까?",
    "4. 상대방의 태도가 일관되고 뚜렷합니까?",
    "5. 대화 주제에 깊이가 있고 감정적인 이야기가 오갑니까?",
    "6. 상대방이 당신의 이야기에 진심으로 공감합니까?",
    "7. 서로의 개인적인 관심사와 취미에 대해 자주 이야기합니까?",
    "8. 상대방이 당신의 기분을 세심하게 살펴줍니까?",
    "9. 만남 후 긍정적인 피드백이나 감사의 메시지를 자주 받습니까?",
    "10. 약속을 지키고 시간 약속에 충실합니까?",
    "11. 상대방의 말투와 표정에서 진심을 느낄 수 있습니까?",
    "12. 상대방이 당신의 주변 사람들에게 긍정적인 인상을 주었습니까?",
    "13. 만남의 빈도와 지속성이 자연스러운 흐름을 보입니까?",
    "14. 서로의 미래에 대해 가볍게나마 이야기합니까?",
    "15. 상대방이 작은 선물이나 관심을 표현합니까?",
    "16. 만날 때마다 서로에 대해 더 알아가고 있습니까?",
    "17. 상대방이 어려운 상황에서 지원이나 도움을 주었습니까?",
    "18. 상대방이 당신을 특별하다고 느끼게 만듭니까?",
    "19. 상대방이 당신의 성격이나 취향을 잘 이해합니까?",
    "20. 상대방의 행동에서 일관된 관심과 애정이 보입니까?",
];

/// Failures raised while scoring an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("questionnaire expects {expected} answers but received {actual}")]
    InputCardinalityMismatch { expected: usize, actual: usize },
}

/// Validation failures for a question list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("question '{prompt}' must carry a positive weight")]
    ZeroWeight { prompt: String },
}

/// A yes/no prompt and the points it adds when answered affirmatively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub weight: u16,
}

/// Ordered question list; answer `i` always pairs with question `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: STANDARD_PROMPTS
                .iter()
                .map(|prompt| Question {
                    prompt: prompt.to_string(),
                    weight: STANDARD_WEIGHT,
                })
                .collect(),
        }
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        if let Some(question) = questions.iter().find(|question| question.weight == 0) {
            return Err(QuestionnaireError::ZeroWeight {
                prompt: question.prompt.clone(),
            });
        }
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn max_score(&self) -> i32 {
        self.questions
            .iter()
            .map(|question| i32::from(question.weight))
            .sum()
    }

    pub fn score(&self, answers: &[bool]) -> Result<i32, AnalysisError> {
        score_answers(answers, &self.questions)
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn score_answers(answers: &[bool], questions: &[Question]) -> Result<i32, AnalysisError> {
    if answers.len() != questions.len() {
        return Err(AnalysisError::InputCardinalityMismatch {
            expected: questions.len(),
            actual: answers.len(),
        });
    }

    Ok(answers
        .iter()
        .zip(questions)
        .filter(|(answer, _)| **answer)
        .map(|(_, question)| i32::from(question.weight))
        .sum())
}

/// Interpret a console reply; only `예`, `y` and `yes` count as affirmative.
pub fn parse_answer(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "예" | "y" | "yes")
}
