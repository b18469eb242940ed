use super::classifier::{AnalysisMode, OutcomeBand};

const TEXT_HIGH: &str = "귀하의 서술에서는 상대방에 대한 긍정적 감정과 로맨틱한 신호가 두드러집니다. \
자주 언급된 표현으로 분석을 진행한 결과, \
상대방이 호감을 적극적으로 표현하고 있음을 보여줍니다. 이러한 요소는 두 사람 사이의 관계 발전 가능성이 높음을 시사합니다.";

const TEXT_LOW: &str = "입력하신 내용에서는 부정적 또는 모호한 감정 신호가 우세합니다. \
자주 언급된 표현으로 분석을 진행한 결과, \
우정 또는 피상적인 관계에 머무를 가능성이 높음을 암시합니다.";

const TEXT_MIXED: &str = "귀하의 서술은 긍정적 신호와 부정적 신호가 혼재되어 있어 상황이 다소 모호하게 나타납니다. \
이 경우, 보다 구체적인 상황 파악과 추가적인 소통이 필요할 수 있으며, 단순한 결과보다는 다양한 측면에서 관계를 재검토할 필요가 있습니다.";

const QUESTIONNAIRE_HIGH: &str = "응답을 종합해보면, 상대방은 일관되고 적극적인 감정 표현 및 호감의 신호를 보이고 있습니다. \
자주 연락을 시도하고, 진심 어린 칭찬과 미소를 통해 긍정적인 상호작용을 이어가고 있는 것으로 보입니다. \
이러한 신호들은 두 사람의 관계가 로맨틱하게 발전할 가능성이 높음을 시사합니다.";

const QUESTIONNAIRE_LOW: &str = "예/아니오 응답 결과, 상대방은 감정 표현에 있어서 다소 소극적인 모습을 보입니다. \
연락 빈도, 대화 중 긍정적 신호, 약속 이행 등에서 나타난 점수를 종합해볼 때, 현재 관계는 \
단순한 우정이나 피상적인 관심에 머물 가능성이 높음을 암시합니다.";

const QUESTIONNAIRE_MIXED: &str = "응답 결과가 중간 범위로 나타났습니다. 일부 항목에서는 상대방의 관심과 호감 신호가 보이지만, \
다른 항목에서는 그 신호가 미약합니다. 이러한 모호한 결과는 관계 발전 여부가 상황에 따라 달라질 수 있음을 의미하며, \
추가적인 소통과 관찰이 필요할 수 있음을 보여줍니다.";

/// Fixed explanation bound to a band on a given scale.
pub fn band_text(mode: AnalysisMode, band: OutcomeBand) -> &'static str {
    match (mode, band) {
        (AnalysisMode::Text, OutcomeBand::High) => TEXT_HIGH,
        (AnalysisMode::Text, OutcomeBand::Low) => TEXT_LOW,
        (AnalysisMode::Text, OutcomeBand::Mixed) => TEXT_MIXED,
        (AnalysisMode::Questionnaire, OutcomeBand::High) => QUESTIONNAIRE_HIGH,
        (AnalysisMode::Questionnaire, OutcomeBand::Low) => QUESTIONNAIRE_LOW,
        (AnalysisMode::Questionnaire, OutcomeBand::Mixed) => QUESTIONNAIRE_MIXED,
    }
}

/// Echoes the raw input (not the case-folded copy) alongside the score.
pub fn render_text_narrative(raw_input: &str, score: i32, band: OutcomeBand) -> String {
    format!(
        "입력하신 내용:\n{raw_input}\n\n계산된 감정 분석 점수: {score}\n\n분석 결과:\n{}",
        band_text(AnalysisMode::Text, band)
    )
}

pub fn render_questionnaire_narrative(score: i32, band: OutcomeBand) -> String {
    format!(
        "예/아니오 응답을 종합한 총점: {score}\n\n분석 결과:\n{}",
        band_text(AnalysisMode::Questionnaire, band)
    )
}
