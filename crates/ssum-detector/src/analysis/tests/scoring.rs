use super::common::*;
use crate::analysis::{
    parse_answer, scan_text, score_answers, score_text, AnalysisError, Lexicon, Question,
    Questionnaire, QuestionnaireError,
};

#[test]
fn empty_text_scores_zero() {
    assert_eq!(score_text(&lexicon(), ""), 0);
}

#[test]
fn each_term_counts_once_regardless_of_repetition() {
    let lexicon = lexicon();
    assert_eq!(score_text(&lexicon, "설렘"), 1);
    assert_eq!(score_text(&lexicon, "설렘 설렘 설렘 설렘"), 1);
}

#[test]
fn stories_score_by_distinct_markers() {
    let lexicon = lexicon();
    assert_eq!(score_text(&lexicon, MIXED_STORY), 3);
    assert_eq!(score_text(&lexicon, HIGH_STORY), 6);
    assert_eq!(score_text(&lexicon, LOW_STORY), -6);
}

#[test]
fn nested_terms_each_contribute() {
    let lexicon = lexicon();
    // "관심도" also contains "관심"
    assert_eq!(score_text(&lexicon, "관심도"), 2);
    // "무관심" contains positive "관심" and ambiguous "무관심"
    assert_eq!(score_text(&lexicon, "무관심"), 0);
    // "편안" contains ambiguous "안"
    assert_eq!(score_text(&lexicon, "편안"), 0);
}

#[test]
fn scan_lists_matched_markers() {
    let scan = scan_text(&lexicon(), "여사친이 많지만 연락은 자주 온다");

    assert_eq!(scan.positive_hits, vec!["연락".to_string()]);
    assert_eq!(scan.ambiguous_hits, vec!["여사친".to_string()]);
    assert_eq!(scan.score, 0);
}

#[test]
fn matching_is_case_insensitive() {
    let lexicon = Lexicon::new(["Smile", "dinner"], ["FRIEND"]).expect("valid lexicon");
    assert_eq!(score_text(&lexicon, "She gave me a SMILE at DINNER"), 2);
    assert_eq!(score_text(&lexicon, "Just a Friend"), -1);
}

#[test]
fn text_scores_stay_within_lexicon_bounds() {
    let lexicon = lexicon();
    let upper = lexicon.positive_terms().len() as i32;
    let lower = -(lexicon.ambiguous_terms().len() as i32);

    let everything_positive = lexicon.positive_terms().join(" ");
    let everything_ambiguous = lexicon.ambiguous_terms().join(" ");
    let everything = format!("{everything_positive} {everything_ambiguous}");

    for input in [
        everything_positive.as_str(),
        everything_ambiguous.as_str(),
        everything.as_str(),
        "평범한 하루",
    ] {
        let score = score_text(&lexicon, input);
        assert!((lower..=upper).contains(&score), "{score} out of bounds");
        assert_eq!(score, score_text(&lexicon, input));
    }

    assert_eq!(score_text(&lexicon, &everything), upper + lower);
}

#[test]
fn standard_questionnaire_has_twenty_weighted_questions() {
    let questionnaire = Questionnaire::standard();
    assert_eq!(questionnaire.len(), 20);
    assert!(questionnaire.questions().iter().all(|question| question.weight == 2));
    assert_eq!(questionnaire.max_score(), 40);
    assert!(questionnaire.questions()[0].prompt.starts_with("1. "));
}

#[test]
fn affirmative_answers_add_their_weight() {
    let questionnaire = Questionnaire::standard();
    assert_eq!(questionnaire.score(&answers_with_yes(20)), Ok(40));
    assert_eq!(questionnaire.score(&answers_with_yes(5)), Ok(10));
    assert_eq!(questionnaire.score(&answers_with_yes(0)), Ok(0));
}

#[test]
fn weights_follow_answer_positions() {
    let questions = vec![
        Question {
            prompt: "a".to_string(),
            weight: 1,
        },
        Question {
            prompt: "b".to_string(),
            weight: 5,
        },
        Question {
            prompt: "c".to_string(),
            weight: 10,
        },
    ];

    assert_eq!(score_answers(&[false, true, true], &questions), Ok(15));
    assert_eq!(score_answers(&[true, false, false], &questions), Ok(1));

    let questionnaire = Questionnaire::new(questions).expect("positive weights");
    assert_eq!(questionnaire.max_score(), 16);
    assert_eq!(questionnaire.score(&[true, true, false]), Ok(6));
}

#[test]
fn zero_weight_questions_are_rejected() {
    let err = Questionnaire::new(vec![
        Question {
            prompt: "counts".to_string(),
            weight: 2,
        },
        Question {
            prompt: "free points".to_string(),
            weight: 0,
        },
    ])
    .expect_err("zero weight");

    assert_eq!(
        err,
        QuestionnaireError::ZeroWeight {
            prompt: "free points".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "question 'free points' must carry a positive weight"
    );
}

#[test]
fn standard_questionnaire_passes_validation() {
    let standard = Questionnaire::standard();
    let rebuilt = Questionnaire::new(standard.questions().to_vec()).expect("standard weights");
    assert_eq!(rebuilt, standard);
}

#[test]
fn mismatched_answer_count_fails_fast() {
    let questionnaire = Questionnaire::standard();

    assert_eq!(
        questionnaire.score(&[true; 19]),
        Err(AnalysisError::InputCardinalityMismatch {
            expected: 20,
            actual: 19,
        })
    );
    assert_eq!(
        score_answers(&[true; 21], questionnaire.questions()),
        Err(AnalysisError::InputCardinalityMismatch {
            expected: 20,
            actual: 21,
        })
    );
}

#[test]
fn console_replies_parse_as_yes_or_no() {
    assert!(parse_answer("예"));
    assert!(parse_answer(" 예 "));
    assert!(parse_answer("Y"));
    assert!(parse_answer("yes"));
    assert!(!parse_answer("아니오"));
    assert!(!parse_answer("네"));
    assert!(!parse_answer(""));
}
