use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const POSITIVE_TERMS: &[&str] = &[
    "연락", "관심", "미소", "칭찬", "만남", "데이트", "행복", "기대",
    "사랑", "로맨스", "애정", "따뜻", "배려", "섬세", "감동", "설렘",
    "존중", "격려", "유머", "신뢰", "친밀", "공감", "감사", "낭만",
    "친절", "열정", "감탄", "기쁨", "환상", "희망", "긍정", "존중감",
    "깊은", "진심", "솔직", "조화", "열의", "관심도", "웃음", "애틋",
    "헌신", "열렬", "매력", "즐거움", "활력", "편안", "밥", "술", "아싸",
];

const AMBIGUOUS_TERMS: &[&str] = &[
    "친구", "그냥", "평범", "우정", "애매", "무관심", "지루", "냉정",
    "일상", "단순", "만남뿐", "관심부족", "무심", "의심", "불안",
    "혼란", "불확실", "한계", "피곤", "피상적", "표면적", "무의미", "안",
    "망함", "끊어", "여사친", "남사친", "모두", "만인", "쉬운", "아니", "원나잇",
    "인싸",
];

/// Which side of the lexicon a term belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermClass {
    Positive,
    Ambiguous,
    Neither,
}

/// Validation and loading failures for a lexicon definition.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("term '{0}' is listed as both positive and ambiguous")]
    OverlappingTerm(String),
    #[error("lexicon terms must not be blank")]
    EmptyTerm,
    #[error("failed to read lexicon file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lexicon definition is not valid JSON")]
    Parse(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct LexiconDefinition {
    positive: Vec<String>,
    ambiguous: Vec<String>,
}

/// Marker terms compared by substring containment against case-folded text.
///
/// Terms are stored lowercased and each term belongs to exactly one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    ambiguous: Vec<String>,
}

impl Lexicon {
    /// Built-in Korean lexicon of romance signals and friend-zone signals.
    pub fn standard() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().map(|term| term.to_string()).collect(),
            ambiguous: AMBIGUOUS_TERMS.iter().map(|term| term.to_string()).collect(),
        }
    }

    pub fn new<P, A>(positive: P, ambiguous: A) -> Result<Self, LexiconError>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        let positive = normalize_terms(positive)?;
        let ambiguous = normalize_terms(ambiguous)?;

        let positive_set: HashSet<&str> = positive.iter().map(String::as_str).collect();
        if let Some(shared) = ambiguous
            .iter()
            .find(|term| positive_set.contains(term.as_str()))
        {
            return Err(LexiconError::OverlappingTerm(shared.clone()));
        }

        Ok(Self {
            positive,
            ambiguous,
        })
    }

    /// Parse a `{ "positive": [...], "ambiguous": [...] }` document.
    pub fn from_json_str(raw: &str) -> Result<Self, LexiconError> {
        let definition: LexiconDefinition =
            serde_json::from_str(raw).map_err(LexiconError::Parse)?;
        Self::new(definition.positive, definition.ambiguous)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn classify_term(&self, term: &str) -> TermClass {
        let term = term.trim().to_lowercase();
        if self.positive.iter().any(|candidate| *candidate == term) {
            TermClass::Positive
        } else if self.ambiguous.iter().any(|candidate| *candidate == term) {
            TermClass::Ambiguous
        } else {
            TermClass::Neither
        }
    }

    pub fn positive_terms(&self) -> &[String] {
        &self.positive
    }

    pub fn ambiguous_terms(&self) -> &[String] {
        &self.ambiguous
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize_terms<I>(terms: I) -> Result<Vec<String>, LexiconError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for term in terms {
        let term = term.as_ref().trim().to_lowercase();
        if term.is_empty() {
            return Err(LexiconError::EmptyTerm);
        }
        // duplicates within one side collapse to a single entry
        if seen.insert(term.clone()) {
            normalized.push(term);
        }
    }
    Ok(normalized)
}
