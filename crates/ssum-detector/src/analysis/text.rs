use super::lexicon::Lexicon;

/// Result of scanning free text against the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextScan {
    pub score: i32,
    pub positive_hits: Vec<String>,
    pub ambiguous_hits: Vec<String>,
}

/// Scan case-folded `input` for every lexicon term.
///
/// Each term contributes at most once no matter how often it occurs, so the
/// score is `positive terms found - ambiguous terms found`.
pub fn scan_text(lexicon: &Lexicon, input: &str) -> TextScan {
    let normalized = input.to_lowercase();

    let positive_hits: Vec<String> = lexicon
        .positive_terms()
        .iter()
        .filter(|term| normalized.contains(term.as_str()))
        .cloned()
        .collect();
    let ambiguous_hits: Vec<String> = lexicon
        .ambiguous_terms()
        .iter()
        .filter(|term| normalized.contains(term.as_str()))
        .cloned()
        .collect();

    let score = positive_hits.len() as i32 - ambiguous_hits.len() as i32;

    TextScan {
        score,
        positive_hits,
        ambiguous_hits,
    }
}

pub fn score_text(lexicon: &Lexicon, input: &str) -> i32 {
    scan_text(lexicon, input).score
}
