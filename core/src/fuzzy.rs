/// How a similarity score is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Whole-string similarity.
    Whole,
    /// Best-window similarity, so a bare surname still scores high against
    /// a full name.
    Partial,
}

/// Approximate matching over candidate index keys.
///
/// Implementations return at most `limit` candidates, best first, scored
/// 0-100 where 100 is an exact match. Ties must break on ascending
/// candidate so equal inputs always produce the same output.
pub trait FuzzyMatcher {
    fn top_matches(
        &self,
        query: &str,
        candidates: &[&str],
        mode: MatchMode,
        limit: usize,
    ) -> Vec<(String, u8)>;
}

/// Default matcher over normalized Levenshtein similarity. Inputs are
/// compared as given; the query engine hands it lower-cased strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinMatcher;

impl FuzzyMatcher for LevenshteinMatcher {
    fn top_matches(
        &self,
        query: &str,
        candidates: &[&str],
        mode: MatchMode,
        limit: usize,
    ) -> Vec<(String, u8)> {
        let mut scored: Vec<(String, u8)> = candidates
            .iter()
            .map(|candidate| {
                let score = match mode {
                    MatchMode::Whole => ratio(query, candidate),
                    MatchMode::Partial => partial_ratio(query, candidate),
                };
                (candidate.to_string(), score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(limit);
        scored
    }
}

/// Whole-string similarity on a 0-100 scale.
fn ratio(a: &str, b: &str) -> u8 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Best [`ratio`] over every window of the longer string sized to the
/// shorter one. Substring containment scores 100.
fn partial_ratio(a: &str, b: &str) -> u8 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return if long.is_empty() { 100 } else { 0 };
    }
    let long_chars: Vec<char> = long.chars().collect();
    if long_chars.len() == short_len {
        return ratio(short, long);
    }
    let mut best = 0u8;
    for window in long_chars.windows(short_len) {
        let piece: String = window.iter().collect();
        let score = ratio(short, &piece);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }
    best
}
