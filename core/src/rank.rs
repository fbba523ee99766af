use crate::index::TermFrequencyTable;
use crate::normalize::normalize;
use std::collections::BTreeSet;

/// Order matched titles best first.
///
/// A title's score sums the full-text occurrence counts of the title's own
/// tokens within that record. Ties break on ascending title so equal scores
/// always come back in the same order.
pub fn rank(titles: &BTreeSet<String>, frequencies: &TermFrequencyTable) -> Vec<String> {
    let mut ranked: Vec<(u32, &String)> = titles
        .iter()
        .map(|title| (title_score(title, frequencies), title))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    ranked.into_iter().map(|(_, title)| title.clone()).collect()
}

fn title_score(title: &str, frequencies: &TermFrequencyTable) -> u32 {
    normalize(title)
        .iter()
        .map(|token| frequencies.count(token, title))
        .sum()
}
