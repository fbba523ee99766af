use crate::error::QueryError;
use crate::fuzzy::{FuzzyMatcher, LevenshteinMatcher, MatchMode};
use crate::index::{Field, Index};
use crate::rank::rank;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Candidates kept per person-name lookup.
const NAME_MATCH_LIMIT: usize = 10;
/// Partial-match score a person name must exceed.
const NAME_SCORE_CUTOFF: u8 = 75;
/// Candidates kept per term lookup.
const TEXT_MATCH_LIMIT: usize = 5;
/// Whole-match score a term must exceed.
const TEXT_SCORE_CUTOFF: u8 = 80;

/// Runs `field:term` queries against a built [`Index`].
///
/// The matcher is injectable so callers can swap the scoring algorithm;
/// [`QueryEngine::new`] wires in the Levenshtein default.
pub struct QueryEngine<'a> {
    index: &'a Index,
    matcher: Box<dyn FuzzyMatcher>,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a Index) -> Self {
        Self::with_matcher(index, Box::new(LevenshteinMatcher))
    }

    pub fn with_matcher(index: &'a Index, matcher: Box<dyn FuzzyMatcher>) -> Self {
        QueryEngine { index, matcher }
    }

    /// Execute one query and return matching titles, best first.
    ///
    /// The whole query is lower-cased, and only the first colon separates
    /// field from term, so terms may themselves contain colons. No colon
    /// means a full-text search. Year and rating terms containing `-` are
    /// treated as inclusive ranges; person fields go through partial-name
    /// matching; everything else through whole-string matching. A query
    /// either fully succeeds (possibly with no results) or fails with a
    /// typed error.
    pub fn execute(&self, query: &str) -> Result<Vec<String>, QueryError> {
        let lowered = query.to_lowercase();
        let (field, term) = match lowered.split_once(':') {
            Some((selector, term)) => (Field::from_str(selector)?, term.trim()),
            None => (Field::All, lowered.trim()),
        };

        let matches = match field {
            Field::Year if term.contains('-') => self.year_range(term)?,
            Field::Rating if term.contains('-') => self.rating_range(term)?,
            Field::Actor | Field::Director => self.fuzzy_lookup(
                field,
                term,
                MatchMode::Partial,
                NAME_MATCH_LIMIT,
                NAME_SCORE_CUTOFF,
            ),
            _ => self.fuzzy_lookup(
                field,
                term,
                MatchMode::Whole,
                TEXT_MATCH_LIMIT,
                TEXT_SCORE_CUTOFF,
            ),
        };

        Ok(rank(&matches, self.index.frequencies()))
    }

    fn year_range(&self, term: &str) -> Result<BTreeSet<String>, QueryError> {
        let (start, end) = parse_bounds::<i32>(term)?;
        let postings = self.index.postings(Field::Year);
        let mut matches = BTreeSet::new();
        for year in start..=end {
            if let Some(titles) = postings.get(&year.to_string()) {
                matches.extend(titles.iter().cloned());
            }
        }
        Ok(matches)
    }

    fn rating_range(&self, term: &str) -> Result<BTreeSet<String>, QueryError> {
        let (start, end) = parse_bounds::<f64>(term)?;
        let postings = self.index.postings(Field::Rating);
        let mut matches = BTreeSet::new();
        for (key, titles) in postings.entries() {
            // Keys that don't parse as numbers never qualify for a range.
            if let Ok(value) = key.parse::<f64>() {
                if value >= start && value <= end {
                    matches.extend(titles.iter().cloned());
                }
            }
        }
        Ok(matches)
    }

    fn fuzzy_lookup(
        &self,
        field: Field,
        term: &str,
        mode: MatchMode,
        limit: usize,
        cutoff: u8,
    ) -> BTreeSet<String> {
        let postings = self.index.postings(field);
        let candidates: Vec<&str> = postings.terms().collect();
        let mut matches = BTreeSet::new();
        for (key, score) in self.matcher.top_matches(term, &candidates, mode, limit) {
            if score <= cutoff {
                continue;
            }
            if let Some(titles) = postings.get(&key) {
                matches.extend(titles.iter().cloned());
            }
        }
        matches
    }
}

fn parse_bounds<T>(term: &str) -> Result<(T, T), QueryError>
where
    T: FromStr + PartialOrd,
{
    let invalid = || QueryError::InvalidRange(term.to_string());
    let (start, end) = term.split_once('-').ok_or_else(invalid)?;
    let start = start.trim().parse::<T>().map_err(|_| invalid())?;
    let end = end.trim().parse::<T>().map_err(|_| invalid())?;
    if start > end {
        return Err(invalid());
    }
    Ok((start, end))
}
