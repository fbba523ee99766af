use crate::catalog::Movie;
use crate::error::QueryError;
use crate::normalize::{drop_stopwords, normalize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::str::FromStr;

/// The eight searchable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Year,
    Rating,
    Genre,
    Certificate,
    Actor,
    Director,
    All,
}

impl FromStr for Field {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Field::Title),
            "year" => Ok(Field::Year),
            "rating" => Ok(Field::Rating),
            "genre" => Ok(Field::Genre),
            "certificate" => Ok(Field::Certificate),
            "actor" => Ok(Field::Actor),
            "director" => Ok(Field::Director),
            "all" => Ok(Field::All),
            other => Err(QueryError::InvalidField(other.to_string())),
        }
    }
}

/// Postings for one field: normalized term -> titles carrying it.
///
/// Keys are always trimmed and lower-case. Insertion happens only while an
/// [`Index`] is being built; reads never create entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermPostings {
    map: HashMap<String, BTreeSet<String>>,
}

impl TermPostings {
    fn add(&mut self, term: &str, title: &str) {
        self.map
            .entry(term.to_string())
            .or_default()
            .insert(title.to_string());
    }

    /// Titles posted under `term`, if any.
    pub fn get(&self, term: &str) -> Option<&BTreeSet<String>> {
        self.map.get(term)
    }

    /// Every indexed term key.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.map.iter().map(|(term, titles)| (term.as_str(), titles))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Raw occurrence counts for full-text terms: term -> title -> count.
/// Absent pairs read as zero rather than being created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequencyTable {
    map: HashMap<String, HashMap<String, u32>>,
}

impl TermFrequencyTable {
    fn bump(&mut self, term: &str, title: &str) {
        *self
            .map
            .entry(term.to_string())
            .or_default()
            .entry(title.to_string())
            .or_insert(0) += 1;
    }

    pub fn count(&self, term: &str, title: &str) -> u32 {
        self.map
            .get(term)
            .and_then(|by_title| by_title.get(title))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldPostings {
    title: TermPostings,
    year: TermPostings,
    rating: TermPostings,
    genre: TermPostings,
    certificate: TermPostings,
    actor: TermPostings,
    director: TermPostings,
    all: TermPostings,
}

impl FieldPostings {
    fn get(&self, field: Field) -> &TermPostings {
        match field {
            Field::Title => &self.title,
            Field::Year => &self.year,
            Field::Rating => &self.rating,
            Field::Genre => &self.genre,
            Field::Certificate => &self.certificate,
            Field::Actor => &self.actor,
            Field::Director => &self.director,
            Field::All => &self.all,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut TermPostings {
        match field {
            Field::Title => &mut self.title,
            Field::Year => &mut self.year,
            Field::Rating => &mut self.rating,
            Field::Genre => &mut self.genre,
            Field::Certificate => &mut self.certificate,
            Field::Actor => &mut self.actor,
            Field::Director => &mut self.director,
            Field::All => &mut self.all,
        }
    }
}

/// Immutable search index over a fixed catalog.
///
/// Built in one pass by [`Index::build`] and never mutated afterwards, so a
/// built value can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Index {
    fields: FieldPostings,
    frequencies: TermFrequencyTable,
    person_names: BTreeSet<String>,
}

impl Index {
    /// Build the index from `movies`. `stopwords` applies to the full-text
    /// field only; exact fields keep every term.
    ///
    /// Per record: the trimmed, lower-cased whole value is indexed under
    /// `title`, `year`, `rating`, and `certificate`; the comma-separated
    /// fields are split, trimmed, and lower-cased into `genre`, `actor`, and
    /// `director`; every attribute joined is tokenized into `all`, with raw
    /// occurrence counts kept for ranking. Blank values index nothing.
    pub fn build(movies: &[Movie], stopwords: &HashSet<String>) -> Index {
        let mut fields = FieldPostings::default();
        let mut frequencies = TermFrequencyTable::default();
        let mut person_names = BTreeSet::new();

        for movie in movies {
            let title = movie.name.trim();
            // A record without a name has no identity to post results under.
            if title.is_empty() {
                continue;
            }

            add_exact(&mut fields, Field::Title, &movie.name, title);
            add_exact(&mut fields, Field::Year, &movie.year, title);
            add_exact(&mut fields, Field::Rating, &movie.rating, title);
            add_exact(&mut fields, Field::Certificate, &movie.certificate, title);

            for genre in movie.genres() {
                fields.get_mut(Field::Genre).add(&genre, title);
            }
            for name in movie.cast_names() {
                fields.get_mut(Field::Actor).add(&name, title);
                person_names.insert(name);
            }
            for name in movie.director_names() {
                fields.get_mut(Field::Director).add(&name, title);
                person_names.insert(name);
            }

            let tokens = drop_stopwords(normalize(&movie.combined_text()), stopwords);
            for token in &tokens {
                fields.get_mut(Field::All).add(token, title);
                frequencies.bump(token, title);
            }
        }

        Index {
            fields,
            frequencies,
            person_names,
        }
    }

    pub fn postings(&self, field: Field) -> &TermPostings {
        self.fields.get(field)
    }

    pub fn frequencies(&self) -> &TermFrequencyTable {
        &self.frequencies
    }

    /// All normalized actor and director names, for callers that want to
    /// suggest close names on their own.
    pub fn person_names(&self) -> &BTreeSet<String> {
        &self.person_names
    }
}

fn add_exact(fields: &mut FieldPostings, field: Field, raw: &str, title: &str) {
    let key = raw.trim().to_lowercase();
    if !key.is_empty() {
        fields.get_mut(field).add(&key, title);
    }
}
