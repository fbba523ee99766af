use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One catalog record. Every attribute is required; `genre`, `casts`, and
/// `directors` hold comma-separated lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub name: String,
    pub year: String,
    pub rating: String,
    pub genre: String,
    pub certificate: String,
    pub casts: String,
    pub directors: String,
}

impl Movie {
    /// Genre labels, trimmed and lower-cased, blanks dropped.
    pub fn genres(&self) -> Vec<String> {
        split_list(&self.genre)
    }

    /// Cast member names, trimmed and lower-cased.
    pub fn cast_names(&self) -> Vec<String> {
        split_list(&self.casts)
    }

    /// Director names, trimmed and lower-cased.
    pub fn director_names(&self) -> Vec<String> {
        split_list(&self.directors)
    }

    /// Every attribute joined into one string for full-text indexing.
    pub(crate) fn combined_text(&self) -> String {
        [
            self.name.as_str(),
            self.year.as_str(),
            self.rating.as_str(),
            self.genre.as_str(),
            self.certificate.as_str(),
            self.casts.as_str(),
            self.directors.as_str(),
        ]
        .join(" ")
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Load movie records from a `.jsonl` file (one object per line) or a JSON
/// file holding an array of records. A record missing an attribute is a
/// [`CatalogError::Malformed`] naming the file and line.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Movie>, CatalogError> {
    let path = path.as_ref();
    if path.extension().and_then(|ext| ext.to_str()) == Some("jsonl") {
        load_jsonl(path)
    } else {
        load_json(path)
    }
}

fn load_json(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match serde_json::from_str::<Vec<Movie>>(&text) {
        Ok(movies) => Ok(movies),
        // A single record object is accepted for convenience.
        Err(err) => match serde_json::from_str::<Movie>(&text) {
            Ok(movie) => Ok(vec![movie]),
            Err(_) => Err(CatalogError::Malformed {
                path: path.to_path_buf(),
                line: err.line(),
                source: err,
            }),
        },
    }
}

fn load_jsonl(path: &Path) -> Result<Vec<Movie>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut movies = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let movie = serde_json::from_str(&line).map_err(|source| CatalogError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            source,
        })?;
        movies.push(movie);
    }
    Ok(movies)
}
