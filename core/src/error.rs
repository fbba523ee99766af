use std::path::PathBuf;
use thiserror::Error;

/// A rejected query. The index is untouched and the caller may retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid field '{0}': expected one of title, year, rating, genre, certificate, actor, director, all")]
    InvalidField(String),
    #[error("invalid range '{0}': expected start-end with start <= end")]
    InvalidRange(String),
}

/// A catalog file that could not be turned into records. Fatal to the build.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record in {} at line {line}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
