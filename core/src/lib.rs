//! Field-scoped search over a fixed movie catalog.
//!
//! Load records with [`catalog::load`], build an [`Index`] once, then run
//! `field:term` queries through a [`QueryEngine`]. Year and rating accept
//! inclusive `start-end` ranges, person fields tolerate partial names, and
//! the remaining fields go through whole-string fuzzy matching.

pub mod catalog;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod normalize;
pub mod query;
pub mod rank;

pub use catalog::Movie;
pub use error::{CatalogError, QueryError};
pub use fuzzy::{FuzzyMatcher, LevenshteinMatcher, MatchMode};
pub use index::{Field, Index, TermFrequencyTable, TermPostings};
pub use query::QueryEngine;
