use cinedex_core::normalize::default_stopwords;
use cinedex_core::{Index, Movie, QueryEngine, QueryError};

fn movie(
    name: &str,
    year: &str,
    rating: &str,
    genre: &str,
    certificate: &str,
    casts: &str,
    directors: &str,
) -> Movie {
    Movie {
        name: name.into(),
        year: year.into(),
        rating: rating.into(),
        genre: genre.into(),
        certificate: certificate.into(),
        casts: casts.into(),
        directors: directors.into(),
    }
}

fn sample_catalog() -> Vec<Movie> {
    vec![
        movie(
            "Inception",
            "2010",
            "8.8",
            "Action, Sci-Fi",
            "PG-13",
            "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Christopher Nolan",
        ),
        movie(
            "The Dark Knight",
            "2008",
            "9.0",
            "Action, Crime, Drama",
            "PG-13",
            "Christian Bale, Heath Ledger",
            "Christopher Nolan",
        ),
        movie(
            "Goodfellas",
            "1990",
            "8.7",
            "Biography, Crime, Drama",
            "R",
            "Robert De Niro, Ray Liotta",
            "Martin Scorsese",
        ),
        movie(
            "The Matrix",
            "1999",
            "8.7",
            "Action, Sci-Fi",
            "R",
            "Keanu Reeves, Laurence Fishburne",
            "Lana Wachowski, Lilly Wachowski",
        ),
        movie(
            "Titanic",
            "1997",
            "7.9",
            "Drama, Romance",
            "PG-13",
            "Leonardo DiCaprio, Kate Winslet",
            "James Cameron",
        ),
        movie(
            "Mission: Impossible",
            "1996",
            "7.2",
            "Action, Adventure, Thriller",
            "PG-13",
            "Tom Cruise, Jon Voight",
            "Brian De Palma",
        ),
    ]
}

fn build_sample() -> Index {
    Index::build(&sample_catalog(), &default_stopwords())
}

#[test]
fn every_attribute_is_discoverable_by_its_own_value() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    let queries = [
        "title:inception",
        "year:2010",
        "rating:8.8",
        "genre:sci-fi",
        "certificate:pg-13",
        "actor:leonardo dicaprio",
        "director:christopher nolan",
        "inception",
    ];
    for query in queries {
        let results = engine.execute(query).unwrap();
        assert!(
            results.contains(&"Inception".to_string()),
            "{query} did not surface Inception: {results:?}"
        );
    }
}

#[test]
fn year_ranges_are_inclusive_at_both_bounds() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);

    assert_eq!(engine.execute("year:1990-1990").unwrap(), vec!["Goodfellas"]);

    let mut results = engine.execute("year:1996-1999").unwrap();
    results.sort();
    assert_eq!(results, vec!["Mission: Impossible", "The Matrix", "Titanic"]);
}

#[test]
fn rating_ranges_are_inclusive_and_skip_nothing_in_between() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    let mut results = engine.execute("rating:8.7-9.0").unwrap();
    results.sort();
    assert_eq!(
        results,
        vec!["Goodfellas", "Inception", "The Dark Knight", "The Matrix"]
    );
}

#[test]
fn non_numeric_ratings_skip_ranges_but_stay_searchable() {
    let movies = vec![
        movie(
            "Heat",
            "1995",
            "8.3",
            "Crime, Drama",
            "R",
            "Al Pacino, Robert De Niro",
            "Michael Mann",
        ),
        movie(
            "The Trial",
            "1962",
            "N/A",
            "Drama, Mystery",
            "Approved",
            "Anthony Perkins, Jeanne Moreau",
            "Orson Welles",
        ),
    ];
    let index = Index::build(&movies, &default_stopwords());
    let engine = QueryEngine::new(&index);

    assert_eq!(engine.execute("rating:8.0-9.0").unwrap(), vec!["Heat"]);
    assert_eq!(engine.execute("rating:n/a").unwrap(), vec!["The Trial"]);
}

#[test]
fn inverted_and_malformed_ranges_fail_without_results() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    assert_eq!(
        engine.execute("rating:9.0-8.0"),
        Err(QueryError::InvalidRange("9.0-8.0".into()))
    );
    assert_eq!(
        engine.execute("year:2014-2010"),
        Err(QueryError::InvalidRange("2014-2010".into()))
    );
    assert_eq!(
        engine.execute("year:2000-199x"),
        Err(QueryError::InvalidRange("2000-199x".into()))
    );
    assert_eq!(
        engine.execute("year:-2000"),
        Err(QueryError::InvalidRange("-2000".into()))
    );
}

#[test]
fn partial_names_reach_their_people() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);

    let mut results = engine.execute("actor:dicaprio").unwrap();
    results.sort();
    assert_eq!(results, vec!["Inception", "Titanic"]);

    assert_eq!(
        engine.execute("director:scorsese").unwrap(),
        vec!["Goodfellas"]
    );
}

#[test]
fn whole_matching_tolerates_small_edits_only() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);

    // One trailing letter still clears the cutoff.
    let mut results = engine.execute("genre:dramas").unwrap();
    results.sort();
    assert_eq!(results, vec!["Goodfellas", "The Dark Knight", "Titanic"]);

    // A scrambled token does not.
    assert!(engine.execute("reevse").unwrap().is_empty());
}

#[test]
fn full_text_never_invents_terms() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);

    let mut results = engine.execute("nolan").unwrap();
    results.sort();
    assert_eq!(results, vec!["Inception", "The Dark Knight"]);

    assert!(engine.execute("zzzyqqv").unwrap().is_empty());
}

#[test]
fn stopwords_are_absent_from_full_text_but_kept_in_exact_keys() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    assert!(engine.execute("the").unwrap().is_empty());
    assert_eq!(
        engine.execute("title:the dark knight").unwrap(),
        vec!["The Dark Knight"]
    );
}

#[test]
fn unknown_fields_are_rejected() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    assert_eq!(
        engine.execute("foo:bar"),
        Err(QueryError::InvalidField("foo".into()))
    );
}

#[test]
fn queries_are_case_insensitive() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    assert_eq!(
        engine.execute("TITLE:GOODFELLAS").unwrap(),
        vec!["Goodfellas"]
    );
    let results = engine.execute("Actor:DiCaprio").unwrap();
    assert!(results.contains(&"Titanic".to_string()));
}

#[test]
fn ranking_prefers_recurring_title_tokens_then_title_order() {
    let index = build_sample();
    let engine = QueryEngine::new(&index);
    // Two-token titles outscore single-token ones here because every title
    // token counts once in its own record text.
    assert_eq!(
        engine.execute("genre:action").unwrap(),
        vec![
            "Mission: Impossible",
            "The Dark Knight",
            "Inception",
            "The Matrix"
        ]
    );
}

#[test]
fn building_twice_from_the_same_records_is_identical() {
    let movies = sample_catalog();
    let stopwords = default_stopwords();
    let first = Index::build(&movies, &stopwords);
    let second = Index::build(&movies, &stopwords);
    assert_eq!(first, second);
}

#[test]
fn index_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Index>();
}

#[test]
fn worked_example_single_record() {
    let movies = vec![movie(
        "Inception",
        "2010",
        "8.8",
        "Action, Sci-Fi",
        "PG-13",
        "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
        "Christopher Nolan",
    )];
    let index = Index::build(&movies, &default_stopwords());
    let engine = QueryEngine::new(&index);

    assert_eq!(engine.execute("director:nolan").unwrap(), vec!["Inception"]);
    assert_eq!(engine.execute("year:2005-2015").unwrap(), vec!["Inception"]);
    assert_eq!(engine.execute("actor:page").unwrap(), vec!["Inception"]);
    assert!(engine.execute("rating:9.0-9.5").unwrap().is_empty());
}
