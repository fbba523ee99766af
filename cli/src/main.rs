use anyhow::{Context, Result};
use cinedex_core::catalog;
use cinedex_core::normalize::default_stopwords;
use cinedex_core::{Field, FuzzyMatcher, Index, LevenshteinMatcher, MatchMode, QueryEngine};
use clap::Parser;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

mod input;

/// Name suggestions offered when a person lookup comes back empty.
const SUGGESTION_LIMIT: usize = 3;
const SUGGESTION_CUTOFF: u8 = 60;

#[derive(Parser)]
#[command(name = "cinedex")]
#[command(about = "Search a movie catalog by field, range, or fuzzy text", long_about = None)]
struct Args {
    /// Catalog file (.json array or .jsonl, one record per line)
    #[arg(long, default_value = "data/movies.json")]
    data: PathBuf,
    /// Stopword list, one word per line; defaults to the built-in English list
    #[arg(long)]
    stopwords: Option<PathBuf>,
    /// Run a single query and exit instead of starting the prompt
    query: Option<String>,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let movies = catalog::load(&args.data)
        .with_context(|| format!("loading catalog from {}", args.data.display()))?;
    let stopwords = match &args.stopwords {
        Some(path) => read_stopwords(path)?,
        None => default_stopwords(),
    };
    let index = Index::build(&movies, &stopwords);
    tracing::info!(
        movies = movies.len(),
        terms = index.postings(Field::All).len(),
        people = index.person_names().len(),
        "catalog indexed"
    );

    let engine = QueryEngine::new(&index);
    match &args.query {
        Some(query) => run_once(&engine, query),
        None => run_prompt(&engine, &index),
    }
}

fn read_stopwords(path: &Path) -> Result<HashSet<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading stopwords from {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect())
}

fn run_once(engine: &QueryEngine, query: &str) -> Result<()> {
    let results = engine.execute(query)?;
    for title in results {
        println!("{title}");
    }
    Ok(())
}

fn run_prompt(engine: &QueryEngine, index: &Index) -> Result<()> {
    println!("Welcome to cinedex, a field-scoped movie catalog search.");
    print_help();

    let mut line = String::new();
    loop {
        print!("\nEnter a search query (or 'exit' to quit, 'help' for instructions): ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") {
            return Ok(());
        }
        if trimmed.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        let (field, term) = match input::build_query(trimmed) {
            Ok(parts) => parts,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        let query = format!("{field}:{term}");
        match engine.execute(&query) {
            Ok(results) if results.is_empty() => no_results(&field, &term, index),
            Ok(results) => show_results(&query, &results)?,
            Err(err) => println!("{err}"),
        }
    }
}

fn print_help() {
    println!("\nSearch one field with 'N: term' or 'field: term', or type plain text to search everything.");
    println!("1: Title\n2: Year\n3: Rating\n4: Genre\n5: Certificate\n6: Actor\n7: Director");
    println!("Year and rating accept ranges, like '2: 1990-2000' or '3: 8.5-9.0'.");
    println!("\nExample queries:");
    println!("  - 1: The Shawshank Redemption");
    println!("  - 2: 1994");
    println!("  - 4: Drama");
    println!("  - 6: Leonardo DiCaprio");
    println!("  - 7: Christopher Nolan");
}

fn show_results(query: &str, results: &[String]) -> Result<()> {
    println!("\nFound {} movies matching '{query}':", results.len());
    let mut line = String::new();
    loop {
        print!("How many results would you like to see? (a number or 'all'): ");
        io::stdout().flush()?;
        line.clear();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF counts as 'all' so the answer still comes out.
            print_titles(results, results.len());
            return Ok(());
        }
        if let Some(count) = input::parse_count(&line, results.len()) {
            print_titles(results, count);
            return Ok(());
        }
        println!("Invalid input. Please enter a positive number or 'all'.");
    }
}

fn print_titles(results: &[String], count: usize) {
    for title in &results[..count] {
        println!(" - {title}");
    }
}

fn no_results(field: &str, term: &str, index: &Index) {
    println!("No movies found matching '{field}:{term}'.");
    match field {
        "year" => println!("Tip: try a year the catalog covers, or a range like 1990-1999."),
        "rating" => {
            println!("Tip: catalog ratings mostly sit between 7.0 and 9.5; ranges like 8-9 work.")
        }
        "actor" | "director" => {
            println!("Tip: check the spelling of the name or try a partial name.");
            let suggestions = suggest_names(term, index);
            if !suggestions.is_empty() {
                println!("Closest names: {}", suggestions.join(", "));
            }
        }
        _ => {}
    }
}

fn suggest_names(term: &str, index: &Index) -> Vec<String> {
    let names: Vec<&str> = index.person_names().iter().map(String::as_str).collect();
    LevenshteinMatcher
        .top_matches(
            &term.to_lowercase(),
            &names,
            MatchMode::Partial,
            SUGGESTION_LIMIT,
        )
        .into_iter()
        .filter(|(_, score)| *score > SUGGESTION_CUTOFF)
        .map(|(name, _)| name)
        .collect()
}
