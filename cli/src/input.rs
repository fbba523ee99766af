use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE: Regex = Regex::new(r"[^\w\s.-]").expect("valid regex");
}

/// Menu positions shown by the prompt; 1 is title, 7 is director.
pub const MENU_FIELDS: [&str; 7] = [
    "title",
    "year",
    "rating",
    "genre",
    "certificate",
    "actor",
    "director",
];

/// Turn a prompt line into a `(field, term)` pair ready for the engine.
///
/// Accepts `N: term` with a menu number, `field: term`, or a bare line,
/// which searches every field. The term is stripped of characters outside
/// `[\w\s.-]` and must not end up empty. Year and rating ranges are checked
/// here first so the prompt can explain the problem instead of echoing the
/// engine's error.
pub fn build_query(line: &str) -> Result<(String, String), String> {
    let line = line.trim();
    let (field, raw_term) = match line.split_once(':') {
        Some((selector, term)) => {
            let selector = selector.trim();
            match selector.parse::<usize>() {
                Ok(n) if (1..=MENU_FIELDS.len()).contains(&n) => {
                    (MENU_FIELDS[n - 1].to_string(), term)
                }
                Ok(_) => {
                    return Err(format!(
                        "Menu numbers run 1-{}; type 'help' for the list.",
                        MENU_FIELDS.len()
                    ))
                }
                Err(_) => (selector.to_lowercase(), term),
            }
        }
        None => ("all".to_string(), line),
    };

    let term = sanitize(raw_term);
    if term.is_empty() {
        return Err("Search term cannot be empty.".to_string());
    }

    match field.as_str() {
        "year" if term.contains('-') => check_range(&field, &term, 1800.0, 2100.0)?,
        "rating" if term.contains('-') => check_range(&field, &term, 0.0, 10.0)?,
        _ => {}
    }

    Ok((field, term))
}

/// Strip everything outside word characters, whitespace, dots, and hyphens.
pub fn sanitize(term: &str) -> String {
    UNSAFE.replace_all(term, "").trim().to_string()
}

/// Interpret the result-count prompt: a positive number or `all`.
pub fn parse_count(line: &str, total: usize) -> Option<usize> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("all") {
        return Some(total);
    }
    match line.parse::<usize>() {
        Ok(n) if n > 0 => Some(n.min(total)),
        _ => None,
    }
}

fn check_range(field: &str, term: &str, min: f64, max: f64) -> Result<(), String> {
    let parsed = term
        .split_once('-')
        .and_then(|(start, end)| Some((start.trim().parse::<f64>().ok()?, end.trim().parse::<f64>().ok()?)));
    let (start, end) = match parsed {
        Some(bounds) => bounds,
        None => return Err(format!("Invalid {field} range format. Use 'start-end'.")),
    };
    if start > end {
        return Err(format!(
            "Invalid {field} range. Start value should be less than or equal to end value."
        ));
    }
    if start < min || end > max {
        return Err(format!("{field} should be between {min} and {max}."));
    }
    Ok(())
}
