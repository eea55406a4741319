//! Best-effort lexer over generation output
//!
//! The service promises numbered names one per line but guarantees no
//! grammar. Parsing never fails; worst case it yields fewer names than
//! requested.

/// Extract up to `count` recipe names from a free-text response, in
/// response order.
pub fn parse_recipe_names(response: &str, count: usize) -> Vec<String> {
    response
        .lines()
        .map(strip_enumeration)
        .filter(|name| !name.is_empty())
        .take(count)
        .collect()
}

/// Strip a leading enumeration prefix: any run of digits, `. - ) :` and
/// spaces. Trims surrounding whitespace from what remains.
fn strip_enumeration(line: &str) -> String {
    line.trim()
        .trim_start_matches(|c: char| c.is_ascii_digit() || matches!(c, '.' | '-' | ')' | ':' | ' '))
        .trim()
        .to_string()
}
