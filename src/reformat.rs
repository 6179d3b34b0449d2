use crate::placeholder;
use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel injected around every placeholder so field positions survive
/// git's substitution. U+FFFD does not occur in anything git can print for a
/// commit, which makes splitting on this sequence unambiguous.
pub const DELIMITER: &str = "\u{fffd}prettylog\u{fffd}";

/// Matches any recognized placeholder token. Alternation in `regex` prefers
/// earlier branches, so tokens are sorted longest-first; a two-character
/// token like `%an` can never be split by a shorter token starting at the
/// same position.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    let mut tokens: Vec<&str> = placeholder::all_tokens().collect();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let pattern = tokens
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("placeholder tokens form a valid pattern")
});

/// Rewrite a pretty-format string so every recognized placeholder is wrapped
/// in [`DELIMITER`]. Literal text and unrecognized tokens pass through
/// untouched, so a string without placeholders comes back unchanged.
///
/// Callers should tag a format string once; [`crate::parse`] detects an
/// already-tagged string by the delimiter's presence and will not tag twice.
pub fn reformat(format: &str) -> String {
    TOKEN_RE
        .replace_all(format, |caps: &regex::Captures| {
            format!("{}{}{}", DELIMITER, &caps[0], DELIMITER)
        })
        .into_owned()
}
