use once_cell::sync::Lazy;
use regex::Regex;

/// Matches the first `--pretty=format:` flag with a quoted value. The two
/// quote styles are separate branches so the opening and closing quote must
/// pair up; `regex` has no backreferences to express this in one branch.
static FORMAT_FLAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"--pretty=format:(?:"([^"]+)"|'([^']+)')"#).unwrap());

/// Pull the format string out of a larger git argument string, e.g.
/// `log --pretty=format:"%H %s"` yields `%H %s`.
///
/// Only the first match counts; returns an empty string when no quoted
/// format flag is present.
pub fn extract(args: &str) -> String {
    FORMAT_FLAG_RE
        .captures(args)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_double_quoted_format() {
        assert_eq!(extract(r#"log --pretty=format:"%H %s""#), "%H %s");
    }

    #[test]
    fn extracts_single_quoted_format() {
        assert_eq!(extract("log --graph --pretty=format:'%h %an'"), "%h %an");
    }

    #[test]
    fn quotes_must_pair_up() {
        assert_eq!(extract(r#"log --pretty=format:"%H'"#), "");
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract("--pretty=format:'%H' --pretty=format:'%s'"),
            "%H"
        );
    }

    #[test]
    fn missing_flag_yields_empty_string() {
        assert_eq!(extract("log --oneline"), "");
        assert_eq!(extract(""), "");
        assert_eq!(extract("--pretty=format:%H"), "");
    }
}
