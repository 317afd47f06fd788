//! Scheme and concept IRI minting.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::defaults::SANITIZE_REPLACEMENT;

static ABSOLUTE_IRI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*:[^\s<>"{}|\\^`]+$"#)
        .expect("absolute IRI regex is valid")
});

/// True if `value` has a scheme and no characters forbidden in an IRI.
///
/// Syntactic only; the target is never dereferenced.
pub fn is_absolute_iri(value: &str) -> bool {
    ABSOLUTE_IRI.is_match(value) && !value.chars().any(char::is_control)
}

/// IRI of the concept scheme: `base` with one trailing `/` or `#` removed.
pub fn scheme_iri(base: &str) -> String {
    base.strip_suffix('/')
        .or_else(|| base.strip_suffix('#'))
        .unwrap_or(base)
        .to_string()
}

/// Replace characters that may not appear in the identifier segment.
///
/// Path and fragment delimiters, whitespace and control characters become
/// [`SANITIZE_REPLACEMENT`], as do the characters an IRI may never contain
/// (angle brackets, double quote, braces, `|`, `^`, backtick, backslash).
pub fn sanitize(id: &str) -> String {
    id.chars()
        .map(|c| match c {
            '.' | '/' | '#' | '?' | '[' | ']' => SANITIZE_REPLACEMENT,
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => SANITIZE_REPLACEMENT,
            c if c.is_whitespace() || c.is_control() => SANITIZE_REPLACEMENT,
            c => c,
        })
        .collect()
}

/// IRI of the concept with raw identifier `id`.
pub fn concept_iri(base: &str, id: &str) -> String {
    format!("{}{}", base, sanitize(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_strips_trailing_slash() {
        assert_eq!(scheme_iri("http://ex.org/voc/"), "http://ex.org/voc");
    }

    #[test]
    fn test_scheme_strips_trailing_hash() {
        assert_eq!(scheme_iri("http://ex.org/voc#"), "http://ex.org/voc");
    }

    #[test]
    fn test_scheme_strips_exactly_one() {
        assert_eq!(scheme_iri("http://ex.org/voc//"), "http://ex.org/voc/");
    }

    #[test]
    fn test_scheme_idempotent_on_normalized() {
        let once = scheme_iri("http://ex.org/voc/");
        assert_eq!(scheme_iri(&once), once);
        assert_eq!(scheme_iri("http://ex.org/voc"), "http://ex.org/voc");
    }

    #[test]
    fn test_sanitize_period() {
        assert_eq!(sanitize("1.2"), "1_2");
        assert_eq!(sanitize("1.2.3"), "1_2_3");
    }

    #[test]
    fn test_sanitize_other_reserved() {
        assert_eq!(sanitize("a b/c#d?e"), "a_b_c_d_e");
        assert_eq!(sanitize("plain-id_9"), "plain-id_9");
    }

    #[test]
    fn test_sanitize_iri_forbidden_characters() {
        assert_eq!(sanitize("a>b"), "a_b");
        assert_eq!(sanitize("c\"d"), "c_d");
        assert_eq!(sanitize("<{x}|y^z`\\>"), "__x__y_z___");
        assert_eq!(sanitize("tab\there\u{7}"), "tab_here_");
        assert_eq!(sanitize("[1]"), "_1_");
        assert_eq!(sanitize("é-ü:2"), "é-ü:2");
    }

    #[test]
    fn test_minted_iris_are_absolute() {
        for id in ["1.2", "a>b", "c\"d", "x y", "back\\slash", "{z}"] {
            let iri = concept_iri("http://ex.org/voc/", id);
            assert!(is_absolute_iri(&iri), "{}", iri);
        }
    }

    #[test]
    fn test_is_absolute_iri() {
        assert!(is_absolute_iri("http://ex.org/has_note"));
        assert!(is_absolute_iri("urn:isbn:0451450523"));
        assert!(!is_absolute_iri("httpNote"));
        assert!(!is_absolute_iri("http://ex.org/has note"));
        assert!(!is_absolute_iri("http://ex.org/<x>"));
        assert!(!is_absolute_iri("/relative/path"));
        assert!(!is_absolute_iri(""));
    }

    #[test]
    fn test_concept_iri() {
        assert_eq!(concept_iri("http://ex.org/voc/", "1.2"), "http://ex.org/voc/1_2");
    }
}
