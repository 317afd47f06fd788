//! Centralized default constants for SKOSifier.
//!
//! **This module is the single source of truth** for shared default values.
//! The CLI and the library reference these constants instead of defining
//! their own literals.

// =============================================================================
// INPUT
// =============================================================================

/// Field delimiter of the input file.
pub const DELIMITER: u8 = b';';

/// Languages recognized as label columns (and in `alt_`/`def_`/`scope_` columns).
pub const LANGUAGES: [&str; 4] = ["nl", "fr", "de", "en"];

/// Column header prefix for alternate labels.
pub const ALT_PREFIX: &str = "alt_";

/// Column header prefix for definitions.
pub const DEF_PREFIX: &str = "def_";

/// Column header prefix for scope notes.
pub const SCOPE_PREFIX: &str = "scope_";

/// Column header for the start of the validity interval.
pub const START_COLUMN: &str = "start";

/// Column header for the end of the validity interval.
pub const END_COLUMN: &str = "end";

/// Column header prefix for literal-valued properties named by IRI.
pub const HTTP_PREFIX: &str = "http";

/// Date layout accepted in `start`/`end` columns, as a chrono format string.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Substitute for characters not allowed in the identifier segment of an IRI.
pub const SANITIZE_REPLACEMENT: char = '_';

// =============================================================================
// OUTPUT
// =============================================================================

/// File stem of whole-graph artifacts (`skos.nt`, `skos.ttl`, ...).
pub const GRAPH_FILE_STEM: &str = "skos";

/// Name of the HTML index page.
pub const HTML_INDEX: &str = "index.html";

/// Subdirectory holding one HTML page per row.
pub const HTML_DIR: &str = "html";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_are_distinct() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_delimiter_is_semicolon() {
        assert_eq!(DELIMITER as char, ';');
    }
}
