//! Error types for SKOSifier.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SKOSifier's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse error class used by front ends to pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitClass {
    /// The input could not be read or does not describe a valid vocabulary.
    Input,
    /// An output artifact could not be created or written.
    Output,
}

/// Core error type for SKOSifier operations.
///
/// Field-level problems (unparseable dates, link values that are not IRIs)
/// never surface here; they are logged and the affected edge is omitted.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file could not be opened or read
    #[error("Failed to read input {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Delimited input is malformed (wraps csv::Error)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header is missing or too short to hold identifier and parent
    #[error("Invalid header: {0}")]
    Header(String),

    /// A row does not have as many fields as the header
    #[error("Row {line} has {found} fields, header has {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A row has an empty identifier
    #[error("Row {line} has an empty identifier")]
    EmptyIdentifier { line: usize },

    /// Two rows mint the same concept IRI
    #[error("Row {line}: identifier {id:?} collides with row {first_line} ({iri})")]
    DuplicateConcept {
        line: usize,
        first_line: usize,
        id: String,
        iri: String,
    },

    /// Serialized graph text could not be parsed
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Output directory or artifact could not be written
    #[error("Failed to write output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to a graph syntax failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify the error for exit-status reporting.
    pub fn exit_class(&self) -> ExitClass {
        match self {
            Error::Output { .. } | Error::Serialization(_) => ExitClass::Output,
            Error::Input { .. }
            | Error::Csv(_)
            | Error::Header(_)
            | Error::RowLength { .. }
            | Error::EmptyIdentifier { .. }
            | Error::DuplicateConcept { .. }
            | Error::Syntax { .. }
            | Error::Config(_) => ExitClass::Input,
        }
    }

    /// Wrap an I/O error raised while writing `path`.
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_row_length() {
        let err = Error::RowLength {
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "Row 3 has 4 fields, header has 5");
    }

    #[test]
    fn test_error_display_empty_identifier() {
        let err = Error::EmptyIdentifier { line: 7 };
        assert_eq!(err.to_string(), "Row 7 has an empty identifier");
    }

    #[test]
    fn test_error_display_duplicate() {
        let err = Error::DuplicateConcept {
            line: 4,
            first_line: 2,
            id: "1.2".to_string(),
            iri: "http://ex.org/1_2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"1.2\""));
        assert!(msg.contains("row 2"));
    }

    #[test]
    fn test_exit_class_input() {
        assert_eq!(Error::Header("x".into()).exit_class(), ExitClass::Input);
        assert_eq!(
            Error::EmptyIdentifier { line: 1 }.exit_class(),
            ExitClass::Input
        );
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::Input {
            path: "in.csv".into(),
            source: io_err,
        };
        assert_eq!(err.exit_class(), ExitClass::Input);
    }

    #[test]
    fn test_exit_class_output() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::output("out/skos.nt", io_err);
        assert_eq!(err.exit_class(), ExitClass::Output);
        assert!(err.to_string().contains("out/skos.nt"));
        assert_eq!(
            Error::Serialization("bad".into()).exit_class(),
            ExitClass::Output
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
