//! Structured logging field name constants for SKOSifier.
//!
//! Library code logs through `tracing` with these field names so that a JSON
//! log line from the reader, the assembler and the emitters can be queried
//! the same way.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Run aborted, reported by the front end |
//! | WARN  | Recoverable anomaly, value skipped (non-IRI link, ignored header) |
//! | INFO  | Run milestones (input read, graph assembled, artifact written) |
//! | DEBUG | Decision points (column roles, rejected dates, effective config) |
//! | TRACE | Per-row and per-artifact iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "input", "assemble", "emit", "html", "pipeline"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "assemble", "write_graph", "write_per_concept"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Raw identifier of the row being mapped.
pub const CONCEPT_ID: &str = "concept_id";

/// One-based input line of the row (header is line 1).
pub const ROW: &str = "row";

/// Header text of the column being dispatched.
pub const COLUMN: &str = "column";

/// Serialization format name ("nt", "ttl", "jsonld").
pub const FORMAT: &str = "format";

/// Filesystem path of an input or output artifact.
pub const PATH: &str = "path";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of input rows.
pub const ROW_COUNT: &str = "row_count";

/// Number of concepts in the assembled graph.
pub const CONCEPT_COUNT: &str = "concept_count";

/// Number of triples written or held.
pub const TRIPLE_COUNT: &str = "triple_count";

/// Number of artifacts written.
pub const FILE_COUNT: &str = "file_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use crate::{Assembler, Table};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_assembler_logs_with_contract_fields() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let table = Table::new(
            vec!["id".to_string(), "parent".to_string()],
            vec![vec!["A".to_string(), String::new()]],
        )
        .unwrap();
        tracing::subscriber::with_default(subscriber, || {
            Assembler::new("http://ex.org/voc/").assemble(&table).unwrap();
        });

        let output = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        let line = output
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap())
            .find(|v| v["fields"]["message"] == "Graph assembled")
            .expect("assembly summary logged");

        for field in [CONCEPT_COUNT, TRIPLE_COUNT, DURATION_MS] {
            assert!(!line["fields"][field].is_null(), "missing {}", field);
        }
        assert_eq!(line["fields"][CONCEPT_COUNT], 1);
        assert_eq!(line["span"][SUBSYSTEM], "assemble");
        assert_eq!(line["span"][OPERATION], "assemble");
        assert_eq!(line["span"][ROW_COUNT], 1);
    }

    #[test]
    fn test_field_names_are_unique() {
        let names = [
            SUBSYSTEM,
            OPERATION,
            CONCEPT_ID,
            ROW,
            COLUMN,
            FORMAT,
            PATH,
            DURATION_MS,
            ROW_COUNT,
            CONCEPT_COUNT,
            TRIPLE_COUNT,
            FILE_COUNT,
            ERROR_MSG,
        ];
        let unique: std::collections::HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }
}
