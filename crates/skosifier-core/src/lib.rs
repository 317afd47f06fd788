//! # skosifier-core
//!
//! Converts a hierarchical vocabulary kept as a delimited table into a W3C
//! SKOS concept scheme.
//!
//! Each row names a concept (`id`), optionally its parent (`parent`), and
//! any number of labels, notes, validity dates and cross-references, each
//! in a column whose header selects its role. The rows are mapped onto a
//! single in-memory [`Graph`], which is then written as N-Triples, Turtle
//! or JSON-LD, optionally with one small file per concept.
//!
//! ## Example
//!
//! ```rust
//! use skosifier_core::{emit, Assembler, RdfFormat, Table};
//!
//! let header = vec!["id".to_string(), "parent".to_string(), "fr".to_string()];
//! let rows = vec![vec!["1.2".to_string(), String::new(), "Racine".to_string()]];
//! let table = Table::new(header, rows).unwrap();
//!
//! let assembly = Assembler::new("http://example.org/voc/").assemble(&table).unwrap();
//! let turtle = emit::to_string(&assembly.graph, RdfFormat::Turtle).unwrap();
//! assert!(turtle.contains("<http://example.org/voc/1_2>"));
//! assert!(turtle.contains("\"Racine\"@fr"));
//! ```

pub mod assemble;
pub mod config;
pub mod date;
pub mod defaults;
pub mod emit;
pub mod error;
pub mod graph;
pub mod header;
pub mod html;
pub mod input;
pub mod logging;
pub mod pipeline;
pub mod row;
pub mod scheme;
pub mod vocab;

// Re-export commonly used types at crate root
pub use assemble::{Assembler, Assembly, AssemblyStats};
pub use config::Config;
pub use date::parse_date;
pub use emit::{GraphWriter, RdfFormat};
pub use error::{Error, ExitClass, Result};
pub use graph::{Graph, Literal, LiteralKind, Term, Triple};
pub use header::{ColumnRole, ColumnRoles, HeaderClassifier};
pub use pipeline::{run, RunReport};
pub use row::{Record, Table};
pub use scheme::{concept_iri, sanitize, scheme_iri};
pub use vocab::LinkProperty;
