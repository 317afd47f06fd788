//! Graph emitters: whole-graph and per-concept serialization.
//!
//! Each syntax implements [`GraphWriter`]. Emission only borrows the graph,
//! so any number of formats can be written from one assembly.
//!
//! | Format | Extension | Prefixes declared |
//! |--------|-----------|-------------------|
//! | N-Triples | `nt` | no (syntax has none) |
//! | Turtle | `ttl` | yes |
//! | JSON-LD | `jsonld` | yes, in `@context` |

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::defaults;
use crate::error::{Error, Result};
use crate::graph::{Graph, Triple};

pub use jsonld::JsonLdWriter;
pub use ntriples::NTriplesWriter;
pub use turtle::TurtleWriter;

/// Serialization syntax of an output artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdfFormat {
    NTriples,
    Turtle,
    JsonLd,
}

impl RdfFormat {
    pub const ALL: [RdfFormat; 3] = [Self::NTriples, Self::Turtle, Self::JsonLd];

    /// File extension, also used as the per-concept subdirectory name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::NTriples => "nt",
            Self::Turtle => "ttl",
            Self::JsonLd => "jsonld",
        }
    }

    /// Writer for this syntax.
    pub fn writer(&self) -> Box<dyn GraphWriter> {
        match self {
            Self::NTriples => Box::new(NTriplesWriter),
            Self::Turtle => Box::new(TurtleWriter),
            Self::JsonLd => Box::new(JsonLdWriter),
        }
    }
}

impl std::fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for RdfFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nt" | "ntriples" | "n-triples" => Ok(Self::NTriples),
            "ttl" | "turtle" => Ok(Self::Turtle),
            "jsonld" | "json-ld" => Ok(Self::JsonLd),
            _ => Err(format!("Invalid RDF format: {}", s)),
        }
    }
}

/// A concrete serialization syntax.
pub trait GraphWriter {
    /// Write a complete, self-contained document holding `triples`.
    fn write(&self, triples: &[&Triple], out: &mut dyn Write) -> io::Result<()>;
}

/// Serialize the whole graph to an in-memory string.
pub fn to_string(graph: &Graph, format: RdfFormat) -> Result<String> {
    let triples: Vec<&Triple> = graph.iter().collect();
    let mut buf = Vec::new();
    format
        .writer()
        .write(&triples, &mut buf)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| Error::Serialization(e.to_string()))
}

/// Write the whole graph to `dir/skos.<ext>` and return the path.
#[instrument(skip(graph, format), fields(subsystem = "emit", op = "write_graph", format = %format))]
pub fn write_graph(graph: &Graph, format: RdfFormat, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!(
        "{}.{}",
        defaults::GRAPH_FILE_STEM,
        format.extension()
    ));
    let triples: Vec<&Triple> = graph.iter().collect();
    write_file(&path, format, &triples)?;
    info!(
        path = %path.display(),
        triple_count = triples.len(),
        "Wrote graph"
    );
    Ok(path)
}

/// Write one artifact per concept to `dir/<ext>/<local-name>.<ext>`.
///
/// Each artifact holds only the triples whose subject is that concept. The
/// local name is the concept IRI with `base` removed. Returns the number of
/// files written.
#[instrument(skip(graph, format), fields(subsystem = "emit", op = "write_per_concept", format = %format))]
pub fn write_per_concept(graph: &Graph, base: &str, format: RdfFormat, dir: &Path) -> Result<usize> {
    let subdir = dir.join(format.extension());
    fs::create_dir_all(&subdir).map_err(|e| Error::output(&subdir, e))?;

    let concepts = graph.concepts();
    for concept in &concepts {
        let path = subdir.join(format!("{}.{}", local_name(concept, base), format.extension()));
        let triples: Vec<&Triple> = graph.triples_for(concept).collect();
        write_file(&path, format, &triples)?;
        debug!(path = %path.display(), triple_count = triples.len(), "Wrote concept");
    }

    info!(
        path = %subdir.display(),
        file_count = concepts.len(),
        "Wrote per-concept artifacts"
    );
    Ok(concepts.len())
}

/// Identifier suffix of a concept IRI.
pub fn local_name<'a>(iri: &'a str, base: &str) -> &'a str {
    match iri.strip_prefix(base) {
        Some(local) if !local.is_empty() => local,
        _ => iri.rsplit(['/', '#']).next().unwrap_or(iri),
    }
}

fn write_file(path: &Path, format: RdfFormat, triples: &[&Triple]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::output(path, e))?;
    let mut out = BufWriter::new(file);
    format
        .writer()
        .write(triples, &mut out)
        .and_then(|()| out.flush())
        .map_err(|e| Error::output(path, e))
}

/// Escape a string for a quoted N-Triples or Turtle literal.
pub(crate) fn escape_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
