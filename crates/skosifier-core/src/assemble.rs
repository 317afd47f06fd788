//! Graph assembler: maps classified rows onto a SKOS concept scheme.
//!
//! Every row becomes one `skos:Concept` with a notation, an `inScheme` edge
//! and either a `broader`/`narrower` pair or a `topConceptOf`/`hasTopConcept`
//! pair. The remaining columns are dispatched on their [`ColumnRole`].
//!
//! Assembly is all-or-nothing: an empty or colliding identifier aborts the
//! run before anything is written. Unparseable dates and link values that
//! are not absolute IRIs only drop the affected edge.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, instrument, trace, warn};

use crate::date::{parse_date, to_xsd_date};
use crate::error::{Error, Result};
use crate::graph::{Graph, Literal, Term};
use crate::header::{ColumnRole, ColumnRoles, HeaderClassifier};
use crate::row::{Record, Table};
use crate::scheme::{concept_iri, is_absolute_iri, scheme_iri};
use crate::vocab;

/// Counters collected while assembling, reported once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    pub concepts: usize,
    pub top_concepts: usize,
    pub triples: usize,
    pub skipped_dates: usize,
    pub skipped_links: usize,
}

/// Result of a successful assembly.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub graph: Graph,
    pub scheme: String,
    pub stats: AssemblyStats,
}

/// Builds the concept graph for one vocabulary.
#[derive(Debug, Clone)]
pub struct Assembler {
    base: String,
    scheme: String,
    classifier: HeaderClassifier,
}

impl Assembler {
    /// Assembler minting concept IRIs under `base`, with the default languages.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_classifier(base, HeaderClassifier::default())
    }

    pub fn with_classifier(base: impl Into<String>, classifier: HeaderClassifier) -> Self {
        let base = base.into();
        let scheme = scheme_iri(&base);
        Self {
            base,
            scheme,
            classifier,
        }
    }

    /// Map every row of `table` into a single graph.
    #[instrument(skip_all, fields(subsystem = "assemble", op = "assemble", row_count = table.len()))]
    pub fn assemble(&self, table: &Table) -> Result<Assembly> {
        let start = Instant::now();
        let roles = self.classifier.classify(table.header());

        let mut graph = Graph::new();
        let mut stats = AssemblyStats::default();
        let mut minted: HashMap<String, usize> = HashMap::new();

        graph.add(
            &self.scheme,
            vocab::RDF_TYPE,
            Term::iri(vocab::SKOS_CONCEPT_SCHEME),
        );

        for record in table.records() {
            let node = self.mint(&record, &mut minted)?;
            self.add_structure(&mut graph, &record, &node, &mut stats);
            self.add_columns(&mut graph, &record, &node, &roles, &mut stats);
            stats.concepts += 1;
        }

        stats.triples = graph.len();
        info!(
            concept_count = stats.concepts,
            top_concepts = stats.top_concepts,
            triple_count = stats.triples,
            skipped_dates = stats.skipped_dates,
            skipped_links = stats.skipped_links,
            duration_ms = start.elapsed().as_millis() as u64,
            "Graph assembled"
        );

        Ok(Assembly {
            graph,
            scheme: self.scheme.clone(),
            stats,
        })
    }

    /// Concept IRI for the row, rejecting empty and colliding identifiers.
    fn mint(&self, record: &Record<'_>, minted: &mut HashMap<String, usize>) -> Result<String> {
        let id = record.id();
        if id.is_empty() {
            return Err(Error::EmptyIdentifier {
                line: record.line(),
            });
        }
        let node = concept_iri(&self.base, id);
        if let Some(&first_line) = minted.get(&node) {
            return Err(Error::DuplicateConcept {
                line: record.line(),
                first_line,
                id: id.to_string(),
                iri: node,
            });
        }
        minted.insert(node.clone(), record.line());
        Ok(node)
    }

    /// Type, notation, hierarchy and scheme membership.
    fn add_structure(
        &self,
        graph: &mut Graph,
        record: &Record<'_>,
        node: &str,
        stats: &mut AssemblyStats,
    ) {
        trace!(concept_id = record.id(), row = record.line(), "Mapping row");

        graph.add(node, vocab::RDF_TYPE, Term::iri(vocab::SKOS_CONCEPT));
        graph.add(
            node,
            vocab::SKOS_NOTATION,
            Literal::plain(record.id()).into(),
        );

        let parent = record.parent();
        if parent.is_empty() {
            graph.add(node, vocab::SKOS_TOP_CONCEPT_OF, Term::iri(&self.scheme));
            graph.add(&self.scheme, vocab::SKOS_HAS_TOP_CONCEPT, Term::iri(node));
            stats.top_concepts += 1;
        } else {
            let parent_node = concept_iri(&self.base, parent);
            graph.add(node, vocab::SKOS_BROADER, Term::iri(&parent_node));
            graph.add(&parent_node, vocab::SKOS_NARROWER, Term::iri(node));
        }

        graph.add(node, vocab::SKOS_IN_SCHEME, Term::iri(&self.scheme));
    }

    fn add_columns(
        &self,
        graph: &mut Graph,
        record: &Record<'_>,
        node: &str,
        roles: &ColumnRoles,
        stats: &mut AssemblyStats,
    ) {
        for (idx, role) in roles.data_columns() {
            let value = record.field(idx);
            if value.is_empty() {
                continue;
            }
            match role {
                ColumnRole::PrefLabel(lang) => {
                    graph.add(node, vocab::SKOS_PREF_LABEL, Literal::lang(value, lang).into());
                }
                ColumnRole::AltLabel(lang) => {
                    graph.add(node, vocab::SKOS_ALT_LABEL, Literal::lang(value, lang).into());
                }
                ColumnRole::Definition(lang) => {
                    graph.add(node, vocab::SKOS_DEFINITION, Literal::lang(value, lang).into());
                }
                ColumnRole::ScopeNote(lang) => {
                    graph.add(node, vocab::SKOS_SCOPE_NOTE, Literal::lang(value, lang).into());
                }
                ColumnRole::ValidFrom => {
                    self.add_date(graph, record, node, vocab::SCHEMA_START_DATE, value, stats);
                }
                ColumnRole::ValidUntil => {
                    self.add_date(graph, record, node, vocab::SCHEMA_END_DATE, value, stats);
                }
                ColumnRole::Link(prop) => {
                    if is_absolute_iri(value) {
                        graph.add(node, prop.iri(), Term::iri(value));
                    } else {
                        warn!(
                            concept_id = record.id(),
                            row = record.line(),
                            property = %prop,
                            value,
                            "Link value is not an absolute IRI, omitted"
                        );
                        stats.skipped_links += 1;
                    }
                }
                ColumnRole::LiteralProperty(predicate) => {
                    graph.add(node, predicate, Literal::plain(value).into());
                }
                ColumnRole::Identifier | ColumnRole::Parent | ColumnRole::Ignored => {}
            }
        }
    }

    fn add_date(
        &self,
        graph: &mut Graph,
        record: &Record<'_>,
        node: &str,
        predicate: &str,
        value: &str,
        stats: &mut AssemblyStats,
    ) {
        match parse_date(value) {
            Some(date) => {
                graph.add(
                    node,
                    predicate,
                    Literal::typed(to_xsd_date(date), vocab::XSD_DATE).into(),
                );
            }
            None => {
                debug!(
                    concept_id = record.id(),
                    row = record.line(),
                    value,
                    "Skipping unparseable validity date"
                );
                stats.skipped_dates += 1;
            }
        }
    }
}
