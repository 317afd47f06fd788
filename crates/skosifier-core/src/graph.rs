//! In-memory RDF graph built by the assembler and read by the emitters.
//!
//! Triples keep their insertion order so that every serialization of the
//! same input is byte-for-byte stable. Inserting a triple that is already
//! present is a no-op, matching set semantics of an RDF graph.

use std::collections::HashSet;

use crate::vocab;

/// Literal value with its language tag or datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub value: String,
    pub kind: LiteralKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// Simple literal (`xsd:string`).
    Plain,
    /// Language-tagged string.
    Lang(String),
    /// Literal with an explicit datatype IRI.
    Typed(String),
}

impl Literal {
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::Plain,
        }
    }

    pub fn lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::Lang(lang.into()),
        }
    }

    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: LiteralKind::Typed(datatype.into()),
        }
    }

    /// Language tag, if any.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Lang(lang) => Some(lang),
            _ => None,
        }
    }

    /// Datatype IRI as RDF 1.1 defines it (every literal has one).
    pub fn datatype(&self) -> &str {
        match &self.kind {
            LiteralKind::Plain => vocab::XSD_STRING,
            LiteralKind::Lang(_) => vocab::RDF_LANG_STRING,
            LiteralKind::Typed(dt) => dt,
        }
    }
}

/// Object position of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(String),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            Term::Iri(_) => None,
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// A single statement. Subjects and predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Insertion-ordered set of triples.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// Convenience for `insert(Triple::new(..))`.
    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    pub fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.seen
            .contains(&Triple::new(subject, predicate, object.clone()))
    }

    /// All triples with the given subject, in insertion order.
    pub fn triples_for<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| t.subject == subject)
    }

    /// Objects of `(subject, predicate, ?)`, in insertion order.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects typed `skos:Concept`, in order of first appearance.
    pub fn concepts(&self) -> Vec<&str> {
        let concept = Term::iri(vocab::SKOS_CONCEPT);
        self.triples
            .iter()
            .filter(|t| t.predicate == vocab::RDF_TYPE && t.object == concept)
            .map(|t| t.subject.as_str())
            .collect()
    }
}
