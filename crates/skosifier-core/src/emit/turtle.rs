//! Turtle: prefixed, grouped by subject and predicate.

use std::io::{self, Write};

use crate::emit::{escape_literal, GraphWriter};
use crate::graph::{LiteralKind, Term, Triple};
use crate::vocab;

/// Compact Turtle writer. Always declares [`vocab::PREFIXES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TurtleWriter;

impl GraphWriter for TurtleWriter {
    fn write(&self, triples: &[&Triple], out: &mut dyn Write) -> io::Result<()> {
        for (prefix, ns) in vocab::PREFIXES {
            writeln!(out, "@prefix {}: <{}> .", prefix, ns)?;
        }

        for (subject, predicates) in group(triples) {
            writeln!(out)?;
            writeln!(out, "<{}>", subject)?;
            let last = predicates.len() - 1;
            for (i, (predicate, objects)) in predicates.iter().enumerate() {
                let objects: Vec<String> = objects.iter().copied().map(format_object).collect();
                writeln!(
                    out,
                    "    {} {} {}",
                    format_predicate(predicate),
                    objects.join(", "),
                    if i == last { "." } else { ";" }
                )?;
            }
        }
        Ok(())
    }
}

type PredicateObjects<'a> = Vec<(&'a str, Vec<&'a Term>)>;

/// Subjects and their predicates, both in order of first appearance.
fn group<'a>(triples: &[&'a Triple]) -> Vec<(&'a str, PredicateObjects<'a>)> {
    let mut groups: Vec<(&'a str, PredicateObjects<'a>)> = Vec::new();
    for &triple in triples {
        let idx = match groups.iter().position(|(s, _)| *s == triple.subject) {
            Some(idx) => idx,
            None => {
                groups.push((triple.subject.as_str(), Vec::new()));
                groups.len() - 1
            }
        };
        let predicates = &mut groups[idx].1;
        match predicates.iter_mut().find(|(p, _)| *p == triple.predicate) {
            Some((_, objects)) => objects.push(&triple.object),
            None => predicates.push((triple.predicate.as_str(), vec![&triple.object])),
        }
    }
    groups
}

fn format_iri(iri: &str) -> String {
    vocab::compact(iri).unwrap_or_else(|| format!("<{}>", iri))
}

fn format_predicate(predicate: &str) -> String {
    if predicate == vocab::RDF_TYPE {
        "a".to_string()
    } else {
        format_iri(predicate)
    }
}

fn format_object(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format_iri(iri),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_literal(&lit.value));
            match &lit.kind {
                LiteralKind::Plain => quoted,
                LiteralKind::Lang(lang) => format!("{}@{}", quoted, lang),
                LiteralKind::Typed(dt) => format!("{}^^{}", quoted, format_iri(dt)),
            }
        }
    }
}
