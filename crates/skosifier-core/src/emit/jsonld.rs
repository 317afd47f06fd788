//! JSON-LD: one node object per subject under `@graph`.
//!
//! Predicates and types are compacted against the `@context` prefixes; every
//! value is written as an array of value/node objects so consumers never
//! have to distinguish single from multiple values.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};

use crate::emit::GraphWriter;
use crate::graph::{LiteralKind, Term, Triple};
use crate::vocab;

/// JSON-LD document with a prefix-only context.
#[derive(Debug, Clone, Serialize)]
pub struct JsonLdDocument {
    #[serde(rename = "@context")]
    pub context: BTreeMap<&'static str, &'static str>,
    #[serde(rename = "@graph")]
    pub graph: Vec<Map<String, JsonValue>>,
}

impl JsonLdDocument {
    pub fn from_triples(triples: &[&Triple]) -> Self {
        let mut nodes: Vec<(&str, Map<String, JsonValue>)> = Vec::new();
        for &triple in triples {
            let idx = match nodes.iter().position(|(s, _)| *s == triple.subject) {
                Some(idx) => idx,
                None => {
                    let mut node = Map::new();
                    node.insert("@id".to_string(), json!(triple.subject));
                    nodes.push((triple.subject.as_str(), node));
                    nodes.len() - 1
                }
            };
            let node = &mut nodes[idx].1;

            let (key, value) = match (&triple.object, triple.predicate.as_str()) {
                (Term::Iri(iri), vocab::RDF_TYPE) => ("@type".to_string(), json!(compact(iri))),
                (object, predicate) => (compact(predicate), value_object(object)),
            };
            if let Some(values) = node
                .entry(key)
                .or_insert_with(|| JsonValue::Array(Vec::new()))
                .as_array_mut()
            {
                values.push(value);
            }
        }

        Self {
            context: vocab::PREFIXES.into_iter().collect(),
            graph: nodes.into_iter().map(|(_, node)| node).collect(),
        }
    }
}

/// Writer producing a pretty-printed [`JsonLdDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLdWriter;

impl GraphWriter for JsonLdWriter {
    fn write(&self, triples: &[&Triple], out: &mut dyn Write) -> io::Result<()> {
        let doc = JsonLdDocument::from_triples(triples);
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)
    }
}

fn compact(iri: &str) -> String {
    vocab::compact(iri).unwrap_or_else(|| iri.to_string())
}

fn value_object(term: &Term) -> JsonValue {
    match term {
        Term::Iri(iri) => json!({ "@id": iri }),
        Term::Literal(lit) => match &lit.kind {
            LiteralKind::Plain => json!({ "@value": lit.value }),
            LiteralKind::Lang(lang) => json!({ "@value": lit.value, "@language": lang }),
            LiteralKind::Typed(dt) => json!({ "@value": lit.value, "@type": compact(dt) }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Literal;

    #[test]
    fn test_document_shape() {
        let a = "http://ex.org/A";
        let triples = [
            Triple::new(a, vocab::RDF_TYPE, Term::iri(vocab::SKOS_CONCEPT)),
            Triple::new(a, vocab::SKOS_PREF_LABEL, Literal::lang("Alpha", "nl").into()),
            Triple::new(a, vocab::SKOS_PREF_LABEL, Literal::lang("Alpha-fr", "fr").into()),
            Triple::new(a, vocab::SKOS_BROADER, Term::iri("http://ex.org/R")),
        ];
        let refs: Vec<&Triple> = triples.iter().collect();
        let doc = serde_json::to_value(JsonLdDocument::from_triples(&refs)).unwrap();

        assert_eq!(doc["@context"]["skos"], vocab::SKOS_NS);
        let node = &doc["@graph"][0];
        assert_eq!(node["@id"], a);
        assert_eq!(node["@type"], json!(["skos:Concept"]));
        assert_eq!(
            node["skos:prefLabel"],
            json!([
                { "@value": "Alpha", "@language": "nl" },
                { "@value": "Alpha-fr", "@language": "fr" }
            ])
        );
        assert_eq!(node["skos:broader"], json!([{ "@id": "http://ex.org/R" }]));
    }

    #[test]
    fn test_typed_literal_and_full_iri_predicate() {
        let a = "http://ex.org/A";
        let triples = [
            Triple::new(
                a,
                vocab::SCHEMA_END_DATE,
                Literal::typed("2020-12-31", vocab::XSD_DATE).into(),
            ),
            Triple::new(a, "http://purl.org/dc/terms/source", Literal::plain("x").into()),
        ];
        let refs: Vec<&Triple> = triples.iter().collect();
        let doc = serde_json::to_value(JsonLdDocument::from_triples(&refs)).unwrap();
        let node = &doc["@graph"][0];
        assert_eq!(
            node["schema:endDate"],
            json!([{ "@value": "2020-12-31", "@type": "xsd:date" }])
        );
        assert_eq!(
            node["http://purl.org/dc/terms/source"],
            json!([{ "@value": "x" }])
        );
    }

    #[test]
    fn test_writer_emits_valid_json() {
        let triple = Triple::new("http://ex.org/A", vocab::SKOS_NOTATION, Literal::plain("A").into());
        let mut buf = Vec::new();
        JsonLdWriter.write(&[&triple], &mut buf).unwrap();
        let parsed: JsonValue = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed["@graph"].as_array().unwrap().len(), 1);
    }
}
