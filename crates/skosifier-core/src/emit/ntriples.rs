//! N-Triples: one statement per line, no prefixes.
//!
//! Besides the writer this module carries a reader for the subset of the
//! syntax the writer produces (IRIs and literals, no blank nodes), so that
//! emitted artifacts can be loaded back and compared.

use std::io::{self, Write};

use crate::emit::{escape_literal, GraphWriter};
use crate::error::{Error, Result};
use crate::graph::{Graph, Literal, LiteralKind, Term, Triple};
use crate::vocab;

/// Line-oriented N-Triples writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NTriplesWriter;

impl GraphWriter for NTriplesWriter {
    fn write(&self, triples: &[&Triple], out: &mut dyn Write) -> io::Result<()> {
        for triple in triples {
            writeln!(
                out,
                "<{}> <{}> {} .",
                triple.subject,
                triple.predicate,
                format_term(&triple.object)
            )?;
        }
        Ok(())
    }
}

pub(crate) fn format_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{}>", iri),
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_literal(&lit.value));
            match &lit.kind {
                LiteralKind::Plain => quoted,
                LiteralKind::Lang(lang) => format!("{}@{}", quoted, lang),
                LiteralKind::Typed(dt) => format!("{}^^<{}>", quoted, dt),
            }
        }
    }
}

/// Parse an N-Triples document into a graph.
pub fn parse(input: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let triple = parse_line(line).map_err(|message| Error::Syntax {
            line: idx + 1,
            message,
        })?;
        graph.insert(triple);
    }
    Ok(graph)
}

fn parse_line(line: &str) -> std::result::Result<Triple, String> {
    let mut cursor = Cursor { rest: line };
    let subject = cursor.iri()?;
    let predicate = cursor.iri()?;
    let object = cursor.object()?;
    cursor.skip_ws();
    match cursor.rest.strip_prefix('.') {
        Some(tail) if tail.trim().is_empty() || tail.trim_start().starts_with('#') => {
            Ok(Triple::new(subject, predicate, object))
        }
        _ => Err("expected '.' at end of statement".to_string()),
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn skip_ws(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn iri(&mut self) -> std::result::Result<String, String> {
        self.skip_ws();
        let body = self
            .rest
            .strip_prefix('<')
            .ok_or_else(|| "expected IRI".to_string())?;
        let end = body.find('>').ok_or_else(|| "unterminated IRI".to_string())?;
        self.rest = &body[end + 1..];
        Ok(body[..end].to_string())
    }

    fn object(&mut self) -> std::result::Result<Term, String> {
        self.skip_ws();
        if self.rest.starts_with('<') {
            return self.iri().map(Term::Iri);
        }
        if self.rest.starts_with('"') {
            return self.literal().map(Term::Literal);
        }
        Err("expected IRI or literal object".to_string())
    }

    fn literal(&mut self) -> std::result::Result<Literal, String> {
        let body = &self.rest[1..];
        let mut value = String::new();
        let mut chars = body.char_indices();
        let close = loop {
            let (pos, c) = chars
                .next()
                .ok_or_else(|| "unterminated literal".to_string())?;
            match c {
                '"' => break pos,
                '\\' => {
                    let (_, esc) = chars
                        .next()
                        .ok_or_else(|| "dangling escape".to_string())?;
                    match esc {
                        't' => value.push('\t'),
                        'b' => value.push('\u{8}'),
                        'n' => value.push('\n'),
                        'r' => value.push('\r'),
                        'f' => value.push('\u{c}'),
                        '"' => value.push('"'),
                        '\'' => value.push('\''),
                        '\\' => value.push('\\'),
                        'u' | 'U' => {
                            let width = if esc == 'u' { 4 } else { 8 };
                            let hex: String = chars.by_ref().take(width).map(|(_, h)| h).collect();
                            let code = u32::from_str_radix(&hex, 16)
                                .ok()
                                .filter(|_| hex.len() == width)
                                .and_then(char::from_u32)
                                .ok_or_else(|| format!("invalid unicode escape \\{}{}", esc, hex))?;
                            value.push(code);
                        }
                        other => return Err(format!("invalid escape \\{}", other)),
                    }
                }
                c => value.push(c),
            }
        };
        self.rest = &body[close + 1..];

        if let Some(tail) = self.rest.strip_prefix('@') {
            let len = tail
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                .unwrap_or(tail.len());
            if len == 0 {
                return Err("empty language tag".to_string());
            }
            self.rest = &tail[len..];
            return Ok(Literal::lang(value, &tail[..len]));
        }
        if let Some(tail) = self.rest.strip_prefix("^^") {
            self.rest = tail;
            let datatype = self.iri()?;
            if datatype == vocab::XSD_STRING {
                return Ok(Literal::plain(value));
            }
            return Ok(Literal::typed(value, datatype));
        }
        Ok(Literal::plain(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_one(triple: Triple) -> String {
        let mut buf = Vec::new();
        NTriplesWriter.write(&[&triple], &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_iri_object() {
        let line = write_one(Triple::new(
            "http://ex.org/A",
            vocab::RDF_TYPE,
            Term::iri(vocab::SKOS_CONCEPT),
        ));
        assert_eq!(
            line,
            "<http://ex.org/A> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2004/02/skos/core#Concept> .\n"
        );
    }

    #[test]
    fn test_write_language_literal() {
        let line = write_one(Triple::new(
            "http://ex.org/A",
            vocab::SKOS_PREF_LABEL,
            Literal::lang("Alpha \"quoted\"", "fr").into(),
        ));
        assert!(line.ends_with("\"Alpha \\\"quoted\\\"\"@fr .\n"));
    }

    #[test]
    fn test_write_typed_literal() {
        let line = write_one(Triple::new(
            "http://ex.org/A",
            vocab::SCHEMA_START_DATE,
            Literal::typed("2020-01-01", vocab::XSD_DATE).into(),
        ));
        assert!(line.contains("\"2020-01-01\"^^<http://www.w3.org/2001/XMLSchema#date>"));
    }

    #[test]
    fn test_parse_reads_back_escapes_and_tags() {
        let doc = "# comment\n\
            <http://ex.org/A> <http://www.w3.org/2004/02/skos/core#prefLabel> \"line\\nbreak \\u00E9\"@fr .\n\
            \n\
            <http://ex.org/A> <http://www.w3.org/2004/02/skos/core#notation> \"A\"^^<http://www.w3.org/2001/XMLSchema#string> .\n";
        let graph = parse(doc).unwrap();
        assert_eq!(graph.len(), 2);
        assert!(graph.contains(
            "http://ex.org/A",
            vocab::SKOS_PREF_LABEL,
            &Literal::lang("line\nbreak é", "fr").into()
        ));
        assert!(graph.contains(
            "http://ex.org/A",
            vocab::SKOS_NOTATION,
            &Literal::plain("A").into()
        ));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let doc = "<http://ex.org/A> <http://ex.org/p> <http://ex.org/B> .\n\
                   <http://ex.org/A> <http://ex.org/p> \"unterminated .\n";
        match parse(doc).unwrap_err() {
            Error::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected Syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_blank_nodes() {
        assert!(parse("_:b0 <http://ex.org/p> <http://ex.org/B> .\n").is_err());
    }

    #[test]
    fn test_parse_requires_terminating_dot() {
        assert!(parse("<http://ex.org/A> <http://ex.org/p> <http://ex.org/B>\n").is_err());
    }
}
