//! Header classification: maps each column header to the role its values play.
//!
//! Classification is a pure function of the header row, computed once per
//! run. The assembler dispatches on [`ColumnRole`] and never looks at header
//! text again, except for [`ColumnRole::LiteralProperty`] which carries it.
//!
//! # Precedence
//!
//! For every column after the identifier and parent, the first matching rule
//! wins:
//!
//! 1. exact language code (`nl`) gives a preferred label
//! 2. `alt_<lang>` gives an alternate label
//! 3. `def_<lang>` gives a definition
//! 4. `scope_<lang>` gives a scope note
//! 5. `start` / `end` give the validity interval
//! 6. case-insensitive cross-reference prefix (`exactMatch...`) gives a typed link
//! 7. `http...` gives a literal property named by the header itself, if the
//!    header is an absolute IRI
//! 8. anything else is ignored

use serde::Serialize;
use tracing::{debug, warn};

use crate::defaults;
use crate::row::{ID_COLUMN, PARENT_COLUMN};
use crate::scheme::is_absolute_iri;
use crate::vocab::LinkProperty;

/// Semantic role of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "arg", rename_all = "snake_case")]
pub enum ColumnRole {
    /// Concept identifier (column 0).
    Identifier,
    /// Parent identifier (column 1).
    Parent,
    /// `skos:prefLabel` in the given language.
    PrefLabel(String),
    /// `skos:altLabel` in the given language.
    AltLabel(String),
    /// `skos:definition` in the given language.
    Definition(String),
    /// `skos:scopeNote` in the given language.
    ScopeNote(String),
    /// Start of the validity interval.
    ValidFrom,
    /// End of the validity interval.
    ValidUntil,
    /// Typed link to an external vocabulary term.
    Link(LinkProperty),
    /// Plain literal under the predicate IRI given by the header.
    LiteralProperty(String),
    /// Column contributes nothing to the graph.
    Ignored,
}

/// Classifier configured with the fixed set of label languages.
#[derive(Debug, Clone)]
pub struct HeaderClassifier {
    languages: Vec<String>,
    /// Link properties in match order: longest prefix first, then lexical.
    link_order: Vec<LinkProperty>,
}

impl Default for HeaderClassifier {
    fn default() -> Self {
        Self::new(defaults::LANGUAGES)
    }
}

impl HeaderClassifier {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut link_order = LinkProperty::ALL.to_vec();
        link_order.sort_by(|a, b| {
            b.header_prefix()
                .len()
                .cmp(&a.header_prefix().len())
                .then_with(|| a.header_prefix().cmp(b.header_prefix()))
        });
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            link_order,
        }
    }

    /// Role of a single header cell at a data position (index >= 2).
    pub fn classify_cell(&self, header: &str) -> ColumnRole {
        if let Some(lang) = self.language(header) {
            return ColumnRole::PrefLabel(lang);
        }
        if let Some(lang) = self.prefixed_language(header, defaults::ALT_PREFIX) {
            return ColumnRole::AltLabel(lang);
        }
        if let Some(lang) = self.prefixed_language(header, defaults::DEF_PREFIX) {
            return ColumnRole::Definition(lang);
        }
        if let Some(lang) = self.prefixed_language(header, defaults::SCOPE_PREFIX) {
            return ColumnRole::ScopeNote(lang);
        }
        if header == defaults::START_COLUMN {
            return ColumnRole::ValidFrom;
        }
        if header == defaults::END_COLUMN {
            return ColumnRole::ValidUntil;
        }
        if let Some(prop) = self.link_property(header) {
            return ColumnRole::Link(prop);
        }
        if header.starts_with(defaults::HTTP_PREFIX) && is_absolute_iri(header) {
            return ColumnRole::LiteralProperty(header.to_string());
        }
        ColumnRole::Ignored
    }

    /// Classify a whole header row.
    pub fn classify(&self, header: &[String]) -> ColumnRoles {
        let roles: Vec<ColumnRole> = header
            .iter()
            .enumerate()
            .map(|(idx, cell)| match idx {
                ID_COLUMN => ColumnRole::Identifier,
                PARENT_COLUMN => ColumnRole::Parent,
                _ => {
                    let role = self.classify_cell(cell);
                    if role == ColumnRole::Ignored && cell.starts_with(defaults::HTTP_PREFIX) {
                        warn!(
                            column = %cell,
                            index = idx,
                            "Property header is not an absolute IRI, column ignored"
                        );
                    } else if role == ColumnRole::Ignored {
                        warn!(column = %cell, index = idx, "Header matches no role, column ignored");
                    } else {
                        debug!(column = %cell, index = idx, ?role, "Classified column");
                    }
                    role
                }
            })
            .collect();
        ColumnRoles(roles)
    }

    fn language(&self, code: &str) -> Option<String> {
        self.languages.iter().find(|l| l.as_str() == code).cloned()
    }

    fn prefixed_language(&self, header: &str, prefix: &str) -> Option<String> {
        header
            .strip_prefix(prefix)
            .and_then(|code| self.language(code))
    }

    fn link_property(&self, header: &str) -> Option<LinkProperty> {
        self.link_order.iter().copied().find(|prop| {
            let prefix = prop.header_prefix();
            header.len() >= prefix.len()
                && header.is_char_boundary(prefix.len())
                && header[..prefix.len()].eq_ignore_ascii_case(prefix)
        })
    }
}

/// Roles for every column of a header, index-aligned with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRoles(Vec<ColumnRole>);

impl ColumnRoles {
    /// `(index, role)` pairs for the data columns (index >= 2).
    pub fn data_columns(&self) -> impl Iterator<Item = (usize, &ColumnRole)> {
        self.0
            .iter()
            .enumerate()
            .skip(PARENT_COLUMN + 1)
    }
}
