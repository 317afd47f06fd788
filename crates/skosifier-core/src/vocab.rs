//! Namespaces and term IRIs used by the generated taxonomy.
//!
//! # Standards
//!
//! - W3C SKOS Reference: https://www.w3.org/TR/skos-reference/
//! - OWL 2 (`owl:sameAs`): https://www.w3.org/TR/owl2-syntax/
//! - schema.org validity dates: https://schema.org/startDate

use serde::{Deserialize, Serialize};

// =============================================================================
// NAMESPACES
// =============================================================================

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const SKOS_NS: &str = "http://www.w3.org/2004/02/skos/core#";
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";
pub const SCHEMA_NS: &str = "http://schema.org/";

/// Prefixes declared by every output syntax that supports them, in output order.
pub const PREFIXES: [(&str, &str); 5] = [
    ("rdf", RDF_NS),
    ("skos", SKOS_NS),
    ("xsd", XSD_NS),
    ("owl", OWL_NS),
    ("schema", SCHEMA_NS),
];

// =============================================================================
// TERMS
// =============================================================================

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

pub const SKOS_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#Concept";
pub const SKOS_CONCEPT_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#ConceptScheme";
pub const SKOS_NOTATION: &str = "http://www.w3.org/2004/02/skos/core#notation";
pub const SKOS_BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
pub const SKOS_NARROWER: &str = "http://www.w3.org/2004/02/skos/core#narrower";
pub const SKOS_TOP_CONCEPT_OF: &str = "http://www.w3.org/2004/02/skos/core#topConceptOf";
pub const SKOS_HAS_TOP_CONCEPT: &str = "http://www.w3.org/2004/02/skos/core#hasTopConcept";
pub const SKOS_IN_SCHEME: &str = "http://www.w3.org/2004/02/skos/core#inScheme";
pub const SKOS_PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
pub const SKOS_ALT_LABEL: &str = "http://www.w3.org/2004/02/skos/core#altLabel";
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
pub const SKOS_SCOPE_NOTE: &str = "http://www.w3.org/2004/02/skos/core#scopeNote";
pub const SKOS_EXACT_MATCH: &str = "http://www.w3.org/2004/02/skos/core#exactMatch";
pub const SKOS_CLOSE_MATCH: &str = "http://www.w3.org/2004/02/skos/core#closeMatch";
pub const SKOS_BROAD_MATCH: &str = "http://www.w3.org/2004/02/skos/core#broadMatch";
pub const SKOS_NARROW_MATCH: &str = "http://www.w3.org/2004/02/skos/core#narrowMatch";

pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

pub const SCHEMA_START_DATE: &str = "http://schema.org/startDate";
pub const SCHEMA_END_DATE: &str = "http://schema.org/endDate";

pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

// =============================================================================
// CROSS-REFERENCE PROPERTIES
// =============================================================================

/// Typed link from a concept to a term in an external vocabulary.
///
/// A column whose header starts (case-insensitively) with
/// [`LinkProperty::header_prefix`] carries links of that type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkProperty {
    /// `owl:sameAs` - The two IRIs denote the same thing.
    SameAs,

    /// `skos:exactMatch` - Interchangeable concepts.
    ExactMatch,

    /// `skos:closeMatch` - Similar enough for some applications.
    CloseMatch,

    /// `skos:broadMatch` - Broader concept in the external vocabulary.
    BroadMatch,

    /// `skos:narrowMatch` - Narrower concept in the external vocabulary.
    NarrowMatch,
}

impl LinkProperty {
    pub const ALL: [LinkProperty; 5] = [
        Self::SameAs,
        Self::ExactMatch,
        Self::CloseMatch,
        Self::BroadMatch,
        Self::NarrowMatch,
    ];

    /// Header prefix selecting this property (compared case-insensitively).
    pub fn header_prefix(&self) -> &'static str {
        match self {
            Self::SameAs => "sameAs",
            Self::ExactMatch => "exactMatch",
            Self::CloseMatch => "closeMatch",
            Self::BroadMatch => "broadMatch",
            Self::NarrowMatch => "narrowMatch",
        }
    }

    /// Predicate IRI.
    pub fn iri(&self) -> &'static str {
        match self {
            Self::SameAs => OWL_SAME_AS,
            Self::ExactMatch => SKOS_EXACT_MATCH,
            Self::CloseMatch => SKOS_CLOSE_MATCH,
            Self::BroadMatch => SKOS_BROAD_MATCH,
            Self::NarrowMatch => SKOS_NARROW_MATCH,
        }
    }
}

impl std::fmt::Display for LinkProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SameAs => write!(f, "same_as"),
            Self::ExactMatch => write!(f, "exact_match"),
            Self::CloseMatch => write!(f, "close_match"),
            Self::BroadMatch => write!(f, "broad_match"),
            Self::NarrowMatch => write!(f, "narrow_match"),
        }
    }
}

impl std::str::FromStr for LinkProperty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same_as" | "sameas" => Ok(Self::SameAs),
            "exact_match" | "exactmatch" => Ok(Self::ExactMatch),
            "close_match" | "closematch" => Ok(Self::CloseMatch),
            "broad_match" | "broadmatch" => Ok(Self::BroadMatch),
            "narrow_match" | "narrowmatch" => Ok(Self::NarrowMatch),
            _ => Err(format!("Invalid link property: {}", s)),
        }
    }
}

/// Shorten `iri` to `prefix:local` if it falls in one of [`PREFIXES`] and the
/// local part is a safe prefixed-name local part.
pub fn compact(iri: &str) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        let safe = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            && local.starts_with(|c: char| c.is_ascii_alphabetic());
        safe.then(|| format!("{}:{}", prefix, local))
    })
}
