//! Row model: the header plus rows of already-split text fields.
//!
//! Field 0 of every row is the identifier and field 1 the parent identifier.
//! An empty string is the "no value" marker in every position.

use crate::error::{Error, Result};

/// Column index of the identifier.
pub const ID_COLUMN: usize = 0;

/// Column index of the parent identifier.
pub const PARENT_COLUMN: usize = 1;

/// Header plus rows, shape-checked on construction.
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    lines: Vec<usize>,
}

impl Table {
    /// Build a table from rows that directly follow a one-line header, so
    /// row `i` sits on line `i + 2`.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let numbered = rows
            .into_iter()
            .enumerate()
            .map(|(idx, fields)| (idx + 2, fields))
            .collect();
        Self::with_lines(header, numbered)
    }

    /// Build a table from `(line, fields)` pairs, where `line` is the
    /// one-based input line the row starts on. Rejects rows whose length
    /// differs from the header.
    pub fn with_lines(header: Vec<String>, rows: Vec<(usize, Vec<String>)>) -> Result<Self> {
        if header.len() <= PARENT_COLUMN {
            return Err(Error::Header(format!(
                "expected at least identifier and parent columns, found {}",
                header.len()
            )));
        }
        for (line, row) in &rows {
            if row.len() != header.len() {
                return Err(Error::RowLength {
                    line: *line,
                    expected: header.len(),
                    found: row.len(),
                });
            }
        }
        let (lines, rows) = rows.into_iter().unzip();
        Ok(Self {
            header,
            rows,
            lines,
        })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records in input order.
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.lines
            .iter()
            .zip(&self.rows)
            .map(|(&line, fields)| Record { line, fields })
    }
}

/// Borrowed view of one row.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    line: usize,
    fields: &'a [String],
}

impl<'a> Record<'a> {
    /// One-based line in the input file.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn id(&self) -> &'a str {
        &self.fields[ID_COLUMN]
    }

    pub fn parent(&self) -> &'a str {
        &self.fields[PARENT_COLUMN]
    }

    /// Field at `index`; panics if out of the header's bounds.
    pub fn field(&self, index: usize) -> &'a str {
        &self.fields[index]
    }

    pub fn fields(&self) -> &'a [String] {
        self.fields
    }
}
