//! Plain HTML table views of the input rows.
//!
//! `index.html` lists every row; `html/<id>.html` holds a single row. The
//! pages mirror the input columns and know nothing about the graph.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::defaults;
use crate::error::{Error, Result};
use crate::row::Table;
use crate::scheme::sanitize;

/// Render the header and `rows` as a standalone HTML page.
pub fn render_table<'a>(header: &[String], rows: impl IntoIterator<Item = &'a [String]>) -> String {
    let mut page = String::from("<html>\n<body>\n<table>\n<tr>");
    for cell in header {
        page.push_str("<th>");
        page.push_str(&escape(cell));
        page.push_str("</th>");
    }
    page.push_str("</tr>\n");
    for row in rows {
        page.push_str("<tr>");
        for cell in row {
            page.push_str("<td>");
            page.push_str(&escape(cell));
            page.push_str("</td>");
        }
        page.push_str("</tr>\n");
    }
    page.push_str("</table>\n</body>\n</html>\n");
    page
}

/// Write `dir/index.html` with all rows.
#[instrument(skip(table), fields(subsystem = "html", op = "write_index"))]
pub fn write_index(table: &Table, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(defaults::HTML_INDEX);
    let page = render_table(table.header(), table.records().map(|r| r.fields()));
    fs::write(&path, page).map_err(|e| Error::output(&path, e))?;
    info!(path = %path.display(), row_count = table.len(), "Wrote HTML index");
    Ok(path)
}

/// Write `dir/html/<id>.html` for every row. Returns the number of pages.
#[instrument(skip(table), fields(subsystem = "html", op = "write_per_row"))]
pub fn write_per_row(table: &Table, dir: &Path) -> Result<usize> {
    let subdir = dir.join(defaults::HTML_DIR);
    fs::create_dir_all(&subdir).map_err(|e| Error::output(&subdir, e))?;
    for record in table.records() {
        let path = subdir.join(format!("{}.html", sanitize(record.id())));
        let page = render_table(table.header(), [record.fields()]);
        fs::write(&path, page).map_err(|e| Error::output(&path, e))?;
    }
    info!(path = %subdir.display(), file_count = table.len(), "Wrote HTML pages");
    Ok(table.len())
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
