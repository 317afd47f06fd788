//! Validity date parsing for the `start` and `end` columns.
//!
//! Dates are written `dd/mm/yyyy`. Anything else, including impossible
//! calendar dates such as `31/02/2020`, yields `None` and the caller omits
//! the edge.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::defaults;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("date shape regex is valid")
});

/// Parse a `dd/mm/yyyy` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        debug!(value, "Date does not match dd/mm/yyyy, omitted");
        return None;
    }
    match NaiveDate::parse_from_str(value, defaults::DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(value, error = %e, "Invalid calendar date, omitted");
            None
        }
    }
}

/// Lexical form of an `xsd:date` literal.
pub fn to_xsd_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
