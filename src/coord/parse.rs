//! Coordinate text parsing
//!
//! Accepts one coordinate per line in any of these forms:
//!
//! ```text
//! 40.7128, -74.0060
//! [40.7128, -74.0060]
//! (40.7128, -74.0060)
//! ```
//!
//! Blank lines are skipped. Parsing is all-or-nothing: the first bad line
//! aborts with a `FormatError` naming it.

use crate::coord::{CoordinateSet, Coordinates};
use crate::error::{Error, FormatError, Result};
use tracing::debug;

/// Parse free-form text into a non-empty `CoordinateSet`
///
/// # Errors
/// * `Error::Format` for the first malformed line
/// * `Error::EmptyInput` when the text has no non-blank lines
pub fn parse_coordinates(input: &str) -> Result<CoordinateSet> {
    let mut coords = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        coords.push(parse_line(line, index + 1)?);
    }

    debug!(points = coords.len(), "parsed coordinate input");

    if coords.is_empty() {
        return Err(Error::EmptyInput);
    }
    CoordinateSet::new(coords)
}

/// Parse a single trimmed, non-empty line
pub(crate) fn parse_line(
    line: &str,
    line_number: usize,
) -> std::result::Result<Coordinates, FormatError> {
    let fail = |reason: String| FormatError {
        line_number,
        line: line.to_string(),
        reason,
    };

    let body = strip_brackets(line);
    let fields: Vec<&str> = body.split(',').collect();
    if fields.len() != 2 {
        return Err(fail(format!(
            "expected 2 comma-separated values, found {}",
            fields.len()
        )));
    }

    let lat = parse_number(fields[0]).map_err(&fail)?;
    let lng = parse_number(fields[1]).map_err(&fail)?;

    Ok(Coordinates::new(lat, lng))
}

/// Remove one matched pair of surrounding `[...]` or `(...)`
fn strip_brackets(line: &str) -> &str {
    for (open, close) in [('[', ']'), ('(', ')')] {
        if let Some(inner) = line
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            return inner;
        }
    }
    line
}

fn parse_number(field: &str) -> std::result::Result<f64, String> {
    let field = field.trim();
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("'{}' is not a finite number", field)),
        Err(_) => Err(format!("'{}' is not a number", field)),
    }
}
