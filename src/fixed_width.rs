//! # Fixed-width field helpers
//!
//! Small, allocation-free accessors used by every fixed-width decoder of the crate
//! (cross-reference tables and the Hipparcos catalog).
//!
//! ## Conventions
//! -----------------
//! * Ranges are **0-based, end-exclusive byte ranges**.
//! * A range that runs past the end of the line is clamped, so a short line yields a
//!   shorter (possibly empty) field instead of a panic.
//! * A field made only of whitespace is **blank**. Optional numeric fields decode a blank
//!   field to `None`; required fields turn it into [`AstrocatError::ParseError`].
//!
//! ## Encoding
//! -----------------
//! [`right_justify`] and [`encode_optional`] apply the inverse rules (right-justified,
//! space padded, blank for `None`). They build the Hipparcos lookup patterns and let
//! callers reproduce the raw identifier columns of a decoded record.
use std::ops::Range;
use std::str::FromStr;

use crate::astrocat_errors::AstrocatError;

/// Extract a fixed byte range from a line, clamped to the line length.
///
/// A range that splits a multibyte character is a [`AstrocatError::ParseError`] on
/// `field`, never an empty field.
pub fn column<'a>(
    line: &'a str,
    range: Range<usize>,
    field: &'static str,
) -> Result<&'a str, AstrocatError> {
    let end = range.end.min(line.len());
    let start = range.start.min(end);
    std::str::from_utf8(&line.as_bytes()[start..end])
        .map_err(|_| AstrocatError::parse(line, field))
}

/// `true` when the field holds nothing but whitespace (or nothing at all).
pub fn is_blank(field: &str) -> bool {
    field.trim().is_empty()
}

/// Decode an optional numeric field.
///
/// Arguments
/// -----------------
/// * `line` – The full record, reported in the error on failure.
/// * `range` – Byte range of the field.
/// * `field` – Field name reported in the error on failure.
///
/// Return
/// ----------
/// * `Ok(None)` when the field is blank.
/// * `Ok(Some(value))` when the trimmed field parses.
/// * [`AstrocatError::ParseError`] when the field is neither blank nor a valid number.
pub fn optional<T: FromStr>(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<Option<T>, AstrocatError> {
    let raw = column(line, range, field)?;
    if is_blank(raw) {
        return Ok(None);
    }
    raw.trim()
        .parse()
        .map(Some)
        .map_err(|_| AstrocatError::parse(line, field))
}

/// Decode a required numeric field; blank and malformed fields are both errors.
pub fn required<T: FromStr>(
    line: &str,
    range: Range<usize>,
    field: &'static str,
) -> Result<T, AstrocatError> {
    optional(line, range, field)?.ok_or_else(|| AstrocatError::parse(line, field))
}

/// Right-justify `value` in a field of `width` bytes, padding with spaces.
///
/// Values longer than `width` are returned unchanged.
pub fn right_justify(value: &str, width: usize) -> String {
    format!("{value:>width$}")
}

/// Encode an optional integer the way the catalogs store it: right-justified, or all
/// blanks when absent.
pub fn encode_optional(value: Option<u32>, width: usize) -> String {
    match value {
        Some(v) => right_justify(&v.to_string(), width),
        None => " ".repeat(width),
    }
}
