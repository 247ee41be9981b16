//! Fixed-width cell rendering
//!
//! Cells follow printf-style conversions:
//!
//! - integers: right-justified, space padded (`%8d`)
//! - floats: fixed precision, right-justified (`%9.4f`)
//! - text: left-justified and hard-truncated to the column width (`%-15s`)
//!
//! Widths count characters, not bytes. Text never widens a column; numbers
//! that do not fit keep all their digits, as printf does.

use crate::schema::{Column, ColumnKind};
use std::borrow::Cow;

/// Placeholder for unbound numeric columns
pub const NUMERIC_DEFAULT: i64 = -1;

/// Placeholder for unbound text columns
pub const TEXT_DEFAULT: &str = "-";

/// A value bound to one column of a row
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Free text
    Text(Cow<'a, str>),
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::text(s)
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

/// Schema default for a column that has no bound value
pub fn default_value(column: &Column) -> FieldValue<'static> {
    match column.kind {
        ColumnKind::Int => FieldValue::Int(NUMERIC_DEFAULT),
        ColumnKind::Float { .. } => FieldValue::Float(NUMERIC_DEFAULT as f64),
        ColumnKind::Text => FieldValue::text(TEXT_DEFAULT),
    }
}

/// Render the schema default of `column`
///
/// Float placeholders shed decimals until `-1` fits the column, so an
/// unbound `f4.2` prints `-1.0` rather than widening the row.
pub fn render_default(column: &Column) -> String {
    match column.kind {
        ColumnKind::Float { precision } => {
            let width = column.width;
            // sign, one digit and the decimal point
            let precision = precision.min(width.saturating_sub(3));
            if precision == 0 {
                format!("{:>width$}", NUMERIC_DEFAULT)
            } else {
                format!("{:>width$.precision$}", NUMERIC_DEFAULT as f64)
            }
        }
        _ => render_cell(column, &default_value(column)),
    }
}

/// Render one cell of `column`
///
/// The value is coerced to the column's declared type: integers bound to a
/// float column are printed with the column precision, floats bound to an
/// integer column are rounded, numbers bound to a text column are printed
/// in their shortest form.
pub fn render_cell(column: &Column, value: &FieldValue<'_>) -> String {
    let width = column.width;
    match column.kind {
        ColumnKind::Int => {
            let v = match value {
                FieldValue::Int(v) => *v,
                FieldValue::Float(v) => v.round() as i64,
                FieldValue::Text(_) => NUMERIC_DEFAULT,
            };
            format!("{:>width$}", v)
        }
        ColumnKind::Float { precision } => {
            let v = match value {
                FieldValue::Int(v) => *v as f64,
                FieldValue::Float(v) => *v,
                FieldValue::Text(_) => NUMERIC_DEFAULT as f64,
            };
            format!("{:>width$.precision$}", v)
        }
        ColumnKind::Text => {
            let raw: Cow<'_, str> = match value {
                FieldValue::Text(s) => Cow::Borrowed(s.as_ref()),
                FieldValue::Int(v) => Cow::Owned(v.to_string()),
                FieldValue::Float(v) => Cow::Owned(v.to_string()),
            };
            let flat = flatten_line_breaks(&raw);
            let cell = truncate_chars(&flat, width);
            format!("{:<width$}", cell)
        }
    }
}

/// Collapse every run of line breaks into a single space
pub fn flatten_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\n' || c == '\r' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    Cow::Owned(out)
}

/// Keep at most `width` characters of `text`
pub fn truncate_chars(text: &str, width: usize) -> Cow<'_, str> {
    match text.char_indices().nth(width) {
        Some((byte_idx, _)) => Cow::Owned(text[..byte_idx].to_string()),
        None => Cow::Borrowed(text),
    }
}
