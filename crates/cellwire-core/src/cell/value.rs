//! Cell value types

use std::fmt;

/// The value written to (or read from) a cell
///
/// Text starting with `=` is a formula; the [`From`] conversions for
/// strings apply that rule, so callers rarely construct
/// [`CellValue::Formula`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Plain text
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Formula, including the leading `=`
    Formula(String),
}

impl CellValue {
    /// Classify a string as text or formula
    pub fn from_text<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s.starts_with('=') {
            CellValue::Formula(s)
        } else {
            CellValue::Text(s)
        }
    }

    /// Check if this is a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellValue::Formula(_))
    }

    /// Get as number if this is numeric
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice if this is text or a formula
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) | CellValue::Formula(s) => Some(s),
            _ => None,
        }
    }

    /// Get as boolean if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) | CellValue::Formula(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::from_text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}
