//! Sheets of a spreadsheet and lookup by id or title

use crate::error::{Error, Result};
use std::fmt;

/// A sheet within a spreadsheet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sheet {
    pub id: i64,
    pub title: String,
}

impl Sheet {
    pub fn new<S: Into<String>>(id: i64, title: S) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {})", self.title, self.id)
    }
}

/// Find a sheet by id and/or title
///
/// Returns the first sheet in stored order whose id or title matches.
/// At least one selector must be given.
///
/// ```
/// use cellwire_core::{sheet, Sheet};
///
/// let sheets = [Sheet::new(0, "Sheet1"), Sheet::new(1, "Sheet2")];
/// assert_eq!(sheet::resolve(&sheets, None, Some("Sheet2")).unwrap().id, 1);
/// ```
pub fn resolve<'a>(sheets: &'a [Sheet], id: Option<i64>, title: Option<&str>) -> Result<&'a Sheet> {
    if id.is_none() && title.is_none() {
        return Err(Error::MissingSelector);
    }

    sheets
        .iter()
        .find(|s| id == Some(s.id) || title == Some(s.title.as_str()))
        .ok_or_else(|| Error::SheetNotFound(describe(id, title)))
}

fn describe(id: Option<i64>, title: Option<&str>) -> String {
    match (id, title) {
        (Some(id), Some(title)) => format!("id {id} or title '{title}'"),
        (Some(id), None) => format!("id {id}"),
        (None, Some(title)) => format!("title '{title}'"),
        (None, None) => String::new(),
    }
}

/// The sheets of one spreadsheet, in the order the service lists them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetIndex {
    sheets: Vec<Sheet>,
}

impl SheetIndex {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    /// See [`resolve`]
    pub fn resolve(&self, id: Option<i64>, title: Option<&str>) -> Result<&Sheet> {
        resolve(&self.sheets, id, title)
    }

    pub fn by_id(&self, id: i64) -> Result<&Sheet> {
        self.resolve(Some(id), None)
    }

    pub fn by_title(&self, title: &str) -> Result<&Sheet> {
        self.resolve(None, Some(title))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl From<Vec<Sheet>> for SheetIndex {
    fn from(sheets: Vec<Sheet>) -> Self {
        Self::new(sheets)
    }
}
