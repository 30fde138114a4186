//! Cell address and range types

use crate::error::{Error, Result};
use crate::MAX_COLUMN;
use std::fmt;
use std::str::FromStr;

/// A possibly partial A1-style reference (e.g. "B12", "B", "12")
///
/// Either half may be missing: "ZZZ" is a pure-column reference and
/// "12" a pure-row reference. Both indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Column index (A=0, Z=25, AA=26, ...), if the reference has letters
    pub col: Option<u32>,
    /// Row index (0-based), if the reference has digits
    pub row: Option<u32>,
}

impl CellRef {
    /// Parse an A1-style reference where either half may be absent
    ///
    /// # Examples
    /// ```
    /// use cellwire_core::CellRef;
    ///
    /// let r = CellRef::parse("AB10").unwrap();
    /// assert_eq!((r.col, r.row), (Some(27), Some(9)));
    ///
    /// let r = CellRef::parse("zzz").unwrap();
    /// assert_eq!((r.col, r.row), (Some(18277), None));
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::malformed("empty address"));
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(Error::malformed(format!(
                "unexpected character '{}' in '{}'",
                bad, s
            )));
        }

        let split = s
            .bytes()
            .position(|b| !b.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::malformed(format!(
                "letters after row number in '{}'",
                s
            )));
        }

        let col = if letters.is_empty() {
            None
        } else {
            Some(letters_to_column(letters)?)
        };

        let row = if digits.is_empty() {
            None
        } else {
            let row: u32 = digits
                .parse()
                .map_err(|_| Error::malformed(format!("invalid row number in '{}'", s)))?;
            // Rows are 1-based in text
            if row == 0 {
                return Err(Error::malformed(format!(
                    "row number must be >= 1 in '{}'",
                    s
                )));
            }
            Some(row - 1)
        };

        Ok(Self { col, row })
    }

    /// The full cell address, if both halves are present
    pub fn to_address(self) -> Option<CellAddress> {
        match (self.col, self.row) {
            (Some(col), Some(row)) => Some(CellAddress::new(col, row)),
            _ => None,
        }
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(col) = self.col {
            f.write_str(&column_to_letters(col))?;
        }
        if let Some(row) = self.row {
            write!(f, "{}", u64::from(row) + 1)?;
        }
        Ok(())
    }
}

impl FromStr for CellRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A cell address (e.g., "A1")
///
/// The textual form is always derived from the indices, so the two
/// representations cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row index (0-based internally, 1-based in display)
    ///
    /// Declared first so the derived ordering is row-major.
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., ZZZ=18277)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address from 0-based column and row indices
    pub const fn new(col: u32, row: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use cellwire_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("b2").unwrap();
    /// assert_eq!(addr, CellAddress::new(1, 1));
    /// assert_eq!(addr.to_string(), "B2");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let r = CellRef::parse(s)?;
        match (r.col, r.row) {
            (Some(col), Some(row)) => Ok(Self::new(col, row)),
            (None, _) => Err(Error::malformed(format!("no column letters in '{}'", s))),
            (_, None) => Err(Error::malformed(format!("no row number in '{}'", s))),
        }
    }

    /// Address shifted by a column and row offset, or `None` past `u32::MAX`
    pub fn offset(&self, cols: u32, rows: u32) -> Option<Self> {
        Some(Self::new(
            self.col.checked_add(cols)?,
            self.row.checked_add(rows)?,
        ))
    }

    /// Format as A1-style string, rejecting columns beyond "ZZZ"
    pub fn to_a1_string(&self) -> Result<String> {
        encode(self.col, self.row)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letters(self.col), u64::from(self.row) + 1)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Decode an A1-style reference into `(column, row)`
///
/// The row is `None` for pure-column references such as "ZZZ".
pub fn decode(s: &str) -> Result<(Option<u32>, Option<u32>)> {
    let r = CellRef::parse(s)?;
    Ok((r.col, r.row))
}

/// Encode 0-based `(column, row)` indices as an A1-style address
///
/// ```
/// assert_eq!(cellwire_core::cell::encode(27, 9).unwrap(), "AB10");
/// ```
pub fn encode(col: u32, row: u32) -> Result<String> {
    if col > MAX_COLUMN {
        return Err(Error::ColumnOutOfBounds(col));
    }
    Ok(CellAddress::new(col, row).to_string())
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = u64::from(col) + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::malformed("empty column letters"));
    }

    let mut col: u64 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::malformed(format!("invalid column letter '{}'", c)));
        }
        col = col
            .saturating_mul(26)
            .saturating_add(u64::from(c.to_ascii_uppercase() as u8 - b'A' + 1));
    }

    let col = col - 1; // Convert to 0-based

    if col > u64::from(MAX_COLUMN) {
        return Err(Error::ColumnOutOfBounds(
            u32::try_from(col).unwrap_or(u32::MAX),
        ));
    }

    Ok(col as u32)
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right, inclusive)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalized so `start` is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.col.min(end.col), start.row.min(end.row)),
            end: CellAddress::new(start.col.max(end.col), start.row.max(end.row)),
        }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        match s.split_once(':') {
            Some((start, end)) => Ok(Self::new(
                CellAddress::parse(start)?,
                CellAddress::parse(end)?,
            )),
            None => {
                let addr = CellAddress::parse(s)?;
                Ok(Self::new(addr, addr))
            }
        }
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end.col - self.start.col + 1
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}:{}", self.start, self.end)
        }
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
