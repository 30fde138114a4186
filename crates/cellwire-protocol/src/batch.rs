//! Coalescing edited cells into rectangular update regions.

use cellwire_core::{Cell, CellAddress};

use crate::encode::encode_row;
use crate::error::{Error, Result};
use crate::wire::{GridCoordinate, Request, RowData, UpdateCellsRequest};

/// A run of column-contiguous cells in one row, already encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSegment {
    /// Address of the first (left-most) cell
    pub origin: CellAddress,
    pub payload: RowData,
}

impl RowSegment {
    /// Number of cells in the segment
    pub fn len(&self) -> usize {
        self.payload.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.values.is_empty()
    }

    /// Turn the segment into an `updateCells` request anchored at its origin
    pub fn into_request(self, sheet_id: i64, fields: &str) -> Request {
        Request::UpdateCells(UpdateCellsRequest {
            rows: vec![self.payload],
            fields: fields.to_string(),
            start: GridCoordinate::new(sheet_id, self.origin),
        })
    }
}

/// Group cells into the fewest row segments.
///
/// Cells are ordered row-major, then split wherever the row changes or
/// the next column is not exactly one past the previous one. Cells
/// themselves are never modified. Two cells with the same address land
/// in separate segments, in input order.
///
/// Fails with [`Error::EmptyBatch`] when given no cells.
pub fn coalesce<'a, I>(cells: I) -> Result<Vec<RowSegment>>
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut ordered: Vec<&Cell> = cells.into_iter().collect();
    if ordered.is_empty() {
        return Err(Error::EmptyBatch);
    }
    // Stable sort on (row, col), so duplicates keep their input order
    ordered.sort_by_key(|cell| cell.address);

    let mut segments = Vec::new();
    let mut run: Vec<&Cell> = Vec::new();
    for &cell in &ordered {
        if let Some(prev) = run.last() {
            let adjacent =
                prev.row() == cell.row() && prev.col().checked_add(1) == Some(cell.col());
            if !adjacent {
                segments.push(finish(&run));
                run.clear();
            }
        }
        run.push(cell);
    }
    segments.push(finish(&run));

    log::debug!(
        "coalesced {} cells into {} segments",
        ordered.len(),
        segments.len()
    );
    Ok(segments)
}

fn finish(run: &[&Cell]) -> RowSegment {
    RowSegment {
        origin: run[0].address,
        payload: encode_row(run.iter().copied()),
    }
}

/// Coalesce cells and wrap each segment in an `updateCells` request.
pub fn update_requests<'a, I>(cells: I, sheet_id: i64, fields: &str) -> Result<Vec<Request>>
where
    I: IntoIterator<Item = &'a Cell>,
{
    Ok(coalesce(cells)?
        .into_iter()
        .map(|segment| segment.into_request(sheet_id, fields))
        .collect())
}
