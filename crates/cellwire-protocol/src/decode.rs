//! Inbound mapping: grid snapshots to addressed cells.

use cellwire_core::{
    BorderLineStyle, BorderSet, BorderSide, Cell, CellAddress, CellValue, Color, TextStyle,
};
use serde_json::{Map, Value};

use crate::color::color_from_literal;
use crate::search::{self, SearchHits};

/// Fields pulled out of each wire cell, wherever they are nested.
const FORMAT_KEYS: [&str; 11] = [
    "note",
    "formattedValue",
    "backgroundColor",
    "foregroundColor",
    "fontFamily",
    "fontSize",
    "bold",
    "italic",
    "underline",
    "strikethrough",
    "borders",
];

const VALUE_KINDS: [&str; 4] = ["numberValue", "stringValue", "boolValue", "formulaValue"];

/// Decode a grid snapshot into cells, lazily.
///
/// `root` is either a grid (`{"rowData": [...]}` or `{"rows": [...]}`)
/// or a response holding grids under `data`. Each grid is anchored at
/// `origin`; every object slot of every row yields one cell addressed
/// `origin + (column offset, row offset)`; slots whose address would
/// pass `u32::MAX` are dropped. Rows without `values` count as empty
/// rows. The iterator makes one pass; decode again to re-read.
pub fn decode_grid<'a>(root: &'a Value, origin: CellAddress) -> impl Iterator<Item = Cell> + 'a {
    grids(root).into_iter().flat_map(move |grid| {
        list(grid, &["rowData", "rows"])
            .enumerate()
            .flat_map(move |(r, row)| {
                list(row, &["values"])
                    .enumerate()
                    .filter_map(move |(c, slot)| {
                        let address =
                            origin.offset(u32::try_from(c).ok()?, u32::try_from(r).ok()?)?;
                        decode_cell(slot, address)
                    })
            })
    })
}

/// Decode a single wire cell object.
///
/// Returns `None` if `slot` is not an object. Missing fields take the
/// same defaults as a freshly built [`Cell`].
pub fn decode_cell(slot: &Value, address: CellAddress) -> Option<Cell> {
    if !slot.is_object() {
        log::debug!("skipping non-object cell slot at {address}");
        return None;
    }

    let hits = search::find(&FORMAT_KEYS, slot);
    let mut cell = Cell::at(address);

    cell.value = decode_value(slot);
    cell.note = hits.str("note").map(str::to_string);
    cell.formatted_value = hits.get("formattedValue").and_then(scalar_text);
    cell.background = wire_color(&hits, "backgroundColor").unwrap_or(Color::WHITE);
    cell.text = TextStyle {
        family: hits
            .str("fontFamily")
            .filter(|f| !f.is_empty())
            .unwrap_or(TextStyle::DEFAULT_FAMILY)
            .to_string(),
        size: hits
            .u64("fontSize")
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0)
            .unwrap_or(TextStyle::DEFAULT_SIZE),
        bold: hits.bool("bold").unwrap_or(false),
        italic: hits.bool("italic").unwrap_or(false),
        strikethrough: hits.bool("strikethrough").unwrap_or(false),
        underline: hits.bool("underline").unwrap_or(false),
        color: wire_color(&hits, "foregroundColor").unwrap_or(Color::BLACK),
    };
    if let Some(borders) = hits.get("borders").and_then(Value::as_object) {
        cell.borders = decode_borders(borders);
    }

    Some(cell)
}

/// Grids under `data`, or `root` itself when it is a grid.
fn grids(root: &Value) -> Vec<&Value> {
    if root.get("rowData").is_some() || root.get("rows").is_some() {
        return vec![root];
    }
    match search::find(&["data"], root).get("data") {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(grid @ Value::Object(_)) => vec![grid],
        _ => Vec::new(),
    }
}

/// Items of the first array found under one of `keys`
fn list<'a>(node: &'a Value, keys: &[&str]) -> impl Iterator<Item = &'a Value> + 'a {
    keys.iter()
        .find_map(|k| node.get(*k).and_then(Value::as_array))
        .into_iter()
        .flatten()
}

/// First populated value kind wins; an empty string is no value.
fn decode_value(slot: &Value) -> Option<CellValue> {
    let hits = search::find(&["userEnteredValue"], slot);
    let kinds = hits.get("userEnteredValue")?.as_object()?;

    let value = kinds.iter().find_map(|(kind, v)| match (kind.as_str(), v) {
        ("numberValue", Value::Number(n)) => n.as_f64().map(CellValue::Number),
        ("stringValue", Value::String(s)) => Some(CellValue::Text(s.clone())),
        ("boolValue", Value::Bool(b)) => Some(CellValue::Bool(*b)),
        ("formulaValue", Value::String(s)) => Some(CellValue::Formula(s.clone())),
        (other, _) => {
            if !VALUE_KINDS.contains(&other) {
                log::debug!("ignoring value kind '{other}'");
            }
            None
        }
    })?;

    match &value {
        CellValue::Text(s) if s.is_empty() => None,
        _ => Some(value),
    }
}

fn scalar_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn wire_color(hits: &SearchHits<'_>, key: &str) -> Option<Color> {
    let value = hits.get(key)?;
    match color_from_literal(value) {
        Ok(color) => Some(color),
        Err(e) => {
            log::debug!("ignoring {key}: {e}");
            None
        }
    }
}

fn decode_borders(borders: &Map<String, Value>) -> BorderSet {
    let side = |name: &str| {
        borders
            .get(name)
            .and_then(Value::as_object)
            .map(decode_side)
            .unwrap_or_default()
    };
    BorderSet {
        top: side("top"),
        bottom: side("bottom"),
        left: side("left"),
        right: side("right"),
    }
}

fn decode_side(side: &Map<String, Value>) -> BorderSide {
    let style = side.get("style").and_then(Value::as_str).and_then(|name| {
        let style = BorderLineStyle::from_name(name);
        if style.is_none() {
            log::debug!("unrecognized border style '{name}'");
        }
        style
    });
    BorderSide {
        style,
        width: side
            .get("width")
            .and_then(Value::as_u64)
            .and_then(|w| u8::try_from(w).ok()),
        color: side.get("color").and_then(|c| color_from_literal(c).ok()),
    }
}
