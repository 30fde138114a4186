//! Key search over nested wire objects.
//!
//! The service nests the same field names at different depths depending
//! on which attributes a cell carries, so fields are located by name
//! rather than by path. The traversal is breadth-first over objects and
//! arrays; each requested key is matched once, at the first place it is
//! met, and dropped from the search.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};
use serde_json::Value;

/// Values found by [`find`], keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct SearchHits<'a> {
    hits: AHashMap<String, &'a Value>,
}

impl<'a> SearchHits<'a> {
    /// The matched value; `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.hits.get(key).copied().filter(|v| !v.is_null())
    }

    /// Whether the key was met at all (even with a `null` value)
    pub fn contains(&self, key: &str) -> bool {
        self.hits.contains_key(key)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Integral value; whole floats such as `10.0` are accepted too.
    pub fn u64(&self, key: &str) -> Option<u64> {
        let v = self.get(key)?;
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Find the first value stored under each of `keys` anywhere beneath `root`.
///
/// ```
/// use serde_json::json;
///
/// let cell = json!({
///     "userEnteredFormat": {"textFormat": {"bold": true}, "backgroundColor": {"red": 1}},
/// });
/// let hits = cellwire_protocol::search::find(&["bold", "italic"], &cell);
/// assert_eq!(hits.bool("bold"), Some(true));
/// assert!(!hits.contains("italic"));
/// ```
pub fn find<'a>(keys: &[&str], root: &'a Value) -> SearchHits<'a> {
    let mut wanted: AHashSet<&str> = keys.iter().copied().collect();
    let mut hits = AHashMap::with_capacity(wanted.len());
    let mut queue: VecDeque<&'a Value> = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if wanted.is_empty() {
            break;
        }
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    if wanted.remove(key.as_str()) {
                        hits.insert(key.clone(), value);
                    }
                    if is_container(value) {
                        queue.push_back(value);
                    }
                }
            }
            Value::Array(items) => queue.extend(items.iter().filter(|v| is_container(v))),
            // Scalars (strings included) have nothing beneath them
            _ => {}
        }
    }

    SearchHits { hits }
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}
