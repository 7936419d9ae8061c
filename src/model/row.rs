//! Field access on raw query rows
//!
//! Rows arrive as loosely typed JSON objects whose column names drifted over
//! time. These helpers resolve a field through an ordered alias chain using the
//! same notion of "present" the site always had: missing, `null`, `false`, `0`
//! and empty strings all count as absent.

use serde_json::{Map, Value};

/// One record as returned by the query service
pub type Row = Map<String, Value>;

fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// First present value among `keys`, in order
pub fn first_present(row: &Row, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| row.get(*key).and_then(truthy_text))
}

/// Identifier columns may be numeric or textual; zero is still an id
pub fn identifier(row: &Row) -> String {
    match row.get("id") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
