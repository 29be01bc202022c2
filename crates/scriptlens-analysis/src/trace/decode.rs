//! Decoding of engine output into events.
//!
//! An engine writes either one event object per line or a whole JSON array of
//! events. Entries that do not decode are reported, not fatal.

use serde_json::Value;

use super::event::ExecutionEvent;

/// One decoded entry of engine output.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEntry {
    Event(ExecutionEvent),
    /// The entry could not be decoded; carries the decoder's message.
    Malformed(String),
}

/// Decode one line of engine output. Blank lines yield nothing.
pub fn decode_line(line: &str) -> Vec<DecodedEntry> {
    let line = line.trim();
    if line.is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Value>(line) {
        Ok(value) => decode_value(value),
        Err(e) => vec![DecodedEntry::Malformed(e.to_string())],
    }
}

/// Decode a JSON value holding one event or an array of events.
pub fn decode_value(value: Value) -> Vec<DecodedEntry> {
    match value {
        Value::Array(items) => items.into_iter().map(decode_event).collect(),
        other => vec![decode_event(other)],
    }
}

fn decode_event(value: Value) -> DecodedEntry {
    match serde_json::from_value::<ExecutionEvent>(value) {
        Ok(event) => DecodedEntry::Event(event),
        Err(e) => DecodedEntry::Malformed(e.to_string()),
    }
}
