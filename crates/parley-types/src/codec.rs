//! Conversion between records and plain JSON objects.
//!
//! Field names on the wire are camelCase (`senderId`, `createdAt`) and
//! timestamps are RFC 3339 UTC text carrying every sub-second digit, so a
//! round trip gives back the same instant.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ShapeError;

/// A plain associative form of a record.
pub type Record = Map<String, Value>;

pub fn to_record<T: Serialize>(value: &T) -> Result<Record, ShapeError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(ShapeError::NotARecord),
    }
}

/// Fails on a missing field, an extra field or an unknown category variant.
pub fn from_record<T: DeserializeOwned>(record: Record) -> Result<T, ShapeError> {
    Ok(serde_json::from_value(Value::Object(record))?)
}

pub fn encode<T: Serialize>(value: &T) -> Result<String, ShapeError> {
    Ok(serde_json::to_string(value)?)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ShapeError> {
    Ok(serde_json::from_str(text)?)
}
