// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # JSON Record Codec
//!
//! Converts between JSON documents and [`Record`]s. The JSON text itself is
//! handled by `serde_json`; this module only maps values.
//!
//! ## Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use recordmsg::encoding::{JsonCodec, RecordBuilder, RecordParser};
//!
//! let codec = JsonCodec::new();
//! let record = codec.parse(br#"{"x": 1, "y": 2}"#)?;
//! assert_eq!(codec.build(&record)?, br#"{"x":1,"y":2}"#.to_vec());
//! # Ok(())
//! # }
//! ```

use serde_json::{Map, Number, Value};

use crate::core::{CodecError, Record, RecordValue, Result};
use crate::encoding::codec::{RecordBuilder, RecordParser};

const CODEC: &str = "JSON";

/// JSON parser and builder for records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    /// Create a codec producing compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a codec producing indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Convert a JSON document to a record.
    ///
    /// Only objects are records; any other top-level value is malformed.
    fn value_to_record(value: Value) -> Result<Record> {
        match value {
            Value::Object(obj) => Self::object_to_record(obj),
            other => Err(CodecError::malformed(
                CODEC,
                format!("expected an object at top level, found {}", json_type(&other)),
            )),
        }
    }

    fn object_to_record(obj: Map<String, Value>) -> Result<Record> {
        obj.into_iter()
            .map(|(key, val)| Self::json_to_value(val).map(|value| (key, value)))
            .collect()
    }

    fn json_to_value(value: Value) -> Result<RecordValue> {
        match value {
            Value::Null => Ok(RecordValue::Null),
            Value::Bool(b) => Ok(RecordValue::Bool(b)),
            Value::Number(n) => number_to_value(&n),
            Value::String(s) => Ok(RecordValue::String(s)),
            Value::Array(arr) => arr
                .into_iter()
                .map(Self::json_to_value)
                .collect::<Result<Vec<_>>>()
                .map(RecordValue::Array),
            Value::Object(obj) => Self::object_to_record(obj).map(RecordValue::Record),
        }
    }

    fn record_to_json(record: &Record, path: &str) -> Result<Value> {
        let mut obj = Map::with_capacity(record.len());
        for (key, value) in record {
            let field = join_path(path, key);
            obj.insert(key.clone(), Self::value_to_json(value, &field)?);
        }
        Ok(Value::Object(obj))
    }

    fn value_to_json(value: &RecordValue, path: &str) -> Result<Value> {
        match value {
            RecordValue::Null => Ok(Value::Null),
            RecordValue::Bool(b) => Ok(Value::Bool(*b)),
            RecordValue::Int(i) => Ok(Value::Number(Number::from(*i))),
            RecordValue::UInt(u) => Ok(Value::Number(Number::from(*u))),
            RecordValue::Float(f) => Number::from_f64(*f).map(Value::Number).ok_or_else(|| {
                CodecError::unencodable_field(CODEC, path, format!("{f} is not a JSON number"))
            }),
            RecordValue::String(s) => Ok(Value::String(s.clone())),
            // No binary type in JSON: emit the octets as numbers
            RecordValue::Bytes(b) => Ok(Value::Array(
                b.iter().map(|octet| Value::Number(Number::from(*octet))).collect(),
            )),
            RecordValue::Array(arr) => arr
                .iter()
                .enumerate()
                .map(|(i, item)| Self::value_to_json(item, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            RecordValue::Record(nested) => Self::record_to_json(nested, path),
        }
    }
}

impl RecordParser for JsonCodec {
    fn parse(&self, data: &[u8]) -> Result<Record> {
        let value: Value = serde_json::from_slice(data)?;
        Self::value_to_record(value)
    }
}

impl RecordBuilder for JsonCodec {
    fn build(&self, record: &Record) -> Result<Vec<u8>> {
        let value = Self::record_to_json(record, "")?;
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&value)
        } else {
            serde_json::to_vec(&value)
        };
        encoded.map_err(|e| CodecError::unencodable(CODEC, e.to_string()))
    }
}

fn number_to_value(n: &Number) -> Result<RecordValue> {
    if let Some(i) = n.as_i64() {
        Ok(RecordValue::Int(i))
    } else if let Some(u) = n.as_u64() {
        Ok(RecordValue::UInt(u))
    } else if let Some(f) = n.as_f64() {
        Ok(RecordValue::Float(f))
    } else {
        Err(CodecError::malformed(
            CODEC,
            format!("number {n} has no integer or f64 representation"),
        ))
    }
}

fn join_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
