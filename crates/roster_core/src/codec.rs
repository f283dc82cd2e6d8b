//! JSON document codec.
//!
//! A dataset file is a JSON array of record objects, pretty-printed with a
//! configurable indent. An export file wraps the same array in an
//! [`ExportEnvelope`]. [`decode`] accepts both shapes.

use crate::dataset::Dataset;
use crate::record::Record;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

/// Exported dataset with metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    /// Export time in seconds since the Unix epoch.
    #[serde(default)]
    pub exported_at: u64,
    /// Number of records at export time.
    #[serde(default)]
    pub total_records: usize,
    /// The exported records.
    #[serde(alias = "students")]
    pub records: Vec<Record>,
}

impl ExportEnvelope {
    /// Wraps a copy of `dataset`.
    #[must_use]
    pub fn new(dataset: &Dataset, exported_at: u64) -> Self {
        Self {
            exported_at,
            total_records: dataset.len(),
            records: dataset.records().to_vec(),
        }
    }
}

/// Serializes `value` as JSON indented by `indent` spaces, with a trailing newline.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> serde_json::Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Encodes a dataset as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode(dataset: &Dataset, indent: usize) -> serde_json::Result<Vec<u8>> {
    to_pretty_json(dataset, indent)
}

/// Encodes an export envelope.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_export(envelope: &ExportEnvelope, indent: usize) -> serde_json::Result<Vec<u8>> {
    to_pretty_json(envelope, indent)
}

/// Decodes a dataset from either a bare record array or an export envelope.
///
/// Every record must carry `id`, `name`, `course` and `year` as strings.
/// Unknown keys are ignored.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or have any other shape.
pub fn decode(bytes: &[u8]) -> serde_json::Result<Dataset> {
    match serde_json::from_slice::<Value>(bytes)? {
        value @ Value::Array(_) => {
            let records: Vec<Record> = serde_json::from_value(value)?;
            Ok(Dataset::from_records(records))
        }
        value @ Value::Object(_) => {
            let envelope: ExportEnvelope = serde_json::from_value(value)?;
            Ok(Dataset::from_records(envelope.records))
        }
        other => Err(serde_json::Error::custom(format!(
            "expected a record array or export object, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
