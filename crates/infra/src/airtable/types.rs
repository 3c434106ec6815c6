//! Wire shapes of the record endpoints

use rfshop_domain::{FieldMap, RecordUpdate, RemoteRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One page of a list call.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub records: Vec<RemoteRecord<T>>,
    /// Continuation cursor; absent on the last page
    #[serde(default)]
    pub offset: Option<String>,
}

/// Decode rows one by one into typed payloads.
///
/// A row whose fields do not fit `T` is skipped rather than failing the
/// page; the second value is the number of rows skipped.
pub fn decode_rows<T>(rows: Vec<RemoteRecord<FieldMap>>) -> (Vec<RemoteRecord<T>>, usize)
where
    T: DeserializeOwned,
{
    let total = rows.len();
    let decoded: Vec<RemoteRecord<T>> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value::<T>(Value::Object(row.fields)) {
            Ok(fields) => Some(RemoteRecord { id: row.id, fields, created_time: row.created_time }),
            Err(err) => {
                debug!(id = %row.id, error = %err, "skipping malformed record");
                None
            }
        })
        .collect();

    let skipped = total - decoded.len();
    (decoded, skipped)
}

/// Body of a single-record patch.
#[derive(Debug, Serialize)]
pub struct UpdateRequest<'a, F> {
    pub fields: &'a F,
}

/// Body of a multi-record patch.
#[derive(Debug, Serialize)]
pub struct BatchUpdateRequest<F> {
    pub records: Vec<RecordUpdate<F>>,
}

#[derive(Debug, Deserialize)]
pub struct BatchUpdateResponse<T> {
    pub records: Vec<RemoteRecord<T>>,
}

/// Structured error body, e.g.
/// `{"error": {"type": "INVALID_PERMISSIONS", "message": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub message: String,
}

impl ErrorBody {
    /// The non-empty `error.message` of a body, if it parses as one.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .map(|b| b.error.message)
            .filter(|message| !message.trim().is_empty())
    }
}
