//! Record envelopes shared by every hosted table

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Untyped field payload, used for partial-field patches.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;

/// A row as the backend returns it.
///
/// `id` is backend-assigned and immutable. `fields` is replaced wholesale on
/// every read; the client never merges two payloads for the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord<T> {
    pub id: String,
    pub fields: T,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

impl<T> RemoteRecord<T> {
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self { id: id.into(), fields, created_time: None }
    }
}

/// A record flattened into a single entity: the record id sits beside the
/// business fields, the way views consume it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<T> {
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> From<RemoteRecord<T>> for Entity<T> {
    fn from(record: RemoteRecord<T>) -> Self {
        Self { id: record.id, fields: record.fields }
    }
}

impl<T> Deref for Entity<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

/// One entry of an update request: the target id and the fields to patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate<T = FieldMap> {
    pub id: String,
    pub fields: T,
}

impl<T> RecordUpdate<T> {
    pub fn new(id: impl Into<String>, fields: T) -> Self {
        Self { id: id.into(), fields }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn remote_record_reads_created_time() {
        let record: RemoteRecord<FieldMap> = serde_json::from_value(json!({
            "id": "rec1",
            "createdTime": "2026-02-04T09:00:00.000Z",
            "fields": { "QuoteNumber": "QU-0042" }
        }))
        .unwrap();

        assert_eq!(record.id, "rec1");
        assert_eq!(record.created_time.as_deref(), Some("2026-02-04T09:00:00.000Z"));
        assert_eq!(record.fields["QuoteNumber"], "QU-0042");
    }

    #[test]
    fn entity_flattens_id_into_fields() {
        let mut fields = FieldMap::new();
        fields.insert("Status".into(), json!("SENT"));
        let entity: Entity<FieldMap> = RemoteRecord::new("rec9", fields).into();

        let json = serde_json::to_value(&entity).unwrap();
        assert_eq!(json, json!({ "id": "rec9", "Status": "SENT" }));
    }

    #[test]
    fn record_update_serializes_id_and_fields() {
        let mut fields = FieldMap::new();
        fields.insert("Urgency".into(), json!("High"));
        let update = RecordUpdate::new("rec3", fields);

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "id": "rec3", "fields": { "Urgency": "High" } })
        );
    }
}
