//! Shared fixtures for infra integration tests

#![allow(dead_code)]

use rfshop_domain::{AirtableConfig, TableIds, WriteConfig};
use rfshop_infra::{AirtableClient, BearerToken};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "patTEST.secret";
pub const BASE_ID: &str = "appTEST";
pub const QUOTES: &str = "tblQuotes";
pub const BUILD_LINES: &str = "tblLines";
pub const QUOTE_LINES: &str = "tblQuoteLines";

/// Config pointing at the mock server.
pub fn airtable_config(server: &MockServer) -> AirtableConfig {
    AirtableConfig {
        base_url: server.uri(),
        base_id: BASE_ID.to_string(),
        tables: TableIds {
            quotes: QUOTES.to_string(),
            build_lines: BUILD_LINES.to_string(),
            quote_lines: QUOTE_LINES.to_string(),
        },
        page_size: 100,
        timeout_secs: 5,
    }
}

/// Fast write pacing so batch tests stay quick.
pub fn write_config(delay_ms: u64) -> WriteConfig {
    WriteConfig { batch_size: 10, batch_delay_ms: delay_ms }
}

pub fn client(server: &MockServer, delay_ms: u64) -> AirtableClient {
    AirtableClient::new(BearerToken::new(TOKEN).unwrap(), airtable_config(server), &write_config(delay_ms))
        .unwrap()
}

pub fn table_path(table: &str) -> String {
    format!("/{BASE_ID}/{table}")
}

pub fn schema_path() -> String {
    format!("/meta/bases/{BASE_ID}/tables")
}

pub fn record(id: &str, fields: Value) -> Value {
    json!({ "id": id, "createdTime": "2026-02-04T09:00:00.000Z", "fields": fields })
}

pub fn page(records: Vec<Value>, offset: Option<&str>) -> Value {
    match offset {
        Some(offset) => json!({ "records": records, "offset": offset }),
        None => json!({ "records": records }),
    }
}

/// True when the request carries no continuation cursor.
pub fn first_page(req: &wiremock::Request) -> bool {
    !req.url.query_pairs().any(|(k, _)| k == "offset")
}
