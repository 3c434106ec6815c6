//! End-to-end session flow against a mock backend
//!
//! Wires `SessionManager` to the real Airtable gateway factory and an
//! in-memory credential store, then checks:
//! - Successful authentication persists the token and loads the snapshot
//! - A rejected token clears the stored credential
//! - A failing schema endpoint (forbidden, timed out, garbled) degrades to
//!   default select options
//! - Batched build-line writes go through the active session

mod support;

use std::sync::Arc;
use std::time::Duration;

use rfshop_core::auth::{auth_failure_hint, CredentialStore, SessionManager};
use rfshop_domain::{AirtableConfig, FieldMap, RecordUpdate, ShopError};
use rfshop_infra::{AirtableGatewayFactory, MemoryCredentialStore};
use serde_json::{json, Value};
use support::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn not_a_connection_check(req: &Request) -> bool {
    !req.url.query_pairs().any(|(k, _)| k == "maxRecords")
}

fn manager(server: &MockServer, store: Arc<MemoryCredentialStore>) -> SessionManager<AirtableGatewayFactory> {
    manager_with_config(airtable_config(server), store)
}

fn manager_with_config(
    config: AirtableConfig,
    store: Arc<MemoryCredentialStore>,
) -> SessionManager<AirtableGatewayFactory> {
    let tables = config.tables.clone();
    let factory = AirtableGatewayFactory::new(config, write_config(0));
    SessionManager::new(factory, store, tables)
}

async fn mount_connection_check(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(table_path(QUOTES)))
        .and(query_param("maxRecords", "1"))
        .respond_with(ResponseTemplate::new(status).set_body_json(page(vec![], None)))
        .mount(server)
        .await;
}

async fn mount_table(server: &MockServer, table: &str, records: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(table_path(table)))
        .and(not_a_connection_check)
        .respond_with(ResponseTemplate::new(200).set_body_json(page(records, None)))
        .mount(server)
        .await;
}

async fn mount_shop_data(server: &MockServer) {
    mount_table(
        server,
        QUOTES,
        vec![
            record("rq1", json!({ "QuoteNumber": "QU-1", "Status": "ACCEPTED" })),
            record("rq2", json!({ "QuoteNumber": "QU-2", "Status": "VOIDED" })),
            record("rq3", json!({ "QuoteNumber": "QU-3", "Status": "SENT" })),
        ],
    )
    .await;
    mount_table(
        server,
        BUILD_LINES,
        vec![
            record("rb1", json!({ "QuoteNumber": "QU-1", "AssemblyQty": 4 })),
            record("rb2", json!({ "QuoteNumber": "QU-1", "AssemblyQty": 8 })),
            record("rb3", json!({ "AssemblyQty": 1 })),
        ],
    )
    .await;
    mount_table(
        server,
        QUOTE_LINES,
        vec![record("rl1", json!({ "QuoteNumber": "QU-3" }))],
    )
    .await;
}

#[tokio::test]
async fn test_authenticate_loads_schema_and_snapshot() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 200).await;
    mount_shop_data(&server).await;
    Mock::given(method("GET"))
        .and(path(schema_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tables": [{
                "id": QUOTES,
                "name": "Quotes",
                "fields": [{
                    "id": "fld1",
                    "name": "Urgency",
                    "type": "singleSelect",
                    "options": { "choices": [{ "id": "s1", "name": "Whenever" }] }
                }]
            }]
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::default());
    let manager = manager(&server, Arc::clone(&store));

    let outcome = manager.authenticate(TOKEN).await.unwrap();

    assert!(outcome.schema.success);
    assert!(outcome.schema.is_live());
    let summary = outcome.load.unwrap();
    assert_eq!(summary.active_quotes, 2);
    assert_eq!(summary.build_line_groups, 1);
    assert_eq!(summary.build_lines, 2);
    assert_eq!(store.load().unwrap().as_deref(), Some(TOKEN));

    let session = manager.session().unwrap();
    assert_eq!(session.select_options("Urgency"), vec!["Whenever"]);
    // Not in the live schema, so the static default applies
    assert_eq!(session.select_options("Complexity"), vec!["Simple", "Medium", "Complex", "Production"]);

    let snapshot = session.snapshot();
    let quote_numbers: Vec<_> =
        snapshot.quotes.iter().map(|q| q.quote_number.clone().unwrap_or_default()).collect();
    assert_eq!(quote_numbers, vec!["QU-1", "QU-3"]);
    assert_eq!(snapshot.total_assembly_qty("QU-1"), Some(12.0));
    assert_eq!(snapshot.quote_lines_for("QU-3").len(), 1);
}

#[tokio::test]
async fn test_rejected_token_clears_stored_credential() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 401).await;

    let store = Arc::new(MemoryCredentialStore::with_token("patExpired"));
    let manager = manager(&server, Arc::clone(&store));

    let err = manager.resume().await.unwrap_err();

    assert_eq!(err, ShopError::request(401, "Unauthorized"));
    assert_eq!(auth_failure_hint(&err), "Invalid token. Check your Airtable Personal Access Token.");
    assert_eq!(store.load().unwrap(), None);
    assert!(!manager.is_authenticated());
    // Nothing past the connection check was attempted
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_forbidden_schema_falls_back_to_defaults() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 200).await;
    mount_shop_data(&server).await;
    Mock::given(method("GET"))
        .and(path(schema_path()))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let manager = manager(&server, Arc::new(MemoryCredentialStore::default()));
    let outcome = manager.authenticate(TOKEN).await.unwrap();

    assert!(outcome.schema.success);
    assert_eq!(outcome.schema.schema_error.as_deref(), Some("403: Forbidden"));
    assert!(outcome.load.is_ok());

    let session = manager.session().unwrap();
    assert!(!session.is_schema_loaded());
    assert_eq!(
        session.select_options("Internal Status"),
        vec!["Not scheduled", "Scheduled", "In Progress", "Complete", "Blocked"]
    );
    assert!(session.select_options("Unknown Field").is_empty());
}

#[tokio::test]
async fn test_schema_timeout_falls_back_to_defaults() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 200).await;
    mount_shop_data(&server).await;
    Mock::given(method("GET"))
        .and(path(schema_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "tables": [] }))
                .set_delay(Duration::from_millis(2500)),
        )
        .mount(&server)
        .await;

    let config = AirtableConfig { timeout_secs: 1, ..airtable_config(&server) };
    let manager = manager_with_config(config, Arc::new(MemoryCredentialStore::default()));
    let outcome = manager.authenticate(TOKEN).await.unwrap();

    assert!(outcome.schema.success);
    assert_eq!(outcome.schema.schema_error.as_deref(), Some("Network error: HTTP request timed out"));
    assert!(outcome.load.is_ok());

    let session = manager.session().unwrap();
    assert!(!session.is_schema_loaded());
    assert_eq!(session.select_options("Urgency"), vec!["Low", "Medium", "High", "Critical"]);
}

#[tokio::test]
async fn test_unparseable_schema_body_falls_back_to_defaults() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 200).await;
    mount_shop_data(&server).await;
    Mock::given(method("GET"))
        .and(path(schema_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let manager = manager(&server, Arc::new(MemoryCredentialStore::default()));
    let outcome = manager.authenticate(TOKEN).await.unwrap();

    assert!(outcome.schema.success);
    assert!(outcome.schema.schema_error.is_some());
    assert!(outcome.load.is_ok());

    let session = manager.session().unwrap();
    assert!(!session.is_schema_loaded());
    assert_eq!(
        session.select_options("Line Complexity"),
        vec!["Simple", "Medium", "Complex", "Production"]
    );
}

#[tokio::test]
async fn test_build_line_updates_go_out_in_batches() {
    let server = MockServer::start().await;
    mount_connection_check(&server, 200).await;
    mount_shop_data(&server).await;
    Mock::given(method("GET"))
        .and(path(schema_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tables": [] })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(table_path(BUILD_LINES)))
        .respond_with(|req: &Request| {
            let body: Value = serde_json::from_slice(&req.body).unwrap();
            ResponseTemplate::new(200).set_body_json(json!({ "records": body["records"] }))
        })
        .expect(2)
        .mount(&server)
        .await;

    let manager = manager(&server, Arc::new(MemoryCredentialStore::default()));
    manager.authenticate(TOKEN).await.unwrap();
    let session = manager.session().unwrap();

    let updates: Vec<RecordUpdate> = (0..12)
        .map(|i| {
            let mut fields = FieldMap::new();
            fields.insert("Line Build Status".into(), json!("Queued"));
            RecordUpdate::new(format!("rb{i}"), fields)
        })
        .collect();
    let written = session.update_build_lines(updates).await.unwrap();

    assert_eq!(written.len(), 12);
    assert_eq!(written[11].id, "rb11");
}
