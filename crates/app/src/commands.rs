//! Command implementations
//!
//! Each command resumes the stored session (or authenticates afresh for
//! `login`) and prints a short report. Commands that only need select
//! options or write records connect without loading the working set.

use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use rfshop_core::auth::{auth_failure_hint, AuthOutcome, SessionManager};
use rfshop_core::schema::SchemaLoadResult;
use rfshop_core::session::ShopSession;
use rfshop_domain::{FieldMap, RecordUpdate, ShopError};
use rfshop_infra::{config, observability, AirtableClient, AirtableGatewayFactory, KeyringCredentialStore};
use serde_json::Value;
use tracing::debug;

use crate::report;

pub type Manager = SessionManager<AirtableGatewayFactory>;

const TOKEN_ENV: &str = "RFSHOP_AIRTABLE_TOKEN";
const LINE_BUILD_STATUS_FIELD: &str = "Line Build Status";

/// Load `.env` and configuration, start logging, build the session manager.
pub fn bootstrap() -> anyhow::Result<Manager> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to read .env file");
        }
    }

    let config = config::load().context("Failed to load configuration")?;
    observability::init_logging(&config.logging)?;
    debug!(base_id = %config.airtable.base_id, "configuration loaded");

    Ok(SessionManager::new(
        AirtableGatewayFactory::from_config(&config),
        Arc::new(KeyringCredentialStore::default()),
        config.airtable.tables.clone(),
    ))
}

pub async fn login(manager: &Manager, token: Option<String>) -> anyhow::Result<()> {
    let token = token
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .ok_or_else(|| anyhow!("No token given. Pass one or set {TOKEN_ENV}."))?;

    let outcome = manager.authenticate(&token).await.map_err(hint)?;
    println!("Logged in.");
    print_outcome(&outcome);
    Ok(())
}

pub async fn sync(manager: &Manager, json: bool) -> anyhow::Result<()> {
    let (session, outcome) = resume(manager).await?;
    if let Err(e) = outcome.load {
        bail!("Failed to load data: {e}");
    }

    let snapshot = session.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&*snapshot)?);
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let rows = report::quote_rows(&snapshot, today);
    print!("{}", report::render_quotes(&rows));
    println!();
    println!("{}", report::render_summary(&snapshot.summary()));
    Ok(())
}

pub async fn options(manager: &Manager, field: Option<&str>) -> anyhow::Result<()> {
    let (session, schema) = connect(manager).await?;
    let source = if schema.is_live() { "live schema" } else { "defaults" };

    match field {
        Some(field) => {
            let values = session.select_options(field);
            if values.is_empty() {
                println!("{field}: no options");
            } else {
                println!("{field} ({source}): {}", values.join(", "));
            }
        }
        None => {
            println!("Select options ({source}):");
            for (field, values) in session.all_select_options() {
                println!("  {field}: {}", values.join(", "));
            }
        }
    }
    Ok(())
}

pub async fn set_quote(
    manager: &Manager,
    record_id: &str,
    assignments: &[String],
) -> anyhow::Result<()> {
    if assignments.is_empty() {
        bail!("Nothing to update. Pass one or more Field=Value pairs.");
    }

    let (session, _) = connect(manager).await?;
    let mut fields = FieldMap::new();
    for assignment in assignments {
        let (field, value) = report::parse_assignment(assignment)?;
        check_choice(&session, field, value)?;
        fields.insert(field.to_string(), Value::String(value.to_string()));
    }

    let quote = session.update_quote(record_id, &fields).await.map_err(hint)?;
    println!(
        "Updated {} ({}).",
        quote.quote_number.as_deref().unwrap_or("unnumbered quote"),
        quote.id
    );
    Ok(())
}

pub async fn set_line_status(
    manager: &Manager,
    status: &str,
    record_ids: &[String],
) -> anyhow::Result<()> {
    if record_ids.is_empty() {
        bail!("No build lines given.");
    }

    let (session, _) = connect(manager).await?;
    check_choice(&session, LINE_BUILD_STATUS_FIELD, status)?;

    let updates: Vec<RecordUpdate> = record_ids
        .iter()
        .map(|id| {
            let mut fields = FieldMap::new();
            fields.insert(LINE_BUILD_STATUS_FIELD.to_string(), Value::String(status.to_string()));
            RecordUpdate::new(id.clone(), fields)
        })
        .collect();

    let written = session.update_build_lines(updates).await.map_err(hint)?;
    println!("Updated {} build line(s) to {status}.", written.len());
    Ok(())
}

pub fn logout(manager: &Manager) -> anyhow::Result<()> {
    manager.logout().map_err(hint)?;
    println!("Logged out.");
    Ok(())
}

async fn resume(manager: &Manager) -> anyhow::Result<(Arc<ShopSession<AirtableClient>>, AuthOutcome)> {
    let outcome = manager
        .resume()
        .await
        .map_err(hint)?
        .ok_or_else(|| anyhow!("Not logged in. Run `rfshop login <token>` first."))?;
    let session = manager.session().ok_or_else(|| anyhow!("Session was not established"))?;
    Ok((session, outcome))
}

/// Session for commands that skip the working set: connection check and schema only.
async fn connect(
    manager: &Manager,
) -> anyhow::Result<(Arc<ShopSession<AirtableClient>>, SchemaLoadResult)> {
    let schema = manager
        .connect_stored()
        .await
        .map_err(hint)?
        .ok_or_else(|| anyhow!("Not logged in. Run `rfshop login <token>` first."))?;
    let session = manager.session().ok_or_else(|| anyhow!("Session was not established"))?;
    Ok((session, schema))
}

/// Reject values outside a field's known options. Fields with no known
/// options accept anything.
fn check_choice(session: &ShopSession<AirtableClient>, field: &str, value: &str) -> anyhow::Result<()> {
    let allowed = session.select_options(field);
    if !allowed.is_empty() && !allowed.iter().any(|v| v == value) {
        bail!("'{value}' is not a valid {field}. Choose one of: {}", allowed.join(", "));
    }
    Ok(())
}

fn print_outcome(outcome: &AuthOutcome) {
    if let Some(error) = &outcome.schema.schema_error {
        println!("Schema unavailable ({error}); using default select options.");
    }
    match &outcome.load {
        Ok(summary) => println!("{}", report::render_summary(summary)),
        Err(e) => println!("Initial data load failed: {e}. Run `rfshop sync` to retry."),
    }
}

fn hint(err: ShopError) -> anyhow::Error {
    anyhow!(auth_failure_hint(&err))
}
