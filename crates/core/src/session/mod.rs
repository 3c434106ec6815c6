//! Client session: one authenticated gateway plus the state loaded through it
//!
//! The session exclusively owns the live select options and the aggregated
//! snapshot. Both are only ever replaced wholesale.

pub mod ports;

use std::sync::Arc;

use parking_lot::RwLock;
use rfshop_domain::{
    BuildLine, BuildLineFields, Entity, FieldMap, Quote, QuoteFields, QuoteLineFields,
    RecordUpdate, Result, TableIds,
};
use tracing::{info, instrument, warn};

use crate::aggregation::{LoadSummary, ShopSnapshot};
use crate::schema::{SchemaLoadResult, SelectOptionsRegistry};
pub use ports::{GatewayFactory, ListQuery, RecordGateway};

/// An authenticated connection to the shop's base.
pub struct ShopSession<G> {
    gateway: G,
    tables: TableIds,
    options: RwLock<SelectOptionsRegistry>,
    snapshot: RwLock<Arc<ShopSnapshot>>,
}

impl<G: RecordGateway> ShopSession<G> {
    pub fn new(gateway: G, tables: TableIds) -> Self {
        Self {
            gateway,
            tables,
            options: RwLock::new(SelectOptionsRegistry::default()),
            snapshot: RwLock::new(Arc::new(ShopSnapshot::default())),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn tables(&self) -> &TableIds {
        &self.tables
    }

    /// Probe the quotes collection with the session's credential.
    pub async fn verify_connection(&self) -> Result<()> {
        self.gateway.test_connection(&self.tables.quotes).await
    }

    /// Discover live select options. Never fails: on error the registry
    /// falls back to static defaults and the result carries the message.
    #[instrument(skip(self))]
    pub async fn load_schemas(&self) -> SchemaLoadResult {
        match self.gateway.fetch_select_options().await {
            Ok(live) => {
                let fields = live.len();
                let mut options = self.options.write();
                options.set_live(live);
                info!(fields, defaulted = options.defaulted_fields().len(), "schema discovery complete");
                SchemaLoadResult::loaded()
            }
            Err(err) => {
                warn!(error = %err, "schema discovery failed, using default select options");
                self.options.write().clear_live();
                SchemaLoadResult::degraded(err.to_string())
            }
        }
    }

    /// Legal values for a choice field.
    pub fn select_options(&self, field: &str) -> Vec<String> {
        self.options.read().get(field).to_vec()
    }

    /// All known choice fields with their resolved values.
    pub fn all_select_options(&self) -> rfshop_domain::SelectOptionsMap {
        self.options.read().resolved()
    }

    pub fn is_schema_loaded(&self) -> bool {
        self.options.read().is_live()
    }

    /// Fetch all three collections and swap in a freshly aggregated
    /// snapshot. On failure the previous snapshot stays in place.
    #[instrument(skip(self))]
    pub async fn load_data(&self) -> Result<LoadSummary> {
        let all = ListQuery::all();
        let quotes =
            self.gateway.fetch_all_records::<QuoteFields>(&self.tables.quotes, &all).await?;
        let build_lines = self
            .gateway
            .fetch_all_records::<BuildLineFields>(&self.tables.build_lines, &all)
            .await?;
        let quote_lines = self
            .gateway
            .fetch_all_records::<QuoteLineFields>(&self.tables.quote_lines, &all)
            .await?;

        let snapshot = ShopSnapshot::from_records(quotes, build_lines, quote_lines);
        let summary = snapshot.summary();
        *self.snapshot.write() = Arc::new(snapshot);

        info!(
            quotes = summary.active_quotes,
            build_lines = summary.build_lines,
            quote_lines = summary.quote_lines,
            "data load complete"
        );
        Ok(summary)
    }

    /// The most recently loaded snapshot.
    pub fn snapshot(&self) -> Arc<ShopSnapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Patch scheduling fields of one quote. The loaded snapshot is left
    /// untouched until the next `load_data`.
    pub async fn update_quote(&self, record_id: &str, fields: &FieldMap) -> Result<Quote> {
        let record = self
            .gateway
            .update_record::<FieldMap, QuoteFields>(&self.tables.quotes, record_id, fields)
            .await?;
        Ok(Entity::from(record))
    }

    /// Patch many build lines in paced batches.
    pub async fn update_build_lines(&self, updates: Vec<RecordUpdate>) -> Result<Vec<BuildLine>> {
        let records = self
            .gateway
            .update_records_batch::<FieldMap, BuildLineFields>(&self.tables.build_lines, updates)
            .await?;
        Ok(records.into_iter().map(Entity::from).collect())
    }
}
