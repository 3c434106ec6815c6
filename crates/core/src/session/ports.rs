//! Port interfaces for the hosted-table backend

use async_trait::async_trait;
use rfshop_domain::{RecordUpdate, RemoteRecord, Result, SelectOptionsMap};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Optional filter and field subset for a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Backend formula; rows for which it evaluates false are skipped
    pub filter_by_formula: Option<String>,
    /// Only return these fields (all fields when empty)
    pub fields: Vec<String>,
}

impl ListQuery {
    /// Every row, every field.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, formula: impl Into<String>) -> Self {
        self.filter_by_formula = Some(formula.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

/// Trait for reading and patching records on the hosted-table backend
#[async_trait]
pub trait RecordGateway: Send + Sync {
    /// Cheapest authenticated call against a collection; fails when the
    /// credential or workspace is wrong.
    async fn test_connection(&self, table_id: &str) -> Result<()>;

    /// Every record of a collection, following the continuation cursor until
    /// the backend stops returning one. Page order and within-page order are
    /// preserved.
    async fn fetch_all_records<T>(
        &self,
        table_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<RemoteRecord<T>>>
    where
        T: DeserializeOwned + Send + 'static;

    /// Patch the given fields of one record.
    async fn update_record<F, T>(
        &self,
        table_id: &str,
        record_id: &str,
        fields: &F,
    ) -> Result<RemoteRecord<T>>
    where
        F: Serialize + Sync,
        T: DeserializeOwned + Send + 'static;

    /// Patch many records in sequential, paced batches. The first failing
    /// batch aborts the call; batches before it stay committed.
    async fn update_records_batch<F, T>(
        &self,
        table_id: &str,
        updates: Vec<RecordUpdate<F>>,
    ) -> Result<Vec<RemoteRecord<T>>>
    where
        F: Serialize + Send + Sync + 'static,
        T: DeserializeOwned + Send + 'static;

    /// Declared choice values per single-choice field, across all tables.
    async fn fetch_select_options(&self) -> Result<SelectOptionsMap>;
}

/// Builds a gateway bound to one credential.
pub trait GatewayFactory: Send + Sync {
    type Gateway: RecordGateway + 'static;

    fn connect(&self, token: &str) -> Result<Self::Gateway>;
}
