//! Airtable REST client
//!
//! Implements [`RecordGateway`] over the record and metadata endpoints:
//! cursor pagination, single and batched patches, and schema discovery.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use rfshop_core::batch::{submit_in_batches, BatchPolicy};
use rfshop_core::session::{ListQuery, RecordGateway};
use rfshop_domain::constants::PAGE_SIZE;
use rfshop_domain::{
    AirtableConfig, FieldMap, RecordUpdate, RemoteRecord, Result, SelectOptionsMap, ShopError,
    WriteConfig,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::auth::BearerToken;
use super::schema::TablesResponse;
use super::types::{
    decode_rows, BatchUpdateRequest, BatchUpdateResponse, ErrorBody, ListResponse, UpdateRequest,
};
use crate::errors::conversions::into_shop_error;
use crate::http::HttpClient;

/// Client bound to one credential and one base.
pub struct AirtableClient {
    http: HttpClient,
    token: BearerToken,
    config: AirtableConfig,
    write_policy: BatchPolicy,
}

impl AirtableClient {
    /// Build a client for `config`, pacing batched writes per `writes`.
    ///
    /// The page size is clamped to `1..=100`, the most the backend serves.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is unusable or the HTTP client cannot
    /// be built.
    pub fn new(token: BearerToken, mut config: AirtableConfig, writes: &WriteConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(into_shop_error)?;

        let page_size = config.page_size.clamp(1, PAGE_SIZE);
        if page_size != config.page_size {
            warn!(configured = config.page_size, page_size, "page size out of range, clamped");
            config.page_size = page_size;
        }

        let http = HttpClient::builder()
            .timeout(config.timeout())
            .user_agent(concat!("rfshop/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, token, config, write_policy: BatchPolicy::from(writes) })
    }

    pub fn write_policy(&self) -> &BatchPolicy {
        &self.write_policy
    }

    /// Send one request and decode the JSON response.
    ///
    /// Non-success statuses fail with [`ShopError::Request`], carrying the
    /// body's `error.message` when present and the status text otherwise.
    pub async fn request<T>(&self, method: Method, url: Url, body: Option<Value>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, url, body, HeaderMap::new()).await
    }

    /// Like [`request`](Self::request), with per-call headers merged over
    /// the default `Authorization` and `Content-Type` headers.
    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        url: Url,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut merged = self.default_headers()?;
        merged.extend(headers);

        let mut builder = self.http.request(method, url).headers(merged);
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        let text = response.text().await.map_err(into_shop_error)?;

        if !status.is_success() {
            let message = ErrorBody::message_from(&text).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            });
            debug!(status = status.as_u16(), %message, "backend rejected request");
            return Err(ShopError::request(status.as_u16(), message));
        }

        serde_json::from_str(&text).map_err(into_shop_error)
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.token.header_value()?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// `{base}/{segments...}`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_url).map_err(into_shop_error)?;
        url.path_segments_mut()
            .map_err(|()| ShopError::config("backend URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn table_url(&self, table_id: &str) -> Result<Url> {
        self.endpoint(&[self.config.base_id.as_str(), table_id])
    }

    fn list_url(&self, table_id: &str, query: &ListQuery, offset: Option<&str>) -> Result<Url> {
        let mut url = self.table_url(table_id)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("pageSize", &self.config.page_size.to_string());
            if let Some(formula) = &query.filter_by_formula {
                pairs.append_pair("filterByFormula", formula);
            }
            for field in &query.fields {
                pairs.append_pair("fields[]", field);
            }
            if let Some(offset) = offset {
                pairs.append_pair("offset", offset);
            }
        }
        Ok(url)
    }

    fn schema_url(&self) -> Result<Url> {
        self.endpoint(&["meta", "bases", self.config.base_id.as_str(), "tables"])
    }
}

#[async_trait]
impl RecordGateway for AirtableClient {
    #[instrument(skip(self))]
    async fn test_connection(&self, table_id: &str) -> Result<()> {
        let mut url = self.table_url(table_id)?;
        url.query_pairs_mut().append_pair("maxRecords", "1");

        let _: ListResponse<FieldMap> = self.request(Method::GET, url, None).await?;
        debug!("connection verified");
        Ok(())
    }

    #[instrument(skip(self, query), fields(filtered = query.filter_by_formula.is_some()))]
    async fn fetch_all_records<T>(
        &self,
        table_id: &str,
        query: &ListQuery,
    ) -> Result<Vec<RemoteRecord<T>>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;
        let mut pages = 0usize;
        let mut skipped = 0usize;

        loop {
            let url = self.list_url(table_id, query, offset.as_deref())?;
            let page: ListResponse<FieldMap> = self.request(Method::GET, url, None).await?;
            pages += 1;
            debug!(page = pages, records = page.records.len(), "fetched page");

            let (rows, malformed) = decode_rows::<T>(page.records);
            skipped += malformed;
            records.extend(rows);

            match page.offset {
                Some(next) if !next.is_empty() => offset = Some(next),
                _ => break,
            }
        }

        if skipped > 0 {
            warn!(skipped, "dropped records with malformed fields");
        }
        info!(pages, records = records.len(), "fetched all records");
        Ok(records)
    }

    #[instrument(skip(self, fields))]
    async fn update_record<F, T>(
        &self,
        table_id: &str,
        record_id: &str,
        fields: &F,
    ) -> Result<RemoteRecord<T>>
    where
        F: Serialize + Sync,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.endpoint(&[self.config.base_id.as_str(), table_id, record_id])?;
        let body = serde_json::to_value(UpdateRequest { fields }).map_err(into_shop_error)?;

        let record: RemoteRecord<T> = self.request(Method::PATCH, url, Some(body)).await?;
        info!("record updated");
        Ok(record)
    }

    #[instrument(skip(self, updates), fields(count = updates.len()))]
    async fn update_records_batch<F, T>(
        &self,
        table_id: &str,
        updates: Vec<RecordUpdate<F>>,
    ) -> Result<Vec<RemoteRecord<T>>>
    where
        F: Serialize + Send + Sync + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let url = self.table_url(table_id)?;

        let written = submit_in_batches(updates, &self.write_policy, |_, records| {
            let url = url.clone();
            async move {
                let body = serde_json::to_value(BatchUpdateRequest { records })
                    .map_err(into_shop_error)?;
                let response: BatchUpdateResponse<T> =
                    self.request(Method::PATCH, url, Some(body)).await?;
                Ok::<_, ShopError>(response.records)
            }
        })
        .await?;

        info!(records = written.len(), "batch update complete");
        Ok(written)
    }

    #[instrument(skip(self))]
    async fn fetch_select_options(&self) -> Result<SelectOptionsMap> {
        let url = self.schema_url()?;
        let schema: TablesResponse = self.request(Method::GET, url, None).await.inspect_err(|err| {
            warn!(error = %err, "schema request failed");
        })?;

        let options = schema.select_options();
        debug!(tables = schema.tables.len(), fields = options.len(), "parsed base schema");
        Ok(options)
    }
}
