//! Authentication lifecycle
//!
//! Turns a token into a live [`ShopSession`]: check the connection, persist, discover the
//! schema, load data. Connection failures during authentication clear the
//! stored credential; failures during a later refresh never do.

pub mod ports;

use std::sync::Arc;

use parking_lot::RwLock;
use rfshop_domain::{Result, ShopError, TableIds};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::aggregation::LoadSummary;
use crate::schema::SchemaLoadResult;
use crate::session::{GatewayFactory, ShopSession};
pub use ports::CredentialStore;

/// What happened after a successful authentication.
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub schema: SchemaLoadResult,
    /// The initial data load; a failure here does not undo authentication
    pub load: std::result::Result<LoadSummary, ShopError>,
}

/// Owns the credential and at most one active session.
pub struct SessionManager<F: GatewayFactory> {
    factory: F,
    store: Arc<dyn CredentialStore>,
    tables: TableIds,
    session: RwLock<Option<Arc<ShopSession<F::Gateway>>>>,
}

impl<F: GatewayFactory> SessionManager<F> {
    pub fn new(factory: F, store: Arc<dyn CredentialStore>, tables: TableIds) -> Self {
        Self { factory, store, tables, session: RwLock::new(None) }
    }

    /// The active session, if authenticated.
    pub fn session(&self) -> Option<Arc<ShopSession<F::Gateway>>> {
        self.session.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Authenticate with a user-supplied token.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for a blank token; otherwise the connection error, in
    /// which case the stored credential has been cleared.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<AuthOutcome> {
        let (session, schema) = self.establish(token).await?;

        let load = session.load_data().await;
        if let Err(err) = &load {
            warn!(error = %err, "initial data load failed");
        }

        info!(schema_loaded = schema.is_live(), "authenticated");
        Ok(AuthOutcome { schema, load })
    }

    /// Authenticate with the stored credential, if there is one.
    pub async fn resume(&self) -> Result<Option<AuthOutcome>> {
        match self.store.load()? {
            Some(token) => self.authenticate(&token).await.map(Some),
            None => Ok(None),
        }
    }

    /// Re-establish a session from the stored credential without loading
    /// data: connection check and schema discovery only. For callers that only write.
    ///
    /// # Errors
    ///
    /// Same as [`authenticate`](Self::authenticate).
    #[instrument(skip_all)]
    pub async fn connect_stored(&self) -> Result<Option<SchemaLoadResult>> {
        let Some(token) = self.store.load()? else {
            return Ok(None);
        };
        let (_, schema) = self.establish(&token).await?;
        info!(schema_loaded = schema.is_live(), "connected");
        Ok(Some(schema))
    }

    /// Check the connection, persist, discover the schema, install the session.
    async fn establish(
        &self,
        token: &str,
    ) -> Result<(Arc<ShopSession<F::Gateway>>, SchemaLoadResult)> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ShopError::invalid_input("Please enter a token"));
        }

        let session = match self.connect(token).await {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "authentication failed, clearing stored credential");
                self.discard_credential();
                *self.session.write() = None;
                return Err(err);
            }
        };

        if let Err(err) = self.store.save(token) {
            warn!(error = %err, "could not persist credential");
        }

        let schema = session.load_schemas().await;
        *self.session.write() = Some(Arc::clone(&session));
        Ok((session, schema))
    }

    /// Reload data for the active session. On failure the previous data and
    /// the credential stay intact.
    pub async fn refresh(&self) -> Result<LoadSummary> {
        let session = self.session().ok_or_else(|| ShopError::auth("Not authenticated"))?;
        session.load_data().await.inspect_err(|err| {
            warn!(error = %err, "refresh failed, keeping previous data");
        })
    }

    /// Drop the session and forget the credential.
    pub fn logout(&self) -> Result<()> {
        *self.session.write() = None;
        self.store.clear()?;
        info!("logged out");
        Ok(())
    }

    async fn connect(&self, token: &str) -> Result<Arc<ShopSession<F::Gateway>>> {
        let gateway = self.factory.connect(token)?;
        let session = ShopSession::new(gateway, self.tables.clone());
        session.verify_connection().await?;
        Ok(Arc::new(session))
    }

    fn discard_credential(&self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear stored credential");
        }
    }
}

/// User-facing message for an authentication failure.
pub fn auth_failure_hint(err: &ShopError) -> String {
    match err.status_code() {
        Some(401) => "Invalid token. Check your Airtable Personal Access Token.".to_string(),
        Some(403) => "Access denied. Ensure your token has access to the SALES base.".to_string(),
        Some(404) => "Base not found. Check the Base ID configuration.".to_string(),
        _ => err.to_string(),
    }
}
