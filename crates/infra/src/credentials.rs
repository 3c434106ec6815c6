//! Credential storage adapters
//!
//! The access token lives in the system keyring under a fixed service and
//! key, so it survives restarts without touching the filesystem.

use keyring::Entry;
use parking_lot::Mutex;
use rfshop_core::auth::CredentialStore;
use rfshop_domain::constants::{CREDENTIAL_SERVICE, STORAGE_KEY_TOKEN};
use rfshop_domain::Result;
use tracing::debug;

use crate::errors::conversions::into_shop_error;

/// Stores the token in the platform keyring.
#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
    key: String,
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new(CREDENTIAL_SERVICE, STORAGE_KEY_TOKEN)
    }
}

impl KeyringCredentialStore {
    pub fn new(service: impl Into<String>, key: impl Into<String>) -> Self {
        Self { service: service.into(), key: key.into() }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, &self.key).map_err(into_shop_error)
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(into_shop_error(err)),
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        self.entry()?.set_password(token).map_err(into_shop_error)?;
        debug!(service = %self.service, "credential stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(into_shop_error(err)),
        }
    }
}

/// Process-local store, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}
