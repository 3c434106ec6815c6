//! Port interfaces for credential persistence

use rfshop_domain::Result;

/// Durable storage for the single access token.
pub trait CredentialStore: Send + Sync {
    /// The stored token, if any.
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
