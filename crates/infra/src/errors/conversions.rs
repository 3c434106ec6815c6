//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use reqwest::Error as HttpError;
use rfshop_domain::ShopError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShopError);

impl From<InfraError> for ShopError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShopError> for InfraError {
    fn from(value: ShopError) -> Self {
        InfraError(value)
    }
}

/// Convert any supported external error straight into a [`ShopError`].
pub fn into_shop_error<E>(err: E) -> ShopError
where
    E: Into<InfraError>,
{
    err.into().0
}

trait IntoShopError {
    fn into_shop(self) -> ShopError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → ShopError */
/* -------------------------------------------------------------------------- */

impl IntoShopError for KeyringError {
    fn into_shop(self) -> ShopError {
        use KeyringError::{
            Ambiguous, BadEncoding, Invalid, NoEntry, NoStorageAccess, PlatformFailure, TooLong,
        };

        let description = self.to_string();

        match self {
            NoEntry => ShopError::security("keychain entry not found"),
            BadEncoding(_) => ShopError::security("credential in keychain is not valid UTF-8"),
            TooLong(name, limit) => ShopError::security(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            Invalid(attr, reason) => {
                ShopError::security(format!("keychain attribute '{attr}' is invalid: {reason}"))
            }
            Ambiguous(entries) => ShopError::security(format!(
                "multiple keychain entries matched request ({} results)",
                entries.len()
            )),
            PlatformFailure(err) => ShopError::security(format!("keychain platform error: {err}")),
            NoStorageAccess(err) => {
                ShopError::security(format!("unable to access secure storage: {err}"))
            }
            _ => ShopError::security(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_shop())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ShopError */
/* -------------------------------------------------------------------------- */

impl IntoShopError for HttpError {
    fn into_shop(self) -> ShopError {
        if self.is_timeout() {
            return ShopError::network("HTTP request timed out");
        }

        if self.is_connect() {
            return ShopError::network("HTTP connection failure");
        }

        if self.is_decode() {
            return ShopError::decode(format!("failed to decode response body: {self}"));
        }

        if let Some(status) = self.status() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return ShopError::request(status.as_u16(), reason);
        }

        if self.is_builder() {
            return ShopError::internal(format!("invalid HTTP request: {self}"));
        }

        ShopError::network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_shop())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ShopError */
/* -------------------------------------------------------------------------- */

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(ShopError::decode(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → ShopError */
/* -------------------------------------------------------------------------- */

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(ShopError::config(format!("invalid backend URL: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
