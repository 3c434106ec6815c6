//! Bearer credential handling

use std::fmt;

use reqwest::header::HeaderValue;
use rfshop_domain::{Result, ShopError};

/// Personal access token sent as `Authorization: Bearer ...`.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a token, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when the token is blank or not a valid header value.
    pub fn new(token: impl AsRef<str>) -> Result<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(ShopError::invalid_input("access token is empty"));
        }
        if HeaderValue::from_str(token).is_err() {
            return Err(ShopError::invalid_input("access token contains invalid characters"));
        }
        Ok(Self(token.to_string()))
    }

    /// The `Authorization` header value, marked sensitive.
    pub(crate) fn header_value(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|e| ShopError::invalid_input(format!("invalid access token: {e}")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
