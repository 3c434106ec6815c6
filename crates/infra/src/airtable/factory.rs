//! Builds Airtable clients for the session manager

use rfshop_core::session::GatewayFactory;
use rfshop_domain::{AirtableConfig, Config, Result, WriteConfig};

use super::auth::BearerToken;
use super::client::AirtableClient;

/// Creates one [`AirtableClient`] per credential, sharing configuration.
#[derive(Debug, Clone, Default)]
pub struct AirtableGatewayFactory {
    airtable: AirtableConfig,
    writes: WriteConfig,
}

impl AirtableGatewayFactory {
    pub fn new(airtable: AirtableConfig, writes: WriteConfig) -> Self {
        Self { airtable, writes }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.airtable.clone(), config.writes.clone())
    }
}

impl GatewayFactory for AirtableGatewayFactory {
    type Gateway = AirtableClient;

    fn connect(&self, token: &str) -> Result<AirtableClient> {
        AirtableClient::new(BearerToken::new(token)?, self.airtable.clone(), &self.writes)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rfshop_domain::ShopError;

    use super::*;

    #[test]
    fn connect_applies_write_pacing() {
        let factory = AirtableGatewayFactory::new(
            AirtableConfig::default(),
            WriteConfig { batch_size: 4, batch_delay_ms: 10 },
        );
        let client = factory.connect(" patX ").unwrap();

        assert_eq!(client.write_policy().max_batch_size, 4);
        assert_eq!(client.write_policy().inter_batch_delay, Duration::from_millis(10));
    }

    #[test]
    fn connect_rejects_blank_token() {
        let factory = AirtableGatewayFactory::default();
        assert!(matches!(factory.connect(""), Err(ShopError::InvalidInput { .. })));
    }
}
