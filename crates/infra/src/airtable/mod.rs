//! Hosted-table backend adapter (Airtable REST API)

pub mod auth;
pub mod client;
pub mod factory;
pub mod schema;
pub mod types;

pub use auth::BearerToken;
pub use client::AirtableClient;
pub use factory::AirtableGatewayFactory;
pub use schema::TablesResponse;
