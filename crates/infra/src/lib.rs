//! # RFShop Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The HTTP transport and the Airtable record/metadata client
//! - Configuration loading (files + environment)
//! - Keyring-backed credential storage
//! - Logging bootstrap
//!
//! ## Architecture
//! - Implements traits defined in `rfshop-core`
//! - Contains all "impure" code (network, keyring, filesystem)

pub mod airtable;
pub mod config;
pub mod credentials;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use airtable::{AirtableClient, AirtableGatewayFactory, BearerToken};
pub use credentials::{KeyringCredentialStore, MemoryCredentialStore};
pub use errors::InfraError;
pub use http::HttpClient;
