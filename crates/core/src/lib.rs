//! # RFShop Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces for the hosted-table backend and credential storage
//! - The aggregation layer that reshapes fetched records for views
//! - Select-option resolution with static fallback
//! - The paced batch writer driver
//! - Session and authentication services
//!
//! ## Architecture Principles
//! - Only depends on `rfshop-domain`
//! - No HTTP, keyring or platform code
//! - All external dependencies via traits

pub mod aggregation;
pub mod auth;
pub mod batch;
pub mod schema;
pub mod session;

pub use aggregation::{active_quotes, group_by_quote_number, LoadSummary, ShopSnapshot};
pub use auth::{auth_failure_hint, AuthOutcome, CredentialStore, SessionManager};
pub use batch::{submit_in_batches, BatchPolicy};
pub use schema::{SchemaLoadResult, SelectOptionsRegistry};
pub use session::{GatewayFactory, ListQuery, RecordGateway, ShopSession};
