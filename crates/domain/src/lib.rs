//! # RFShop Domain
//!
//! Business domain types and models for the RFShop scheduler.
//!
//! This crate contains:
//! - Record envelopes and the quote / build-line / quote-line payloads
//! - Choice enumerations and the static select-option defaults
//! - The domain error type and Result alias
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other RFShop crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
