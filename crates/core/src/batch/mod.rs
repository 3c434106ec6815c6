//! Paced, sequential batch submission
//!
//! The backend caps update requests at ten records and rate-limits bursts,
//! so writes go out one batch at a time with a fixed pause in between.

pub mod writer;

pub use writer::{submit_in_batches, BatchPolicy};
