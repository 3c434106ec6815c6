//! Configuration structures
//!
//! Every section has a default matching the production backend, so an
//! empty config file (or none at all) yields a working configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_ID, BATCH_DELAY_MS, BUILD_LINES_TABLE_ID, DEFAULT_BASE_URL, MAX_BATCH_SIZE, PAGE_SIZE,
    QUOTES_TABLE_ID, QUOTE_LINES_TABLE_ID, REQUEST_TIMEOUT_SECS,
};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub airtable: AirtableConfig,
    pub writes: WriteConfig,
    pub logging: LoggingConfig,
}

/// Backend endpoint, workspace and collection identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirtableConfig {
    pub base_url: String,
    pub base_id: String,
    pub tables: TableIds,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl AirtableConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for AirtableConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            base_id: BASE_ID.to_string(),
            tables: TableIds::default(),
            page_size: PAGE_SIZE,
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Collection ids of the three tables the dashboard reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableIds {
    pub quotes: String,
    pub build_lines: String,
    pub quote_lines: String,
}

impl Default for TableIds {
    fn default() -> Self {
        Self {
            quotes: QUOTES_TABLE_ID.to_string(),
            build_lines: BUILD_LINES_TABLE_ID.to_string(),
            quote_lines: QUOTE_LINES_TABLE_ID.to_string(),
        }
    }
}

/// Batched write pacing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteConfig {
    /// Records per batch request (the backend accepts at most 10)
    pub batch_size: usize,
    /// Pause between consecutive batch requests
    pub batch_delay_ms: u64,
}

impl WriteConfig {
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self { batch_size: MAX_BATCH_SIZE, batch_delay_ms: BATCH_DELAY_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
