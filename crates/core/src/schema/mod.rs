//! Select-option registry with live-then-default fallback
//!
//! Live options come from schema discovery; static defaults cover fields the
//! discovery did not return, or the whole map when discovery failed.

use rfshop_domain::constants::default_select_options;
use rfshop_domain::SelectOptionsMap;
use serde::{Deserialize, Serialize};

/// Outcome of a schema load.
///
/// A load always succeeds: when discovery fails the callers keep going on
/// static defaults and `schema_error` carries the advisory message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaLoadResult {
    pub success: bool,
    pub missing_fields: Vec<String>,
    pub schema_error: Option<String>,
}

impl SchemaLoadResult {
    pub fn loaded() -> Self {
        Self { success: true, missing_fields: Vec::new(), schema_error: None }
    }

    pub fn degraded(error: impl Into<String>) -> Self {
        Self { success: true, missing_fields: Vec::new(), schema_error: Some(error.into()) }
    }

    /// Whether live options were installed.
    pub fn is_live(&self) -> bool {
        self.schema_error.is_none()
    }
}

/// Resolves legal values for a choice field.
#[derive(Debug, Clone)]
pub struct SelectOptionsRegistry {
    live: Option<SelectOptionsMap>,
    defaults: SelectOptionsMap,
}

impl Default for SelectOptionsRegistry {
    fn default() -> Self {
        Self::new(default_select_options())
    }
}

impl SelectOptionsRegistry {
    pub fn new(defaults: SelectOptionsMap) -> Self {
        Self { live: None, defaults }
    }

    /// Options for `field`: live if discovered, else the static default,
    /// else empty.
    pub fn get(&self, field: &str) -> &[String] {
        self.live
            .as_ref()
            .and_then(|live| live.get(field))
            .or_else(|| self.defaults.get(field))
            .map_or(&[], Vec::as_slice)
    }

    /// Install a freshly discovered map, replacing any previous one.
    pub fn set_live(&mut self, live: SelectOptionsMap) {
        self.live = Some(live);
    }

    /// Fields with a static default that the live map does not cover. All
    /// defaulted fields when no live map is installed.
    pub fn defaulted_fields(&self) -> Vec<String> {
        self.defaults
            .keys()
            .filter(|field| !self.live.as_ref().is_some_and(|live| live.contains_key(*field)))
            .cloned()
            .collect()
    }

    pub fn clear_live(&mut self) {
        self.live = None;
    }

    /// Whether a live schema has been installed.
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Every field the registry can answer for, with resolved options.
    pub fn resolved(&self) -> SelectOptionsMap {
        let mut merged = self.defaults.clone();
        if let Some(live) = &self.live {
            merged.extend(live.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }
}
