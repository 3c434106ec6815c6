//! The loaded working set: active quotes plus their grouped child lines

use std::collections::BTreeMap;

use rfshop_domain::utils::calculate_order_size;
use rfshop_domain::{
    BuildLine, BuildLineFields, OrderSize, Quote, QuoteFields, QuoteLine, QuoteLineFields,
    RemoteRecord,
};
use serde::{Deserialize, Serialize};

use super::{active_quotes, group_by_quote_number};

pub type BuildLinesByQuote = BTreeMap<String, Vec<BuildLine>>;
pub type QuoteLinesByQuote = BTreeMap<String, Vec<QuoteLine>>;

/// Everything a view needs after a successful load.
///
/// A snapshot is built once from three complete fetches and then only read;
/// a reload builds a new snapshot and swaps it in wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopSnapshot {
    pub quotes: Vec<Quote>,
    pub build_lines: BuildLinesByQuote,
    pub quote_lines: QuoteLinesByQuote,
}

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub active_quotes: usize,
    pub build_line_groups: usize,
    pub build_lines: usize,
    pub quote_line_groups: usize,
    pub quote_lines: usize,
}

impl ShopSnapshot {
    pub fn from_records(
        quotes: Vec<RemoteRecord<QuoteFields>>,
        build_lines: Vec<RemoteRecord<BuildLineFields>>,
        quote_lines: Vec<RemoteRecord<QuoteLineFields>>,
    ) -> Self {
        Self {
            quotes: active_quotes(quotes),
            build_lines: group_by_quote_number(build_lines),
            quote_lines: group_by_quote_number(quote_lines),
        }
    }

    /// Build lines of one quote; empty when it has none.
    pub fn build_lines_for(&self, quote_number: &str) -> &[BuildLine] {
        self.build_lines.get(quote_number).map_or(&[], Vec::as_slice)
    }

    /// Quote lines of one quote; empty when it has none.
    pub fn quote_lines_for(&self, quote_number: &str) -> &[QuoteLine] {
        self.quote_lines.get(quote_number).map_or(&[], Vec::as_slice)
    }

    /// Sum of assembly quantities over a quote's build lines, or `None`
    /// when no line carries a quantity.
    pub fn total_assembly_qty(&self, quote_number: &str) -> Option<f64> {
        self.build_lines_for(quote_number)
            .iter()
            .filter_map(|line| line.assembly_qty)
            .fold(None, |acc, qty| Some(acc.unwrap_or(0.0) + qty))
    }

    /// Order size implied by the quote's build lines.
    pub fn suggested_order_size(&self, quote_number: &str) -> OrderSize {
        calculate_order_size(self.total_assembly_qty(quote_number))
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            active_quotes: self.quotes.len(),
            build_line_groups: self.build_lines.len(),
            build_lines: self.build_lines.values().map(Vec::len).sum(),
            quote_line_groups: self.quote_lines.len(),
            quote_lines: self.quote_lines.values().map(Vec::len).sum(),
        }
    }
}
