//! Reshaping flat record lists into the structures views consume
//!
//! Everything here is pure and synchronous. Malformed records (no join key,
//! unknown status) are excluded; aggregation itself never fails.

pub mod snapshot;

use std::collections::BTreeMap;

use rfshop_domain::{Entity, Quote, QuoteFields, QuoteLinked, RemoteRecord};
use tracing::debug;

pub use snapshot::{BuildLinesByQuote, LoadSummary, QuoteLinesByQuote, ShopSnapshot};

/// Flatten quote records and keep only the active working set
/// (ACCEPTED, SENT, DRAFT, INVOICED), in original order.
pub fn active_quotes(records: Vec<RemoteRecord<QuoteFields>>) -> Vec<Quote> {
    let total = records.len();
    let active: Vec<Quote> =
        records.into_iter().filter(|r| r.fields.is_active()).map(Entity::from).collect();

    debug!(total, active = active.len(), "filtered quotes to active statuses");
    active
}

/// Group records by quote number in a single pass.
///
/// Within each group, records keep the order the backend returned them.
/// Records without a quote number are dropped.
pub fn group_by_quote_number<T>(records: Vec<RemoteRecord<T>>) -> BTreeMap<String, Vec<Entity<T>>>
where
    T: QuoteLinked,
{
    let mut groups: BTreeMap<String, Vec<Entity<T>>> = BTreeMap::new();
    let mut unlinked = 0usize;

    for record in records {
        let Some(key) = record.fields.quote_number().map(str::to_owned) else {
            unlinked += 1;
            continue;
        };
        groups.entry(key).or_default().push(Entity::from(record));
    }

    if unlinked > 0 {
        debug!(unlinked, groups = groups.len(), "dropped records without a quote number");
    }

    groups
}
