//! Plain-text rendering of the loaded working set

use std::fmt::Write as _;

use anyhow::bail;
use chrono::NaiveDate;
use rfshop_core::aggregation::{LoadSummary, ShopSnapshot};
use rfshop_domain::utils::{date_urgency, DateUrgency};
use rfshop_domain::OrderSize;

/// One line of the quote overview.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRow {
    pub quote_number: String,
    pub customer: String,
    pub status: String,
    pub internal_status: String,
    pub build_lines: usize,
    pub total_qty: Option<f64>,
    pub order_size: OrderSize,
    pub urgency: Option<DateUrgency>,
}

/// Rows for every active quote, in load order.
pub fn quote_rows(snapshot: &ShopSnapshot, today: NaiveDate) -> Vec<QuoteRow> {
    snapshot
        .quotes
        .iter()
        .map(|quote| {
            let number = quote.quote_number.clone().unwrap_or_default();
            QuoteRow {
                customer: quote.contact_name.clone().unwrap_or_default(),
                status: quote.status.clone().unwrap_or_default(),
                internal_status: quote
                    .internal_status
                    .clone()
                    .unwrap_or_else(|| "Not scheduled".to_string()),
                build_lines: snapshot.build_lines_for(&number).len(),
                total_qty: snapshot.total_assembly_qty(&number),
                order_size: snapshot.suggested_order_size(&number),
                urgency: date_urgency(quote.target_build_date.as_deref(), today),
                quote_number: number,
            }
        })
        .collect()
}

pub fn render_quotes(rows: &[QuoteRow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<12} {:<24} {:<9} {:<14} {:>5} {:>6} {:<15} {}",
        "QUOTE", "CUSTOMER", "STATUS", "INTERNAL", "LINES", "QTY", "SIZE", "TARGET"
    );
    for row in rows {
        let qty = row.total_qty.map_or_else(|| "-".to_string(), |q| format!("{q}"));
        let _ = writeln!(
            out,
            "{:<12} {:<24} {:<9} {:<14} {:>5} {:>6} {:<15} {}",
            row.quote_number,
            truncate(&row.customer, 24),
            row.status,
            row.internal_status,
            row.build_lines,
            qty,
            row.order_size.as_str(),
            urgency_label(row.urgency)
        );
    }
    out
}

pub fn render_summary(summary: &LoadSummary) -> String {
    format!(
        "{} active quote(s); {} build line(s) across {} quote(s); {} quote line(s) across {} quote(s)",
        summary.active_quotes,
        summary.build_lines,
        summary.build_line_groups,
        summary.quote_lines,
        summary.quote_line_groups
    )
}

/// Split `Field=Value`; the field name may contain spaces.
pub fn parse_assignment(input: &str) -> anyhow::Result<(&str, &str)> {
    match input.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value.trim())),
        _ => bail!("Expected Field=Value, got '{input}'"),
    }
}

fn urgency_label(urgency: Option<DateUrgency>) -> &'static str {
    match urgency {
        Some(DateUrgency::Overdue) => "overdue",
        Some(DateUrgency::ThisWeek) => "this week",
        Some(DateUrgency::Upcoming) => "upcoming",
        None => "-",
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
