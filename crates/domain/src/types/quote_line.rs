//! Quotes Line Items table

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Entity, QuoteLinked};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteLineFields {
    #[serde(rename = "QuoteNumber")]
    pub quote_number: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "ItemCode")]
    pub item_code: Option<String>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<f64>,
    #[serde(rename = "UnitAmount")]
    pub unit_amount: Option<f64>,
    #[serde(rename = "LineAmount")]
    pub line_amount: Option<f64>,
    #[serde(rename = "DiscountAmount")]
    pub discount_amount: Option<f64>,
    #[serde(rename = "DiscountRate")]
    pub discount_rate: Option<f64>,
    #[serde(rename = "TaxAmount")]
    pub tax_amount: Option<f64>,
    #[serde(rename = "TaxType")]
    pub tax_type: Option<String>,
    #[serde(rename = "Quote")]
    pub quote: Option<Vec<String>>,
}

impl QuoteLinked for QuoteLineFields {
    fn quote_number(&self) -> Option<&str> {
        self.quote_number.as_deref().filter(|qn| !qn.is_empty())
    }
}

/// Quote line item with its record id merged in.
pub type QuoteLine = Entity<QuoteLineFields>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_amounts() {
        let fields: QuoteLineFields = serde_json::from_value(json!({
            "QuoteNumber": "QU-3",
            "Quantity": 12,
            "UnitAmount": 4.5,
            "LineAmount": 54.0,
            "TaxAmount": 10.8
        }))
        .unwrap();

        assert_eq!(fields.quantity, Some(12.0));
        assert_eq!(fields.line_amount, Some(54.0));
        assert_eq!(QuoteLinked::quote_number(&fields), Some("QU-3"));
    }
}
