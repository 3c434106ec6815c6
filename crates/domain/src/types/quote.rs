//! Quotes table: the order documents

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::choices::{
    Complexity, InternalStatus, JobType, OrderSize, QuoteStatus, SupplierOrderStatus, Urgency,
};
use super::{Entity, QuoteLinked};

/// Fields of a quote row: accounting data plus the scheduling fields that
/// shop staff fill in. Scheduling fields are absent until someone sets them.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteFields {
    #[serde(rename = "QuoteNumber")]
    pub quote_number: Option<String>,
    #[serde(rename = "QuoteID")]
    pub quote_id: Option<String>,
    #[serde(rename = "Reference")]
    pub reference: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "QuoteDate")]
    pub quote_date: Option<String>,
    #[serde(rename = "ExpiryDate")]
    pub expiry_date: Option<String>,

    #[serde(rename = "ContactName")]
    pub contact_name: Option<String>,
    #[serde(rename = "ContactEmail")]
    pub contact_email: Option<String>,
    #[serde(rename = "ContactFirstName")]
    pub contact_first_name: Option<String>,
    #[serde(rename = "ContactLastName")]
    pub contact_last_name: Option<String>,
    #[serde(rename = "ContactAccountNumber")]
    pub contact_account_number: Option<String>,

    #[serde(rename = "Currency")]
    pub currency: Option<String>,
    #[serde(rename = "SubTotal")]
    pub sub_total: Option<f64>,
    #[serde(rename = "TotalTax")]
    pub total_tax: Option<f64>,
    #[serde(rename = "Total")]
    pub total: Option<f64>,
    #[serde(rename = "TotalDiscount")]
    pub total_discount: Option<f64>,

    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Summary")]
    pub summary: Option<String>,
    #[serde(rename = "Terms")]
    pub terms: Option<String>,
    #[serde(rename = "LineItemsCount")]
    pub line_items_count: Option<f64>,
    #[serde(rename = "LineItemsSummary")]
    pub line_items_summary: Option<String>,

    // Scheduling
    #[serde(rename = "Internal Job Type")]
    pub internal_job_type: Option<String>,
    #[serde(rename = "Internal Status")]
    pub internal_status: Option<String>,
    #[serde(rename = "Urgency")]
    pub urgency: Option<String>,
    #[serde(rename = "Complexity")]
    pub complexity: Option<String>,
    #[serde(rename = "Order Size")]
    pub order_size: Option<String>,
    #[serde(rename = "Target Build Date")]
    pub target_build_date: Option<String>,
    #[serde(rename = "Expected Delivery Date")]
    pub expected_delivery_date: Option<String>,
    #[serde(rename = "Completion Date")]
    pub completion_date: Option<String>,
    #[serde(rename = "Scheduling Notes")]
    pub scheduling_notes: Option<String>,
    #[serde(rename = "Supplier / PO Reference")]
    pub supplier_po_reference: Option<String>,
    #[serde(rename = "Last Reviewed")]
    pub last_reviewed: Option<String>,
    #[serde(rename = "Supplier Order Status")]
    pub supplier_order_status: Option<String>,

    // Batch orders
    #[serde(rename = "Is Batch Order")]
    pub is_batch_order: Option<bool>,
    #[serde(rename = "Batch Frequency")]
    pub batch_frequency: Option<String>,
    #[serde(rename = "Total Batches")]
    pub total_batches: Option<f64>,
    #[serde(rename = "Batches Completed")]
    pub batches_completed: Option<f64>,
    #[serde(rename = "Estimated Lead Time")]
    pub estimated_lead_time: Option<String>,
}

impl QuoteFields {
    /// Typed status; `None` when absent or not one of the known labels.
    pub fn status(&self) -> Option<QuoteStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }

    /// Whether this quote belongs to the active working set.
    pub fn is_active(&self) -> bool {
        self.status().is_some_and(QuoteStatus::is_active)
    }

    pub fn job_type(&self) -> Option<JobType> {
        self.internal_job_type.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn internal_status(&self) -> Option<InternalStatus> {
        self.internal_status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.urgency.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn complexity(&self) -> Option<Complexity> {
        self.complexity.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn order_size(&self) -> Option<OrderSize> {
        self.order_size.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn supplier_order_status(&self) -> Option<SupplierOrderStatus> {
        self.supplier_order_status.as_deref().and_then(|s| s.parse().ok())
    }
}

impl QuoteLinked for QuoteFields {
    fn quote_number(&self) -> Option<&str> {
        self.quote_number.as_deref().filter(|qn| !qn.is_empty())
    }
}

/// Quote with its record id merged in.
pub type Quote = Entity<QuoteFields>;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_backend_field_names() {
        let fields: QuoteFields = serde_json::from_value(json!({
            "QuoteNumber": "QU-0100",
            "Status": "ACCEPTED",
            "Total": 1250.5,
            "Internal Status": "Scheduled",
            "Supplier / PO Reference": "PO-77",
            "Is Batch Order": true,
            "Some Future Column": "ignored"
        }))
        .unwrap();

        assert_eq!(fields.quote_number.as_deref(), Some("QU-0100"));
        assert_eq!(fields.status(), Some(QuoteStatus::Accepted));
        assert_eq!(fields.internal_status(), Some(InternalStatus::Scheduled));
        assert_eq!(fields.supplier_po_reference.as_deref(), Some("PO-77"));
        assert_eq!(fields.total, Some(1250.5));
        assert_eq!(fields.is_batch_order, Some(true));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let fields: QuoteFields = serde_json::from_value(json!({})).unwrap();
        assert_eq!(fields, QuoteFields::default());
        assert!(!fields.is_active());
    }

    #[test]
    fn unknown_status_label_is_not_active() {
        let fields = QuoteFields { status: Some("ARCHIVED".into()), ..Default::default() };
        assert_eq!(fields.status(), None);
        assert!(!fields.is_active());
    }

    #[test]
    fn serialization_skips_unset_fields() {
        let fields = QuoteFields {
            quote_number: Some("QU-1".into()),
            urgency: Some("High".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&fields).unwrap(),
            json!({ "QuoteNumber": "QU-1", "Urgency": "High" })
        );
    }

    #[test]
    fn empty_quote_number_is_not_a_join_key() {
        let fields = QuoteFields { quote_number: Some(String::new()), ..Default::default() };
        assert_eq!(QuoteLinked::quote_number(&fields), None);
    }
}
