//! Quote Parts Requirements table: per-assembly build work

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::choices::{Complexity, LineBuildStatus, Urgency, WorkStatus};
use super::{Entity, QuoteLinked};

/// Fields of a build-line row. Linked to its quote by `QuoteNumber`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildLineFields {
    #[serde(rename = "QuoteNumber")]
    pub quote_number: Option<String>,
    #[serde(rename = "QuoteStatus")]
    pub quote_status: Option<String>,
    #[serde(rename = "CustomerName")]
    pub customer_name: Option<String>,

    #[serde(rename = "AssemblySKU")]
    pub assembly_sku: Option<String>,
    #[serde(rename = "AssemblyDescription")]
    pub assembly_description: Option<String>,
    #[serde(rename = "AssemblyQty")]
    pub assembly_qty: Option<f64>,

    #[serde(rename = "Connector1Code")]
    pub connector1_code: Option<String>,
    #[serde(rename = "Connector1SKU")]
    pub connector1_sku: Option<String>,
    #[serde(rename = "Connector1Qty")]
    pub connector1_qty: Option<f64>,
    #[serde(rename = "Connector2Code")]
    pub connector2_code: Option<String>,
    #[serde(rename = "Connector2SKU")]
    pub connector2_sku: Option<String>,
    #[serde(rename = "Connector2Qty")]
    pub connector2_qty: Option<f64>,

    #[serde(rename = "CableCode")]
    pub cable_code: Option<String>,
    #[serde(rename = "CableLengthMM")]
    pub cable_length_mm: Option<f64>,
    #[serde(rename = "TotalCableLengthM")]
    pub total_cable_length_m: Option<f64>,

    #[serde(rename = "WorkStatus")]
    pub work_status: Option<String>,
    /// Linked quote record ids.
    #[serde(rename = "Quote")]
    pub quote: Option<Vec<String>>,

    // Scheduling
    #[serde(rename = "Line Target Build Date")]
    pub line_target_build_date: Option<String>,
    #[serde(rename = "Line Build Status")]
    pub line_build_status: Option<String>,
    #[serde(rename = "Line Urgency")]
    pub line_urgency: Option<String>,
    #[serde(rename = "Line Complexity")]
    pub line_complexity: Option<String>,
    #[serde(rename = "Line Scheduling Notes")]
    pub line_scheduling_notes: Option<String>,

    // Stock check-off
    #[serde(rename = "Connector1 In Stock")]
    pub connector1_in_stock: Option<bool>,
    #[serde(rename = "Connector2 In Stock")]
    pub connector2_in_stock: Option<bool>,
    #[serde(rename = "Cable In Stock")]
    pub cable_in_stock: Option<bool>,
    #[serde(rename = "Parts Verified Date")]
    pub parts_verified_date: Option<String>,
    #[serde(rename = "Parts Verified By")]
    pub parts_verified_by: Option<String>,
}

impl BuildLineFields {
    pub fn work_status(&self) -> Option<WorkStatus> {
        self.work_status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn line_build_status(&self) -> Option<LineBuildStatus> {
        self.line_build_status.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn line_urgency(&self) -> Option<Urgency> {
        self.line_urgency.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn line_complexity(&self) -> Option<Complexity> {
        self.line_complexity.as_deref().and_then(|s| s.parse().ok())
    }

    /// True when every part this line needs has been checked off as in
    /// stock. Parts the line does not use are ignored.
    pub fn parts_in_stock(&self) -> bool {
        let needs = [
            (self.connector1_code.is_some(), self.connector1_in_stock),
            (self.connector2_code.is_some(), self.connector2_in_stock),
            (self.cable_code.is_some(), self.cable_in_stock),
        ];
        needs.iter().all(|(needed, checked)| !needed || checked.unwrap_or(false))
    }
}

impl QuoteLinked for BuildLineFields {
    fn quote_number(&self) -> Option<&str> {
        self.quote_number.as_deref().filter(|qn| !qn.is_empty())
    }
}

/// Build line with its record id merged in.
pub type BuildLine = Entity<BuildLineFields>;
