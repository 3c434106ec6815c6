//! Enumerations behind the hosted tables' choice fields
//!
//! Records keep choice values as raw labels (staff can add options in the
//! backend at any time); these enums give a typed view over the labels the
//! shop ships with and seed the static select-option defaults.

use crate::impl_choice_conversions;

/// Quote lifecycle status, synced from the accounting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Invoiced,
    Declined,
    Deleted,
}

impl_choice_conversions!(QuoteStatus {
    Draft => "DRAFT",
    Sent => "SENT",
    Accepted => "ACCEPTED",
    Invoiced => "INVOICED",
    Declined => "DECLINED",
    Deleted => "DELETED",
});

impl QuoteStatus {
    /// Statuses that make a quote part of the active working set.
    pub const ACTIVE: [Self; 4] = [Self::Accepted, Self::Sent, Self::Draft, Self::Invoiced];

    pub fn is_active(self) -> bool {
        Self::ACTIVE.contains(&self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobType {
    CableAssembly,
    StockParts,
    Mixed,
    Unknown,
}

impl_choice_conversions!(JobType {
    CableAssembly => "Cable Assembly",
    StockParts => "Stock/Parts",
    Mixed => "Mixed",
    Unknown => "Unknown",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalStatus {
    NotScheduled,
    Scheduled,
    InProgress,
    Complete,
    Blocked,
}

impl_choice_conversions!(InternalStatus {
    NotScheduled => "Not scheduled",
    Scheduled => "Scheduled",
    InProgress => "In Progress",
    Complete => "Complete",
    Blocked => "Blocked",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl_choice_conversions!(Urgency {
    Low => "Low",
    Medium => "Medium",
    High => "High",
    Critical => "Critical",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
    Production,
}

impl_choice_conversions!(Complexity {
    Simple => "Simple",
    Medium => "Medium",
    Complex => "Complex",
    Production => "Production",
});

/// Order-size bucket by total assembly quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderSize {
    Micro,
    Small,
    Medium,
    Large,
    XLarge,
}

impl_choice_conversions!(OrderSize {
    Micro => "Micro (1-4)",
    Small => "Small (5-10)",
    Medium => "Medium (11-20)",
    Large => "Large (21-50)",
    XLarge => "X Large (51+)",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupplierOrderStatus {
    NotOrdered,
    Ordered,
    PartReceived,
    Received,
}

impl_choice_conversions!(SupplierOrderStatus {
    NotOrdered => "Not ordered",
    Ordered => "Ordered",
    PartReceived => "Part received",
    Received => "Received",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkStatus {
    ToDo,
    InProgress,
    Complete,
}

impl_choice_conversions!(WorkStatus {
    ToDo => "To Do",
    InProgress => "In Progress",
    Complete => "Complete",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBuildStatus {
    Blocked,
    Ready,
    InProgress,
    Complete,
}

impl_choice_conversions!(LineBuildStatus {
    Blocked => "Blocked",
    Ready => "Ready",
    InProgress => "In Progress",
    Complete => "Complete",
});
