//! Application constants
//!
//! Backend identifiers, protocol limits and the static select-option
//! defaults used when schema discovery is unavailable.

use crate::types::{
    Complexity, InternalStatus, JobType, LineBuildStatus, OrderSize, SelectOptionsMap,
    SupplierOrderStatus, Urgency,
};

// Backend endpoint and identifiers
pub const DEFAULT_BASE_URL: &str = "https://api.airtable.com/v0";
pub const BASE_ID: &str = "app2rn4sxcLGg7JiS";
pub const QUOTES_TABLE_ID: &str = "tbldUzgzZoKByIw6P";
pub const BUILD_LINES_TABLE_ID: &str = "tblpHOLE5zHZR1Rul";
pub const QUOTE_LINES_TABLE_ID: &str = "tbl3SQJ6AqAzXXk1L";

// Protocol limits
pub const PAGE_SIZE: u32 = 100;
pub const MAX_BATCH_SIZE: usize = 10;
pub const BATCH_DELAY_MS: u64 = 250;
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Schema field type that marks a single-choice field.
pub const SINGLE_SELECT_FIELD_TYPE: &str = "singleSelect";

// Credential storage
pub const STORAGE_KEY_TOKEN: &str = "rfshop_airtable_token";
pub const CREDENTIAL_SERVICE: &str = "com.rfshop.scheduler";

/// Inclusive quantity bounds per order-size bucket; the last is open-ended.
pub const ORDER_SIZE_BUCKETS: [(u32, Option<u32>, OrderSize); 5] = [
    (1, Some(4), OrderSize::Micro),
    (5, Some(10), OrderSize::Small),
    (11, Some(20), OrderSize::Medium),
    (21, Some(50), OrderSize::Large),
    (51, None, OrderSize::XLarge),
];

/// Static select options, per field name.
pub fn default_select_options() -> SelectOptionsMap {
    let bucket_labels =
        ORDER_SIZE_BUCKETS.iter().map(|(_, _, size)| size.as_str().to_string()).collect();

    SelectOptionsMap::from([
        ("Internal Job Type".to_string(), JobType::labels()),
        ("Internal Status".to_string(), InternalStatus::labels()),
        ("Urgency".to_string(), Urgency::labels()),
        ("Complexity".to_string(), Complexity::labels()),
        ("Order Size".to_string(), bucket_labels),
        ("Supplier Order Status".to_string(), SupplierOrderStatus::labels()),
        ("Line Build Status".to_string(), LineBuildStatus::labels()),
        ("Line Urgency".to_string(), Urgency::labels()),
        ("Line Complexity".to_string(), Complexity::labels()),
    ])
}
