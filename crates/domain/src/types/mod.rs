//! Domain types and models
//!
//! Record envelopes, the three table payloads (quotes, build lines, quote
//! lines), and the choice enumerations behind their select fields.

pub mod build_line;
pub mod choices;
pub mod quote;
pub mod quote_line;
pub mod record;

use std::collections::BTreeMap;

pub use build_line::{BuildLine, BuildLineFields};
pub use choices::{
    Complexity, InternalStatus, JobType, LineBuildStatus, OrderSize, QuoteStatus,
    SupplierOrderStatus, Urgency, WorkStatus,
};
pub use quote::{Quote, QuoteFields};
pub use quote_line::{QuoteLine, QuoteLineFields};
pub use record::{Entity, FieldMap, RecordUpdate, RemoteRecord};

/// Field name -> ordered legal values for that choice field.
pub type SelectOptionsMap = BTreeMap<String, Vec<String>>;

/// Payloads that reference their parent quote by quote number.
///
/// The quote number is the join key between tables. It is not enforced by
/// the backend, so it can be missing; empty strings count as missing.
pub trait QuoteLinked {
    fn quote_number(&self) -> Option<&str>;
}
