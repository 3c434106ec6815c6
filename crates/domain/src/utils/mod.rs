//! Pure business helpers

pub mod dates;
pub mod order_size;

pub use dates::{date_urgency, days_until, parse_date, DateUrgency};
pub use order_size::calculate_order_size;
