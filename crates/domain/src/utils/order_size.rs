//! Order-size bucketing by total assembly quantity

use crate::constants::ORDER_SIZE_BUCKETS;
use crate::types::OrderSize;

/// Bucket a total quantity into an order size.
///
/// Missing, zero and negative quantities count as the smallest bucket.
/// Fractional quantities fall into the bucket of their whole part, so
/// anything below one is also the smallest bucket.
///
/// # Arguments
///
/// * `total_qty` - Sum of assembly quantities across an order's build lines
///
/// # Examples
///
/// ```
/// use rfshop_domain::utils::order_size::calculate_order_size;
/// use rfshop_domain::OrderSize;
///
/// assert_eq!(calculate_order_size(None), OrderSize::Micro);
/// assert_eq!(calculate_order_size(Some(10.0)), OrderSize::Small);
/// assert_eq!(calculate_order_size(Some(51.0)), OrderSize::XLarge);
/// ```
#[must_use]
pub fn calculate_order_size(total_qty: Option<f64>) -> OrderSize {
    let qty = match total_qty {
        Some(qty) if qty >= 1.0 => qty.floor(),
        _ => return OrderSize::Micro,
    };

    ORDER_SIZE_BUCKETS
        .iter()
        .find(|(min, max, _)| {
            qty >= f64::from(*min) && max.map_or(true, |max| qty <= f64::from(max))
        })
        .map_or(OrderSize::XLarge, |(_, _, size)| *size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries() {
        let cases = [
            (0.5, OrderSize::Micro),
            (0.99, OrderSize::Micro),
            (1.0, OrderSize::Micro),
            (4.9, OrderSize::Micro),
            (10.5, OrderSize::Small),
            (4.0, OrderSize::Micro),
            (5.0, OrderSize::Small),
            (10.0, OrderSize::Small),
            (11.0, OrderSize::Medium),
            (20.0, OrderSize::Medium),
            (21.0, OrderSize::Large),
            (50.0, OrderSize::Large),
            (51.0, OrderSize::XLarge),
            (5000.0, OrderSize::XLarge),
        ];
        for (qty, expected) in cases {
            assert_eq!(calculate_order_size(Some(qty)), expected, "qty {qty}");
        }
    }

    #[test]
    fn non_positive_quantities_are_micro() {
        assert_eq!(calculate_order_size(Some(0.0)), OrderSize::Micro);
        assert_eq!(calculate_order_size(Some(-3.0)), OrderSize::Micro);
    }

    #[test]
    fn fractional_quantities_use_whole_part() {
        assert_eq!(calculate_order_size(Some(4.5)), OrderSize::Micro);
        assert_eq!(calculate_order_size(Some(50.9)), OrderSize::Large);
    }
}
