//! Line-item total calculation.

use crate::invoice::LineItem;

/// Sum of `quantity * price` over all items, rounded to two decimals.
///
/// An empty slice yields `0.0` (the store's invariants normally forbid that
/// state, but the calculator tolerates it). Non-finite quantities or prices
/// contribute nothing instead of poisoning the sum.
pub fn total(items: &[LineItem]) -> f64 {
    let sum: f64 = items
        .iter()
        .map(|item| {
            let quantity = if item.quantity.is_finite() { item.quantity } else { 0.0 };
            let price = if item.price.is_finite() { item.price } else { 0.0 };
            quantity * price
        })
        .sum();

    (sum * 100.0).round() / 100.0
}

/// Fixed two-decimal rendering of [`total`], e.g. `"1700.00"`.
pub fn total_display(items: &[LineItem]) -> String {
    format!("{:.2}", total(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, price: f64) -> LineItem {
        LineItem {
            description: "item".to_string(),
            quantity,
            price,
        }
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(total(&[]), 0.0);
        assert_eq!(total_display(&[]), "0.00");
    }

    #[test]
    fn sums_quantity_times_price() {
        let items = vec![item(1.0, 1500.0), item(1.0, 200.0)];
        assert_eq!(total(&items), 1700.0);
        assert_eq!(total_display(&items), "1700.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        let items = vec![item(3.0, 0.333)];
        assert_eq!(total(&items), 1.0);

        let items = vec![item(1.0, 0.125), item(1.0, 0.125)];
        assert_eq!(total(&items), 0.25);
    }

    #[test]
    fn non_finite_values_contribute_nothing() {
        let items = vec![
            item(f64::NAN, 100.0),
            item(2.0, f64::INFINITY),
            item(2.0, 50.0),
        ];
        assert_eq!(total(&items), 100.0);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: the total equals the rounded sum of per-item products
            /// for any sequence of finite, non-negative items.
            #[test]
            fn total_is_rounded_sum_of_products(
                pairs in prop::collection::vec((0.0f64..10_000.0, 0.0f64..10_000.0), 0..20)
            ) {
                let items: Vec<LineItem> = pairs
                    .iter()
                    .map(|&(quantity, price)| item(quantity, price))
                    .collect();

                let expected: f64 = pairs.iter().map(|&(q, p)| q * p).sum();
                let expected = (expected * 100.0).round() / 100.0;

                prop_assert!((total(&items) - expected).abs() < 1e-9);
            }

            /// Property: the display form always has exactly two decimals.
            #[test]
            fn display_always_has_two_decimals(
                pairs in prop::collection::vec((0.0f64..1_000.0, 0.0f64..1_000.0), 0..10)
            ) {
                let items: Vec<LineItem> = pairs
                    .iter()
                    .map(|&(quantity, price)| item(quantity, price))
                    .collect();

                let rendered = total_display(&items);
                let (_, decimals) = rendered.split_once('.').expect("decimal point");
                prop_assert_eq!(decimals.len(), 2);
            }
        }
    }
}
