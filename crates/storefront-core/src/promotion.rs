//! # Promotion Module
//!
//! Pricing-discount rules attachable to a single product.
//!
//! A promotion is a pure function from (unit price, quantity) to a
//! discounted line total. It holds no state beyond its parameters and is
//! immutable after construction; attaching one to a product replaces any
//! previous promotion (last write wins, no stacking).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Discount Rule
// =============================================================================

/// The discount rule variants, as a closed sum type.
///
/// Behavioral differences between promotions live here, dispatched through
/// [`Promotion::apply`] - no trait-object hierarchy needed for a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountRule {
    /// Every second unit of the batch is charged at half price.
    SecondHalfPrice,
    /// Every third unit is free.
    ThirdOneFree,
    /// A fixed percentage off the line total, in basis points
    /// (3000 = 30%).
    ///
    /// The rate is deliberately unclamped: negative values and values
    /// above 10000 are accepted and produce surcharges or negative
    /// totals. Callers that want a sane range must enforce it themselves.
    PercentDiscount { bps: i64 },
}

// =============================================================================
// Promotion
// =============================================================================

/// A named pricing-discount rule.
///
/// ## Example
/// ```rust
/// use storefront_core::{Money, Promotion};
///
/// let promo = Promotion::third_one_free("Third One Free!");
/// let total = promo.apply(Money::from_cents(9000), 3);
/// assert_eq!(total, Money::from_cents(18000)); // one unit free
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    name: String,
    rule: DiscountRule,
}

impl Promotion {
    /// Creates a second-half-price promotion.
    pub fn second_half_price(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            rule: DiscountRule::SecondHalfPrice,
        }
    }

    /// Creates a third-one-free promotion.
    pub fn third_one_free(name: impl Into<String>) -> Self {
        Promotion {
            name: name.into(),
            rule: DiscountRule::ThirdOneFree,
        }
    }

    /// Creates a percent-discount promotion.
    ///
    /// `percent` is converted to basis points (30.0 → 3000) and is NOT
    /// validated against [0, 100]; out-of-range rates are passed through
    /// unchanged.
    pub fn percent_discount(name: impl Into<String>, percent: f64) -> Self {
        Promotion {
            name: name.into(),
            rule: DiscountRule::PercentDiscount {
                bps: (percent * 100.0).round() as i64,
            },
        }
    }

    /// Returns the display name of the promotion.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the discount rule.
    pub fn rule(&self) -> DiscountRule {
        self.rule
    }

    /// Computes the discounted total for `quantity` units at `unit_price`.
    ///
    /// Pure function, no side effects. The caller guarantees
    /// `quantity > 0`; `Product::buy` rejects non-positive quantities
    /// before pricing runs.
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match self.rule {
            DiscountRule::SecondHalfPrice => {
                // A single unit always pays full price. For larger batches
                // the floor(n/2) units pay full and the rest pay half.
                if quantity == 1 {
                    return unit_price;
                }
                let full = quantity / 2;
                let half = quantity - full;
                unit_price * full + unit_price.half() * half
            }
            DiscountRule::ThirdOneFree => {
                let free = quantity / 3;
                unit_price * (quantity - free)
            }
            DiscountRule::PercentDiscount { bps } => {
                (unit_price * quantity).apply_discount_bps(bps)
            }
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_half_price_single_unit_pays_full_price() {
        let promo = Promotion::second_half_price("Second Half price!");
        assert_eq!(promo.apply(Money::from_cents(10000), 1).cents(), 10000);
    }

    #[test]
    fn second_half_price_batch() {
        let promo = Promotion::second_half_price("Second Half price!");
        // q=3: 1 full + 2 half → $100 + 2×$50 = $200
        assert_eq!(promo.apply(Money::from_cents(10000), 3).cents(), 20000);
        // q=2: 1 full + 1 half → $150
        assert_eq!(promo.apply(Money::from_cents(10000), 2).cents(), 15000);
        // q=4: 2 full + 2 half → $300
        assert_eq!(promo.apply(Money::from_cents(10000), 4).cents(), 30000);
    }

    #[test]
    fn third_one_free() {
        let promo = Promotion::third_one_free("Third One Free!");
        // q=3: one free → 2×$90 = $180
        assert_eq!(promo.apply(Money::from_cents(9000), 3).cents(), 18000);
        // q=5: one free → 4×$90 = $360
        assert_eq!(promo.apply(Money::from_cents(9000), 5).cents(), 36000);
        // q=2: nothing free yet
        assert_eq!(promo.apply(Money::from_cents(9000), 2).cents(), 18000);
    }

    #[test]
    fn percent_discount() {
        let promo = Promotion::percent_discount("30% off!", 30.0);
        // 2×$100 minus 30% → $140
        assert_eq!(promo.apply(Money::from_cents(10000), 2).cents(), 14000);
    }

    #[test]
    fn percent_discount_out_of_range_passes_through() {
        // Negative percent: surcharge
        let promo = Promotion::percent_discount("Anti-sale", -10.0);
        assert_eq!(promo.apply(Money::from_cents(10000), 1).cents(), 11000);

        // Over 100%: negative total
        let promo = Promotion::percent_discount("Everything must go", 150.0);
        let total = promo.apply(Money::from_cents(10000), 1);
        assert!(total.is_negative());
        assert_eq!(total.cents(), -5000);
    }

    #[test]
    fn promotion_display_uses_name() {
        let promo = Promotion::second_half_price("Second Half price!");
        assert_eq!(promo.to_string(), "Second Half price!");
        assert_eq!(promo.name(), "Second Half price!");
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_promotion() -> impl Strategy<Value = Promotion> {
            prop_oneof![
                Just(Promotion::second_half_price("Second Half price!")),
                Just(Promotion::third_one_free("Third One Free!")),
                (0.0f64..=100.0).prop_map(|p| Promotion::percent_discount("Percent", p)),
            ]
        }

        proptest! {
            /// Property: apply is a pure function - same inputs always
            /// produce the same output.
            #[test]
            fn apply_is_deterministic(
                promo in any_promotion(),
                price_cents in 0i64..10_000_000,
                quantity in 1i64..10_000,
            ) {
                let price = Money::from_cents(price_cents);
                let first = promo.apply(price, quantity);
                let second = promo.apply(price, quantity);
                prop_assert_eq!(first, second);
            }

            /// Property: an in-range discount never exceeds the undiscounted
            /// line total and never goes negative.
            #[test]
            fn in_range_discount_is_bounded(
                promo in any_promotion(),
                price_cents in 0i64..10_000_000,
                quantity in 1i64..10_000,
            ) {
                let price = Money::from_cents(price_cents);
                let total = promo.apply(price, quantity);
                prop_assert!(total <= price * quantity);
                prop_assert!(!total.is_negative());
            }
        }
    }
}
