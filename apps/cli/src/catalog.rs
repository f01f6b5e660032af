//! Demo catalog seeding.
//!
//! The store opens with a fixed product list and promotion assignments;
//! everything after that happens through the interactive menu.

use anyhow::Result;
use storefront_core::{Money, Product, Promotion, Store};

/// Builds the demo store: three stocked products, one digital good, and
/// a per-order-limited shipping line, with one promotion each on the
/// first three.
pub fn demo_store() -> Result<Store> {
    let mut macbook = Product::new("MacBook Air M2", Money::from_cents(145_000), 100)?;
    macbook.set_promotion(Some(Promotion::second_half_price("Second Half price!")));

    let mut earbuds = Product::new("Bose QuietComfort Earbuds", Money::from_cents(25_000), 500)?;
    earbuds.set_promotion(Some(Promotion::third_one_free("Third One Free!")));

    let mut pixel = Product::new("Google Pixel 7", Money::from_cents(50_000), 250)?;
    pixel.set_promotion(Some(Promotion::percent_discount("30% off!", 30.0)));

    let windows_license = Product::non_stocked("Windows License", Money::from_cents(12_500))?;
    let shipping = Product::limited("Shipping", Money::from_cents(1_000), 250, 1)?;

    let store = Store::with_products(vec![macbook, earbuds, pixel, windows_license, shipping])?;

    tracing::debug!(
        products = store.get_all_products().len(),
        total_quantity = store.get_total_quantity(),
        "seeded demo catalog"
    );

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_store_seeds_five_active_products() {
        let store = demo_store().unwrap();
        assert_eq!(store.get_all_products().len(), 5);
        assert_eq!(store.get_total_quantity(), 100 + 500 + 250 + 250);
    }

    #[test]
    fn demo_store_promotion_assignments() {
        let store = demo_store().unwrap();
        let promos: Vec<Option<&str>> = store
            .get_all_products()
            .iter()
            .map(|p| p.promotion().map(|promo| promo.name()))
            .collect();
        assert_eq!(
            promos,
            vec![
                Some("Second Half price!"),
                Some("Third One Free!"),
                Some("30% off!"),
                None,
                None,
            ]
        );
    }
}
